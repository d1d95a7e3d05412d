//! Application settings.
//!
//! Stored with `confy` in the platform config dir. A missing or unreadable
//! file just means defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

const CONFIG_NAME: &str = "distinction";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Catalog read at startup.
    pub catalog_path: PathBuf,
    /// Flattened song list written at startup.
    pub export_path: PathBuf,
    /// Control icons + `error.png` fallback.
    pub images_dir: PathBuf,
    /// 0.0..=1.0
    pub volume: f32,

    // Pause/resume particle burst
    pub burst_amount: usize,
    pub burst_size: f32,
    pub burst_speed: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("player_data.xml"),
            export_path: PathBuf::from("all_songs.xml"),
            images_dir: PathBuf::from("images"),
            volume: 1.0,
            burst_amount: 20,
            burst_size: 2.0,
            burst_speed: 3,
        }
    }
}

impl Settings {
    pub fn fallback_image(&self) -> PathBuf {
        self.images_dir.join("error.png")
    }

    pub fn icon(&self, name: &str) -> PathBuf {
        self.images_dir.join(format!("{name}.png"))
    }
}

pub fn load_settings() -> Settings {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!("settings unreadable ({e}), using defaults");
        Settings::default()
    })
}
