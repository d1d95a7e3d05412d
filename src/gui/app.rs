//! gui/app.rs
//! Frame driver state: the player model wired to the real audio engine,
//! plus the bits only the window runtime cares about.

use std::time::Instant;

use tracing::{info, warn};

use crate::core::catalog;
use crate::core::playback::{Engine, start_engine};
use crate::core::settings::Settings;

use super::images::ImageStore;
use super::player::Player;
use super::util::FpsCounter;

pub(crate) struct App {
    pub player: Player<Engine>,
    pub images: ImageStore,
    pub fps: FpsCounter,
}

impl App {
    /// Startup: read the catalog, rewrite the export, start the engine.
    pub(crate) fn boot(settings: Settings) -> Self {
        let catalog = catalog::load_or_create(&settings.catalog_path);

        match catalog::write_export(&catalog, &settings.export_path) {
            Ok(()) => info!(path = %settings.export_path.display(), "wrote song export"),
            Err(e) => warn!("{e}"),
        }

        let engine = start_engine(settings.volume);
        let images = ImageStore::new(settings.fallback_image());

        Self {
            player: Player::new(catalog, settings, engine),
            images,
            fps: FpsCounter::default(),
        }
    }

    pub(crate) fn title(&self) -> String {
        format!("Music Player [FPS: {}]", self.fps.fps())
    }

    /// Update phase for one display refresh.
    pub(crate) fn frame(&mut self, now: Instant) {
        self.player.frame(now);
        self.images.warm(&self.player.elements);
        self.fps.frame(now);
    }
}
