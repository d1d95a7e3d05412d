//! Small pure helper functions used by the GUI.
//! - no widgets, no state mutation (except the FPS counter's own)

use std::time::{Duration, Instant};

/// Cut `s` to `max` characters and add "..." if it was longer.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

/// Per-axis scale that stretches an image of `natural` size to `requested`.
///
/// Each axis is scaled on its own, so aspect ratio is NOT kept.
pub(crate) fn image_scale(natural: (f32, f32), requested: (f32, f32)) -> (f32, f32) {
    let axis = |n: f32, r: f32| if n > 0.0 { r / n } else { 0.0 };
    (axis(natural.0, requested.0), axis(natural.1, requested.1))
}

/// Frames seen in the last whole second, for the window title.
#[derive(Debug)]
pub(crate) struct FpsCounter {
    window_start: Option<Instant>,
    frames: u32,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            window_start: None,
            frames: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub(crate) fn frame(&mut self, now: Instant) {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        if now.saturating_duration_since(start) >= Duration::from_secs(1) {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = Some(now);
        }
    }

    pub(crate) fn fps(&self) -> u32 {
        self.fps
    }
}
