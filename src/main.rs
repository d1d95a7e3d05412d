//! Distinction
//!
//! # What this program is
//! A fixed-size (960x540) desktop music player. It reads an album catalog
//! from XML, lists the albums down the left, the selected album's songs on
//! the right, and shows a now-playing bar with transport controls.
//!
//! # How a frame works
//! Think "video game loop":
//!
//! - every display refresh the runtime sends `Message::Frame(now)`
//! - `update` advances playback (auto-advance / repeat), ages the particles,
//!   and rebuilds the whole element list from the current `Session`
//! - `view` hands that list to a canvas which paints it, back layer first
//!
//! Pointer moves only change the hover highlight. A left-button release hit-tests
//! the current list and runs the clicked element's `Action`.
//!
//! # Layout of the code
//! - `core::*` = no GUI: catalog XML, settings, audio (engine thread + probe)
//! - `gui::*`  = session state, layout, hit-testing, particles, painting
//!
//! # Concurrency model
//! - Audio output lives on its own thread (`core::playback::engine`).
//! - The GUI talks to it over a channel and never blocks on it.

mod core;
mod gui;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::core::settings::load_settings;
use crate::gui::view::constants::{HEIGHT, WIDTH};

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides, e.g. RUST_LOG=distinction=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    tracing::info!(catalog = %settings.catalog_path.display(), "starting");

    iced::application(
        move || gui::App::boot(settings.clone()),
        gui::update,
        gui::view,
    )
    .title(gui::App::title)
    .subscription(gui::subscription)
    .window_size((WIDTH, HEIGHT))
    .resizable(false)
    .run()
    .context("window runtime failed")
}
