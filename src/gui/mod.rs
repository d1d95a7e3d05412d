//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app + player state ('App', 'Player', 'Session')
//! - messages ('Message')
//! - the per-frame pipeline: layout ('view') -> hover/click ('element',
//!   'update') -> paint ('canvas')
//! - particles, images, small UI helpers ('util')

pub(crate) mod app;
pub(crate) mod canvas;
pub(crate) mod element;
pub(crate) mod images;
pub(crate) mod particles;
pub(crate) mod player;
pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use app::App;
pub(crate) use canvas::view;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
