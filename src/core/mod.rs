//! core/mod.rs
//!
//! Everything that isn't GUI:
//! - catalog types + catalog file IO
//! - settings
//! - audio sample service (engine thread, duration probe)
//!
//! No Iced imports in here.

pub mod catalog;
pub mod error;
pub mod playback;
pub mod settings;
pub mod types;
