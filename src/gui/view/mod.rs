//! Layout builder (reads state, produces this frame's elements; no mutation).
//!
//! Panels are built in a fixed order: playbar (if showing), album sidebar,
//! song panel. Build order is also hit-test priority, so the playbar buttons
//! beat the song rows underneath them.

pub(crate) mod constants;
mod playbar;
mod sidebar;
mod songs;

use std::time::Instant;

use crate::core::settings::Settings;
use crate::core::types::Catalog;

use super::element::ElementList;
use super::state::Session;

pub(crate) fn build_frame(
    session: &Session,
    catalog: &Catalog,
    settings: &Settings,
    now: Instant,
) -> ElementList {
    let mut list = ElementList::new();

    if session.playbar_visible() {
        playbar::build_playbar(&mut list, session, settings, now);
    }
    sidebar::build_album_sidebar(&mut list, session, catalog);
    songs::build_song_panel(&mut list, session, catalog);

    list
}
