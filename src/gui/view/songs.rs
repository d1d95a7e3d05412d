//! Song panel: column headers + one clickable row per song of the selected album.

use crate::core::types::{Album, Catalog};
use crate::gui::element::{Action, Area, ElementList, Layer};
use crate::gui::state::Session;

use super::constants::{
    COLUMN_PITCH, COLUMN_TITLES, FONT_PX, HEADER_MARGIN, HEIGHT, HIGHLIGHT, SCALE_BODY,
    SCALE_HEADING, SECONDARY, SIDEBAR_W, SONG_MARGIN, SONG_ROW, SONG_ROW_GAP, SONG_ROW_H, TEXT,
    UNKNOWN_RELEASE, WHITE_TEXT, WIDTH,
};

pub(crate) fn build_song_panel(list: &mut ElementList, session: &Session, catalog: &Catalog) {
    list.rect(Area::new(0.0, 0.0, WIDTH, HEIGHT), SECONDARY, Layer::Back);
    list.text(
        SIDEBAR_W + HEADER_MARGIN,
        HEADER_MARGIN,
        Layer::Playbar,
        SCALE_HEADING,
        HIGHLIGHT,
        "SONGS",
    );

    for (column, title) in COLUMN_TITLES.iter().enumerate() {
        list.text(
            SIDEBAR_W + HEADER_MARGIN + column as f32 * COLUMN_PITCH,
            FONT_PX + HEADER_MARGIN,
            Layer::Playbar,
            SCALE_BODY,
            TEXT,
            *title,
        );
    }

    // Empty catalog / stale selection: headers only.
    let Some(album) = catalog.album(session.selected_album) else {
        return;
    };

    for index in 0..album.songs.len() {
        let y = index as f32 * (SONG_ROW_H + SONG_ROW_GAP);
        song_row(list, album, index, y);
    }
}

fn song_row(list: &mut ElementList, album: &Album, index: usize, y: f32) {
    let Some(song) = album.songs.get(index) else {
        return;
    };

    list.button(
        Area::new(SIDEBAR_W, SONG_MARGIN + 40.0 + y, WIDTH, SONG_MARGIN * 2.0),
        SONG_ROW,
        Layer::Middle,
        Action::PlaySong(index),
    );

    let cells = [
        song.name.as_str(),
        album.artist.as_str(),
        album.genre.as_str(),
        UNKNOWN_RELEASE,
    ];
    for (column, cell) in cells.into_iter().enumerate() {
        list.text(
            SIDEBAR_W + SONG_MARGIN + column as f32 * COLUMN_PITCH,
            SONG_MARGIN + 50.0 + y,
            Layer::Playbar,
            SCALE_BODY,
            WHITE_TEXT,
            cell,
        );
    }
}
