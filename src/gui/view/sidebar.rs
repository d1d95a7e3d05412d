//! Left sidebar: one page of albums plus the scroll buttons.

use crate::core::types::Catalog;
use crate::gui::element::{Action, Area, ElementList, Layer, ScrollDirection};
use crate::gui::state::Session;
use crate::gui::util::truncate;

use super::constants::{
    ALBUM_BOX_H, ALBUM_TITLE_CHARS, ALBUM_TITLE_FONT, HEIGHT, HIGHLIGHT, IMAGE_TINT, PRIMARY,
    SCALE_BODY, SCROLL_BUTTON_H, SCROLL_DOWN_OFFSET_PLAYBAR, SIDEBAR_MARGIN, SIDEBAR_W, TEXT,
};

pub(crate) fn build_album_sidebar(list: &mut ElementList, session: &Session, catalog: &Catalog) {
    list.rect(Area::new(0.0, 0.0, SIDEBAR_W, HEIGHT), PRIMARY, Layer::Middle);

    let viewable = session.viewable_albums();
    let page = session.page_offset;

    if page > 0 {
        list.button(
            Area::new(0.0, 0.0, SIDEBAR_W, SCROLL_BUTTON_H),
            HIGHLIGHT,
            Layer::Middle,
            Action::Scroll(ScrollDirection::Up),
        );
    }

    if page + viewable < catalog.len() {
        // Sit above the playbar instead of under it.
        let offset = if session.playbar_visible() {
            SCROLL_DOWN_OFFSET_PLAYBAR
        } else {
            SCROLL_BUTTON_H
        };
        list.button(
            Area::new(0.0, HEIGHT - offset, SIDEBAR_W, SCROLL_BUTTON_H),
            HIGHLIGHT,
            Layer::Middle,
            Action::Scroll(ScrollDirection::Down),
        );
    }

    let pitch = ALBUM_BOX_H + SIDEBAR_MARGIN;
    for (slot, index) in (page..page + viewable).enumerate() {
        // Short last page: skip the empty slots.
        let Some(album) = catalog.album(index) else {
            continue;
        };
        let spacing = slot as f32 * pitch;
        album_slot(list, index, &album.title, &album.cover, spacing);
    }
}

fn album_slot(
    list: &mut ElementList,
    index: usize,
    title: &str,
    cover: &std::path::Path,
    spacing: f32,
) {
    let box_w = SIDEBAR_W - SIDEBAR_MARGIN * 2.0;
    let top = SCROLL_BUTTON_H + SIDEBAR_MARGIN + spacing;

    list.button(
        Area::new(SIDEBAR_MARGIN, top, box_w, ALBUM_BOX_H),
        PRIMARY,
        Layer::Top,
        Action::SelectAlbum(index),
    );

    let label_y = SCROLL_BUTTON_H
        + (SIDEBAR_MARGIN + (ALBUM_BOX_H / 2.0).floor() - (ALBUM_TITLE_FONT / 2.0).floor())
        + spacing;
    list.text(
        SIDEBAR_MARGIN + ALBUM_BOX_H + 10.0,
        label_y,
        Layer::Top,
        SCALE_BODY,
        TEXT,
        truncate(title, ALBUM_TITLE_CHARS),
    );

    list.image(
        Area::new(SIDEBAR_MARGIN, top, ALBUM_BOX_H, ALBUM_BOX_H),
        IMAGE_TINT,
        Layer::Top,
        cover,
        None,
    );
}
