//! Bottom playback bar.
//!
//! Only built while something is playing or paused. Emits only elements and
//! actions (no rodio, no decoding).

use std::time::Instant;

use crate::core::settings::Settings;
use crate::gui::element::{Action, Area, Control, ElementList, Layer};
use crate::gui::state::Session;

use super::constants::{
    CONTROL_SIZE, CONTROL_SPACING, FONT_PX, HEIGHT, HIGHLIGHT, IMAGE_TINT, PLAYBAR_H,
    PLAYBAR_TEXT_MARGIN, PRIMARY, PROGRESS, PROGRESS_H, SCALE_BODY, SCALE_HEADING, TERTIARY, TEXT,
    WIDTH,
};

pub(crate) fn build_playbar(
    list: &mut ElementList,
    session: &Session,
    settings: &Settings,
    now: Instant,
) {
    let Some(np) = &session.now_playing else {
        return;
    };

    let top = HEIGHT - PLAYBAR_H;

    list.rect(Area::new(0.0, top, WIDTH, PLAYBAR_H), PRIMARY, Layer::Playbar);
    list.rect(
        Area::new(0.0, top - PROGRESS_H, WIDTH, PROGRESS_H),
        TERTIARY,
        Layer::Playbar,
    );
    list.rect(
        Area::new(0.0, top - PROGRESS_H, session.progress_width(now, WIDTH), PROGRESS_H),
        PROGRESS,
        Layer::Playbar,
    );

    list.image(
        Area::new(0.0, top, PLAYBAR_H, PLAYBAR_H),
        IMAGE_TINT,
        Layer::Playbar,
        &np.cover,
        None,
    );

    let text_x = PLAYBAR_H + PLAYBAR_TEXT_MARGIN;
    list.text(
        text_x,
        top + PLAYBAR_TEXT_MARGIN,
        Layer::Playbar,
        SCALE_HEADING,
        HIGHLIGHT,
        &np.album_title,
    );
    list.text(
        text_x,
        top + PLAYBAR_TEXT_MARGIN + FONT_PX,
        Layer::Playbar,
        SCALE_BODY,
        TEXT,
        &np.song_name,
    );

    // Buttons run right-to-left from just right of centre.
    let count = Control::ALL.len() as f32;
    let total_spacing = CONTROL_SPACING * count / 2.0;
    let y = HEIGHT - (PLAYBAR_H / 2.0).floor() - (CONTROL_SIZE / 2.0).floor();

    for (index, control) in Control::ALL.into_iter().enumerate() {
        let x = (WIDTH / 2.0 + total_spacing)
            - index as f32 * CONTROL_SPACING
            - (CONTROL_SIZE / 2.0).floor();
        list.image(
            Area::new(x, y, CONTROL_SIZE, CONTROL_SIZE),
            IMAGE_TINT,
            Layer::Buttons,
            settings.icon(icon_name(control, session.is_paused())),
            Some(Action::Control(control)),
        );
    }
}

fn icon_name(control: Control, paused: bool) -> &'static str {
    match control {
        Control::Repeat => "repeat",
        Control::Forward => "fast_forward",
        Control::PauseResume if paused => "play",
        Control::PauseResume => "pause",
        Control::Backward => "fast_backward",
        Control::Stop => "stop",
    }
}
