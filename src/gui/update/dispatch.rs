//! Click dispatch: route an element's `Action` to the state it changes.

use std::time::Instant;

use tracing::debug;

use crate::core::playback::SampleService;
use crate::gui::element::{Action, Control, ScrollDirection};
use crate::gui::player::Player;

pub(crate) fn click<S: SampleService>(player: &mut Player<S>, action: Action, now: Instant) {
    debug!(?action, "clicked");

    let Player {
        catalog,
        settings,
        session,
        controller,
        particles,
        cursor,
        ..
    } = player;

    match action {
        Action::SelectAlbum(index) => {
            debug!(album = index, "album selected");
            session.selected_album = index;
        }
        Action::PlaySong(index) => controller.play_song(session, catalog, index, now),

        // The buttons only show when the move is valid; still never wrap below 0.
        Action::Scroll(ScrollDirection::Up) => {
            session.page_offset = session.page_offset.saturating_sub(1);
        }
        Action::Scroll(ScrollDirection::Down) => session.page_offset += 1,

        Action::Control(Control::Repeat) => controller.toggle_repeat(session),
        Action::Control(Control::Forward) => controller.forward(session, catalog, now),
        Action::Control(Control::PauseResume) => {
            particles.burst(
                *cursor,
                settings.burst_amount,
                settings.burst_size,
                settings.burst_speed,
            );
            controller.toggle_pause(session, now);
        }
        Action::Control(Control::Backward) => controller.backward(session, catalog, now),
        Action::Control(Control::Stop) => controller.stop(session),
    }
}
