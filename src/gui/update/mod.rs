//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::app::App;
use super::state::Message;

pub(crate) mod dispatch;
pub(crate) mod playback;

pub(crate) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Frame(now) => app.frame(now),
        Message::CursorMoved(position) => app.player.pointer_moved(position),
        Message::PointerReleased => app.player.pointer_released(std::time::Instant::now()),
    }

    Task::none()
}
