//! gui/subscription.rs
//! One `Frame` per display refresh, plus the pointer events we care about.

use iced::{Event, Subscription, event, mouse, window};

use super::app::App;
use super::state::Message;

pub(crate) fn subscription(_app: &App) -> Subscription<Message> {
    Subscription::batch([
        window::frames().map(Message::Frame),
        event::listen_with(pointer_event),
    ])
}

fn pointer_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::CursorMoved(position)),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        _ => None,
    }
}
