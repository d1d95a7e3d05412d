//! gui/player.rs
//! The player model: everything the frame driver needs, minus the runtime.
//!
//! Generic over the audio backend so the whole update phase (tick, layout,
//! hover, click) runs the same against the real engine and a test fake.

use std::time::Instant;

use iced::Point;
use tracing::debug;

use crate::core::playback::SampleService;
use crate::core::settings::Settings;
use crate::core::types::Catalog;

use super::element::ElementList;
use super::particles::Particles;
use super::state::Session;
use super::update::dispatch;
use super::update::playback::PlaybackController;
use super::view::build_frame;

pub(crate) struct Player<S> {
    pub catalog: Catalog,
    pub settings: Settings,
    pub session: Session,
    pub controller: PlaybackController<S>,
    pub particles: Particles,
    /// This frame's elements (hover already applied).
    pub elements: ElementList,
    pub cursor: Point,
}

impl<S: SampleService> Player<S> {
    pub(crate) fn new(catalog: Catalog, settings: Settings, service: S) -> Self {
        Self {
            catalog,
            settings,
            session: Session::default(),
            controller: PlaybackController::new(service),
            particles: Particles::default(),
            elements: ElementList::new(),
            cursor: Point::ORIGIN,
        }
    }

    /// Update phase for one frame.
    pub(crate) fn frame(&mut self, now: Instant) {
        self.controller
            .tick(&mut self.session, &self.catalog, now);
        self.particles.update();

        self.elements = build_frame(&self.session, &self.catalog, &self.settings, now);

        if let Some(i) = self.elements.find_hovered(self.cursor) {
            self.elements.highlight(i);
        }
    }

    pub(crate) fn pointer_moved(&mut self, position: Point) {
        self.cursor = position;
    }

    /// Click whatever interactive element is under the pointer, if any.
    pub(crate) fn pointer_released(&mut self, now: Instant) {
        match self.elements.action_at(self.cursor) {
            Some(action) => dispatch::click(self, action, now),
            None => debug!(x = self.cursor.x, y = self.cursor.y, "click on nothing"),
        }
    }
}
