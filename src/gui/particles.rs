//! gui/particles.rs
//! Cosmetic particle bursts. Touches nothing outside itself.

use iced::Point;
use rand::{rng, seq::IndexedRandom};

use super::element::Colour;

/// Fade lost per frame. 255 / 5 = 51 frames of life.
pub(crate) const FADE_STEP: u8 = 5;
const START_FADE: u8 = 255;
const COLOUR: Colour = Colour::argb(255, 255, 255, 255);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Particle {
    pub position: Point,
    pub velocity: (f32, f32),
    pub size: f32,
    pub colour: Colour,
    /// Doubles as alpha.
    pub fade: u8,
}

impl Particle {
    pub(crate) fn draw_colour(&self) -> Colour {
        self.colour.with_alpha(self.fade)
    }
}

#[derive(Debug, Default)]
pub(crate) struct Particles {
    live: Vec<Particle>,
}

impl Particles {
    /// Spawn `amount` particles at `origin`, each axis moving at a random
    /// non-zero speed in `-speed..=speed`.
    pub(crate) fn burst(&mut self, origin: Point, amount: usize, size: f32, speed: i32) {
        let speed = speed.abs().max(1);
        let speeds: Vec<i32> = (-speed..=speed).filter(|v| *v != 0).collect();
        let mut rng = rng();

        for _ in 0..amount {
            let dx = speeds.choose(&mut rng).copied().unwrap_or(1);
            let dy = speeds.choose(&mut rng).copied().unwrap_or(1);
            self.live.push(Particle {
                position: origin,
                velocity: (dx as f32, dy as f32),
                size,
                colour: COLOUR,
                fade: START_FADE,
            });
        }
    }

    /// One frame: move, fade, drop the ones that faded out.
    pub(crate) fn update(&mut self) {
        for p in &mut self.live {
            p.position.x += p.velocity.0;
            p.position.y += p.velocity.1;
            p.fade = p.fade.saturating_sub(FADE_STEP);
        }
        self.live.retain(|p| p.fade > 0);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.live.iter()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
