//! gui/canvas.rs
//! Draw phase: paint this frame's element list, then the particles.

use iced::mouse;
use iced::widget::Canvas;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::{Color, Length, Pixels, Point, Rectangle, Renderer, Size, Theme};

use super::app::App;
use super::element::{Element, ElementList};
use super::images::ImageStore;
use super::particles::Particles;
use super::state::Message;
use super::util::image_scale;
use super::view::constants::FONT_PX;

/// Borrowed view of everything the canvas paints.
struct Scene<'a> {
    elements: &'a ElementList,
    particles: &'a Particles,
    images: &'a ImageStore,
}

impl canvas::Program<Message> for Scene<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for element in self.elements.draw_order() {
            draw_element(&mut frame, element, self.images);
        }

        for p in self.particles.iter() {
            frame.fill_rectangle(
                p.position,
                Size::new(p.size, p.size),
                Color::from(p.draw_colour()),
            );
        }

        vec![frame.into_geometry()]
    }
}

fn draw_element(frame: &mut Frame, element: &Element, images: &ImageStore) {
    match element {
        Element::Rect { area, colour, .. } => {
            frame.fill_rectangle(
                Point::new(area.x, area.y),
                Size::new(area.width, area.height),
                Color::from(*colour),
            );
        }
        Element::Image {
            area, tint, path, ..
        } => {
            let Some(img) = images.resolve(path) else {
                return;
            };
            let (sx, sy) = image_scale(img.natural, (area.width, area.height));
            let size = Size::new(img.natural.0 * sx, img.natural.1 * sy);

            frame.draw_image(
                Rectangle::new(Point::new(area.x, area.y), size),
                canvas::Image::new(img.handle.clone()).opacity(f32::from(tint.a) / 255.0),
            );
        }
        Element::Text {
            at,
            scale,
            colour,
            content,
            ..
        } => {
            frame.fill_text(canvas::Text {
                content: content.clone(),
                position: *at,
                color: Color::from(*colour),
                size: Pixels(FONT_PX * scale),
                ..canvas::Text::default()
            });
        }
    }
}

pub(crate) fn view(app: &App) -> iced::Element<'_, Message> {
    Canvas::new(Scene {
        elements: &app.player.elements,
        particles: &app.player.particles,
        images: &app.images,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
