//! gui/element.rs
//! Per-frame element model + hit-testing.
//!
//! The layout builder appends elements to an `ElementList` every frame; the
//! canvas draws the whole list once and then it is thrown away. Nothing here
//! survives between frames.
//!
//! Interactive elements carry an `Action` instead of a magic name. Text can't
//! carry one, so text is never hit.

use std::path::PathBuf;

use iced::Point;

use super::view::constants::OVERLAY;

/// ARGB colour, bytes like the palette is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Colour {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub(crate) const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub(crate) const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl From<Colour> for iced::Color {
    fn from(c: Colour) -> Self {
        iced::Color::from_rgba8(c.r, c.g, c.b, f32::from(c.a) / 255.0)
    }
}

/// Draw order, back to front. Equal layers keep build order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Layer {
    Back,
    Middle,
    Top,
    Playbar,
    Buttons,
}

/// Axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Area {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Area {
    pub(crate) const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges count as inside.
    pub(crate) fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScrollDirection {
    Up,
    Down,
}

/// Playbar buttons, in their fixed left-to-right index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Repeat,
    Forward,
    PauseResume,
    Backward,
    Stop,
}

impl Control {
    pub(crate) const ALL: [Control; 5] = [
        Control::Repeat,
        Control::Forward,
        Control::PauseResume,
        Control::Backward,
        Control::Stop,
    ];
}

/// What a click on an element does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    SelectAlbum(usize),
    PlaySong(usize),
    Scroll(ScrollDirection),
    Control(Control),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Element {
    Rect {
        area: Area,
        colour: Colour,
        layer: Layer,
        action: Option<Action>,
    },
    /// Drawn stretched to `area`; `tint` alpha becomes image opacity.
    Image {
        area: Area,
        tint: Colour,
        layer: Layer,
        path: PathBuf,
        action: Option<Action>,
    },
    Text {
        at: Point,
        layer: Layer,
        scale: f32,
        colour: Colour,
        content: String,
    },
}

impl Element {
    pub(crate) fn layer(&self) -> Layer {
        match self {
            Element::Rect { layer, .. }
            | Element::Image { layer, .. }
            | Element::Text { layer, .. } => *layer,
        }
    }

    pub(crate) fn action(&self) -> Option<Action> {
        match self {
            Element::Rect { action, .. } | Element::Image { action, .. } => *action,
            Element::Text { .. } => None,
        }
    }

    fn hit(&self, p: Point) -> bool {
        match self {
            Element::Rect {
                area,
                action: Some(_),
                ..
            }
            | Element::Image {
                area,
                action: Some(_),
                ..
            } => area.contains(p),
            _ => false,
        }
    }

    fn set_colour(&mut self, c: Colour) {
        match self {
            Element::Rect { colour, .. } | Element::Text { colour, .. } => *colour = c,
            Element::Image { tint, .. } => *tint = c,
        }
    }
}

/// One frame's worth of elements, in build order.
#[derive(Debug, Default)]
pub(crate) struct ElementList {
    elements: Vec<Element>,
}

impl ElementList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub(crate) fn rect(&mut self, area: Area, colour: Colour, layer: Layer) {
        self.push(Element::Rect {
            area,
            colour,
            layer,
            action: None,
        });
    }

    pub(crate) fn button(&mut self, area: Area, colour: Colour, layer: Layer, action: Action) {
        self.push(Element::Rect {
            area,
            colour,
            layer,
            action: Some(action),
        });
    }

    pub(crate) fn image(
        &mut self,
        area: Area,
        tint: Colour,
        layer: Layer,
        path: impl Into<PathBuf>,
        action: Option<Action>,
    ) {
        self.push(Element::Image {
            area,
            tint,
            layer,
            path: path.into(),
            action,
        });
    }

    pub(crate) fn text(
        &mut self,
        x: f32,
        y: f32,
        layer: Layer,
        scale: f32,
        colour: Colour,
        content: impl Into<String>,
    ) {
        self.push(Element::Text {
            at: Point::new(x, y),
            layer,
            scale,
            colour,
            content: content.into(),
        });
    }

    /// Index of the first interactive element under `p`.
    /// Build order wins on overlap, not draw order.
    pub(crate) fn find_hovered(&self, p: Point) -> Option<usize> {
        self.elements.iter().position(|e| e.hit(p))
    }

    pub(crate) fn action_at(&self, p: Point) -> Option<Action> {
        self.find_hovered(p)
            .and_then(|i| self.elements.get(i))
            .and_then(Element::action)
    }

    /// Hover feedback: swap in the overlay colour for this frame only.
    pub(crate) fn highlight(&mut self, index: usize) {
        if let Some(e) = self.elements.get_mut(index) {
            e.set_colour(OVERLAY);
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Stable sort by layer: the order the canvas paints in.
    pub(crate) fn draw_order(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.layer());
        ordered
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }
}
