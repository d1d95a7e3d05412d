//! View constants (palette, layout/sizing).

use crate::gui::element::Colour;

pub(crate) const WIDTH: f32 = 1920.0 / 2.0;
pub(crate) const HEIGHT: f32 = 1080.0 / 2.0;

/// Glyph height of the shared font at scale 1.0.
pub(crate) const FONT_PX: f32 = 20.0;

// palette
pub(crate) const PRIMARY: Colour = Colour::argb(255, 26, 26, 26);
pub(crate) const SECONDARY: Colour = Colour::argb(255, 33, 33, 33);
pub(crate) const TERTIARY: Colour = Colour::argb(255, 85, 85, 85);
pub(crate) const HIGHLIGHT: Colour = Colour::argb(255, 106, 121, 255);
pub(crate) const TEXT: Colour = Colour::argb(255, 132, 132, 132);
pub(crate) const WHITE_TEXT: Colour = Colour::argb(255, 255, 255, 255);
pub(crate) const IMAGE_TINT: Colour = Colour::argb(255, 255, 255, 255);
pub(crate) const OVERLAY: Colour = Colour::argb(50, 255, 255, 255);
pub(crate) const SONG_ROW: Colour = Colour::argb(100, 26, 26, 26);
pub(crate) const PROGRESS: Colour = Colour::argb(255, 106 - 25, 121 - 25, 255 - 25);

// album sidebar
pub(crate) const SIDEBAR_W: f32 = 200.0;
pub(crate) const SIDEBAR_MARGIN: f32 = 15.0;
pub(crate) const ALBUM_BOX_H: f32 = 50.0;
pub(crate) const SCROLL_BUTTON_H: f32 = 25.0;
/// Down button sits this far above the bottom edge while the playbar shows.
pub(crate) const SCROLL_DOWN_OFFSET_PLAYBAR: f32 = 100.0;
pub(crate) const ALBUM_TITLE_CHARS: usize = 20;
pub(crate) const ALBUM_TITLE_FONT: f32 = 15.0;
pub(crate) const VIEWABLE_ALBUMS: usize = 7;
pub(crate) const VIEWABLE_ALBUMS_PLAYBAR: usize = 6;

// song panel
pub(crate) const SONG_MARGIN: f32 = 20.0;
pub(crate) const HEADER_MARGIN: f32 = 10.0;
pub(crate) const COLUMN_PITCH: f32 = 200.0;
pub(crate) const SONG_ROW_H: f32 = 40.0;
pub(crate) const SONG_ROW_GAP: f32 = 5.0;
pub(crate) const COLUMN_TITLES: [&str; 4] = ["NAME", "ARTIST", "GENRE", "RELEASE"];
/// Release dates aren't in the catalog.
pub(crate) const UNKNOWN_RELEASE: &str = "Unknown";

// playbar
pub(crate) const PLAYBAR_H: f32 = 75.0;
pub(crate) const PROGRESS_H: f32 = 5.0;
pub(crate) const PLAYBAR_TEXT_MARGIN: f32 = 10.0;
pub(crate) const CONTROL_SPACING: f32 = 50.0;
pub(crate) const CONTROL_SIZE: f32 = 25.0;

// text scales
pub(crate) const SCALE_HEADING: f32 = 1.0;
pub(crate) const SCALE_BODY: f32 = 0.7;
