//! GUI state + messages.
//! Pure data definitions used by update + view.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use iced::Point;

use super::view::constants::{VIEWABLE_ALBUMS, VIEWABLE_ALBUMS_PLAYBAR};

/// Playback transport. The playbar shows whenever this isn't `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transport {
    Stopped,
    /// Elapsed time = now - anchor.
    Playing { anchor: Instant },
    /// Elapsed time frozen while paused.
    Paused { elapsed: Duration },
}

/// What the playbar shows. Captured when the song starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NowPlaying {
    pub song_index: usize,
    /// Upper-cased for display.
    pub album_title: String,
    /// Upper-cased for display.
    pub song_name: String,
    pub cover: PathBuf,
    pub duration_secs: u64,
}

/// All mutable player/UI state, in one place.
///
/// The layout builder only reads it; the playback controller and click
/// dispatch write it.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub selected_album: usize,
    /// First album shown in the sidebar.
    pub page_offset: usize,
    pub repeat: bool,
    pub transport: Transport,
    /// Last song started. Kept after a stop.
    pub now_playing: Option<NowPlaying>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            selected_album: 0,
            page_offset: 0,
            repeat: false,
            transport: Transport::Stopped,
            now_playing: None,
        }
    }
}

impl Session {
    pub(crate) fn playbar_visible(&self) -> bool {
        !matches!(self.transport, Transport::Stopped)
    }

    /// Album slots that fit in the sidebar (the playbar eats one).
    pub(crate) fn viewable_albums(&self) -> usize {
        if self.playbar_visible() {
            VIEWABLE_ALBUMS_PLAYBAR
        } else {
            VIEWABLE_ALBUMS
        }
    }

    pub(crate) fn is_paused(&self) -> bool {
        matches!(self.transport, Transport::Paused { .. })
    }

    pub(crate) fn currently_playing(&self) -> Option<usize> {
        self.now_playing.as_ref().map(|n| n.song_index)
    }

    pub(crate) fn elapsed(&self, now: Instant) -> Duration {
        match self.transport {
            Transport::Stopped => Duration::ZERO,
            Transport::Playing { anchor } => now.saturating_duration_since(anchor),
            Transport::Paused { elapsed } => elapsed,
        }
    }

    /// Whole seconds played so far.
    pub(crate) fn elapsed_secs(&self, now: Instant) -> u64 {
        self.elapsed(now).as_secs()
    }

    /// Width of the filled part of a progress track `total` wide.
    pub(crate) fn progress_width(&self, now: Instant, total: f32) -> f32 {
        let Some(np) = &self.now_playing else {
            return 0.0;
        };
        if !self.playbar_visible() {
            return 0.0;
        }
        if np.duration_secs == 0 {
            return total;
        }
        let secs = self.elapsed_secs(now).min(np.duration_secs);
        secs as f32 * total / np.duration_secs as f32
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// One display refresh.
    Frame(Instant),
    CursorMoved(Point),
    /// Primary button released.
    PointerReleased,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(anchor: Instant, duration_secs: u64) -> Session {
        Session {
            transport: Transport::Playing { anchor },
            now_playing: Some(NowPlaying {
                song_index: 0,
                album_title: "A".into(),
                song_name: "S".into(),
                cover: PathBuf::new(),
                duration_secs,
            }),
            ..Session::default()
        }
    }

    #[test]
    fn viewable_albums_follow_playbar() {
        let mut s = Session::default();
        assert_eq!(s.viewable_albums(), 7);

        let t0 = Instant::now();
        s.transport = Transport::Playing { anchor: t0 };
        assert_eq!(s.viewable_albums(), 6);

        s.transport = Transport::Paused {
            elapsed: Duration::from_secs(1),
        };
        assert_eq!(s.viewable_albums(), 6);
    }

    #[test]
    fn progress_is_proportional_in_whole_seconds() {
        let t0 = Instant::now();
        let s = playing(t0, 100);

        assert_eq!(s.progress_width(t0, 960.0), 0.0);
        assert_eq!(s.progress_width(t0 + Duration::from_millis(25_900), 960.0), 240.0);
        assert_eq!(s.progress_width(t0 + Duration::from_secs(100), 960.0), 960.0);
        // Never past the end of the track.
        assert_eq!(s.progress_width(t0 + Duration::from_secs(500), 960.0), 960.0);
    }

    #[test]
    fn zero_length_song_shows_full_bar() {
        let t0 = Instant::now();
        assert_eq!(playing(t0, 0).progress_width(t0, 960.0), 960.0);
        assert_eq!(Session::default().progress_width(t0, 960.0), 0.0);
    }
}
