//! gui/update/playback.rs
//! Playback controller: the Stopped / Playing / Paused state machine.
//!
//! Design goals:
//! - GUI never touches rodio/symphonia directly, only `SampleService`.
//! - Every call takes `now` so timing is driven by the frame, not a clock read.
//! - Nothing here fails the frame: a bad song just ends up `Stopped`.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::core::error::AudioError;
use crate::core::playback::SampleService;
use crate::core::types::Catalog;
use crate::gui::state::{NowPlaying, Session, Transport};

pub(crate) struct PlaybackController<S> {
    service: S,
}

impl<S: SampleService> PlaybackController<S> {
    pub(crate) fn new(service: S) -> Self {
        Self { service }
    }

    #[cfg(test)]
    pub(crate) fn service(&self) -> &S {
        &self.service
    }

    /// Start song `index` of the *selected* album.
    ///
    /// Failure (bad index, unreadable file, engine down) stops playback and
    /// hides the playbar.
    pub(crate) fn play_song(
        &mut self,
        session: &mut Session,
        catalog: &Catalog,
        index: usize,
        now: Instant,
    ) {
        match self.try_play(session, catalog, index) {
            Ok(np) => {
                info!(album = %np.album_title, song = %np.song_name, secs = np.duration_secs, "playing");
                session.now_playing = Some(np);
                session.transport = Transport::Playing { anchor: now };
            }
            Err(e) => self.not_found(session, &e),
        }
    }

    fn try_play(
        &mut self,
        session: &Session,
        catalog: &Catalog,
        index: usize,
    ) -> Result<NowPlaying, AudioError> {
        // Nothing playing is fine here.
        self.service.stop();

        let album_index = session.selected_album;
        let (album, song) = catalog
            .song(album_index, index)
            .ok_or(AudioError::SongNotFound {
                album: album_index,
                index,
            })?;

        let duration = self.service.probe(&song.location)?;
        self.service.play(&song.location)?;

        Ok(NowPlaying {
            song_index: index,
            album_title: album.title.to_uppercase(),
            song_name: song.name.to_uppercase(),
            cover: album.cover.clone(),
            duration_secs: duration.as_secs(),
        })
    }

    /// Song after the current one. Past the end is "not found".
    pub(crate) fn forward(&mut self, session: &mut Session, catalog: &Catalog, now: Instant) {
        match session.currently_playing() {
            Some(i) => self.play_song(session, catalog, i + 1, now),
            None => debug!("forward with nothing loaded"),
        }
    }

    /// Song before the current one. Before the first is "not found".
    pub(crate) fn backward(&mut self, session: &mut Session, catalog: &Catalog, now: Instant) {
        match session.currently_playing() {
            Some(0) => {
                let e = AudioError::SongNotFound {
                    album: session.selected_album,
                    index: 0,
                };
                self.not_found(session, &e);
            }
            Some(i) => self.play_song(session, catalog, i - 1, now),
            None => debug!("backward with nothing loaded"),
        }
    }

    /// Playing <-> Paused. Elapsed time excludes the paused stretch.
    pub(crate) fn toggle_pause(&mut self, session: &mut Session, now: Instant) {
        match session.transport {
            Transport::Playing { anchor } => {
                self.service.pause();
                session.transport = Transport::Paused {
                    elapsed: now.saturating_duration_since(anchor),
                };
            }
            Transport::Paused { elapsed } => {
                self.service.resume();
                session.transport = Transport::Playing {
                    anchor: now.checked_sub(elapsed).unwrap_or(now),
                };
            }
            Transport::Stopped => {}
        }
    }

    /// Safe to call with nothing playing.
    pub(crate) fn stop(&mut self, session: &mut Session) {
        self.service.stop();
        session.transport = Transport::Stopped;
    }

    pub(crate) fn toggle_repeat(&mut self, session: &mut Session) {
        session.repeat = !session.repeat;
        info!("Repeat = {}", session.repeat);
    }

    /// Per-frame: pick up engine failures, then repeat/advance at song end.
    pub(crate) fn tick(&mut self, session: &mut Session, catalog: &Catalog, now: Instant) {
        if let Some(e) = self.service.take_failure() {
            if session.playbar_visible() {
                self.not_found(session, &e);
            }
            return;
        }

        if !matches!(session.transport, Transport::Playing { .. }) {
            return;
        }
        let Some(np) = &session.now_playing else {
            return;
        };

        if session.elapsed_secs(now) >= np.duration_secs {
            let current = np.song_index;
            if session.repeat {
                self.play_song(session, catalog, current, now);
            } else {
                self.play_song(session, catalog, current + 1, now);
            }
        }
    }

    fn not_found(&mut self, session: &mut Session, cause: &AudioError) {
        warn!("SONG WAS NOT FOUND ({cause})");
        self.stop(session);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use super::*;
    use crate::core::types::{Album, Song};

    /// Records calls; durations come from a table, unknown paths fail probe.
    #[derive(Debug, Default)]
    pub(crate) struct FakeService {
        pub durations: HashMap<PathBuf, Duration>,
        pub calls: Vec<String>,
        pub pending_failure: Option<String>,
    }

    impl FakeService {
        pub(crate) fn with_songs(catalog: &Catalog, secs: u64) -> Self {
            let durations = catalog
                .albums
                .iter()
                .flat_map(|a| a.songs.iter())
                .map(|s| (s.location.clone(), Duration::from_secs(secs)))
                .collect();
            Self {
                durations,
                ..Self::default()
            }
        }
    }

    impl SampleService for FakeService {
        fn probe(&self, path: &Path) -> Result<Duration, AudioError> {
            self.durations
                .get(path)
                .copied()
                .ok_or_else(|| AudioError::Open {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
        }

        fn play(&mut self, path: &Path) -> Result<(), AudioError> {
            self.calls.push(format!("play {}", path.display()));
            Ok(())
        }

        fn pause(&mut self) {
            self.calls.push("pause".into());
        }

        fn resume(&mut self) {
            self.calls.push("resume".into());
        }

        fn stop(&mut self) {
            self.calls.push("stop".into());
        }

        fn take_failure(&mut self) -> Option<AudioError> {
            self.pending_failure.take().map(AudioError::Engine)
        }
    }

    pub(crate) fn greatest_hits() -> Catalog {
        let song = |name: &str, file: &str| Song {
            name: name.into(),
            location: PathBuf::from(format!("Music/{file}.wav")),
        };
        Catalog {
            albums: vec![Album {
                title: "Greatest Hits".into(),
                artist: "Neil Diamond".into(),
                genre: "Rock".into(),
                cover: PathBuf::from("Covers/NeilDiamond.jpg"),
                songs: vec![
                    song("Cracklin' Rosie", "Cracklin_Rosie"),
                    song("Soolaimon", "Soolaimon"),
                    song("Sweet Caroline", "Sweet_Caroline"),
                ],
            }],
        }
    }

    fn setup(secs: u64) -> (PlaybackController<FakeService>, Session, Catalog) {
        let catalog = greatest_hits();
        let controller = PlaybackController::new(FakeService::with_songs(&catalog, secs));
        (controller, Session::default(), catalog)
    }

    fn playing_index(session: &Session) -> Option<usize> {
        session.currently_playing()
    }

    #[test]
    fn play_song_records_metadata_and_shows_playbar() {
        let (mut c, mut s, catalog) = setup(180);
        let t0 = Instant::now();

        c.play_song(&mut s, &catalog, 1, t0);

        assert_eq!(s.transport, Transport::Playing { anchor: t0 });
        assert!(s.playbar_visible());
        let np = s.now_playing.as_ref().unwrap();
        assert_eq!(np.album_title, "GREATEST HITS");
        assert_eq!(np.song_name, "SOOLAIMON");
        assert_eq!(np.duration_secs, 180);
        assert_eq!(np.cover, PathBuf::from("Covers/NeilDiamond.jpg"));
        assert_eq!(c.service().calls, vec!["stop", "play Music/Soolaimon.wav"]);
    }

    #[test]
    fn unknown_song_stops_and_hides_playbar() {
        let (mut c, mut s, catalog) = setup(180);
        let t0 = Instant::now();

        c.play_song(&mut s, &catalog, 1, t0);
        c.play_song(&mut s, &catalog, 7, t0);

        assert_eq!(s.transport, Transport::Stopped);
        assert!(!s.playbar_visible());
    }

    #[test]
    fn probe_failure_stops() {
        let (mut c, mut s, catalog) = setup(180);
        c.service.durations.clear();

        c.play_song(&mut s, &catalog, 0, Instant::now());

        assert_eq!(s.transport, Transport::Stopped);
        assert!(!c.service().calls.iter().any(|call| call.starts_with("play")));
    }

    #[test]
    fn engine_failure_is_handled_on_next_tick() {
        let (mut c, mut s, catalog) = setup(180);
        let t0 = Instant::now();
        c.play_song(&mut s, &catalog, 0, t0);

        c.service.pending_failure = Some("decode failed".into());
        c.tick(&mut s, &catalog, t0 + Duration::from_millis(16));

        assert_eq!(s.transport, Transport::Stopped);
    }

    #[test]
    fn advances_exactly_at_song_end() {
        let (mut c, mut s, catalog) = setup(10);
        let t0 = Instant::now();
        c.play_song(&mut s, &catalog, 0, t0);

        c.tick(&mut s, &catalog, t0 + Duration::from_millis(9_999));
        assert_eq!(playing_index(&s), Some(0));

        let end = t0 + Duration::from_secs(10);
        c.tick(&mut s, &catalog, end);
        assert_eq!(playing_index(&s), Some(1));
        assert_eq!(s.transport, Transport::Playing { anchor: end });
    }

    #[test]
    fn repeat_replays_same_song() {
        let (mut c, mut s, catalog) = setup(10);
        let t0 = Instant::now();
        c.play_song(&mut s, &catalog, 2, t0);
        c.toggle_repeat(&mut s);

        let end = t0 + Duration::from_secs(10);
        c.tick(&mut s, &catalog, end);

        assert_eq!(playing_index(&s), Some(2));
        assert_eq!(s.transport, Transport::Playing { anchor: end });
    }

    #[test]
    fn advancing_past_last_song_stops() {
        let (mut c, mut s, catalog) = setup(10);
        let t0 = Instant::now();
        c.play_song(&mut s, &catalog, 2, t0);

        c.tick(&mut s, &catalog, t0 + Duration::from_secs(10));

        assert_eq!(s.transport, Transport::Stopped);
    }

    #[test]
    fn pause_resume_excludes_paused_time() {
        let (mut c, mut s, catalog) = setup(300);
        let t0 = Instant::now();
        c.play_song(&mut s, &catalog, 0, t0);

        let paused_at = t0 + Duration::from_secs(30);
        c.toggle_pause(&mut s, paused_at);
        assert!(s.is_paused());
        assert_eq!(s.elapsed(paused_at + Duration::from_secs(100)), Duration::from_secs(30));

        // Paused songs never advance, however long the pause.
        c.tick(&mut s, &catalog, paused_at + Duration::from_secs(1_000));
        assert_eq!(playing_index(&s), Some(0));

        let resumed_at = paused_at + Duration::from_secs(120);
        c.toggle_pause(&mut s, resumed_at);
        assert!(!s.is_paused());
        assert_eq!(
            s.elapsed(resumed_at + Duration::from_secs(5)),
            Duration::from_secs(35)
        );
        assert_eq!(
            c.service().calls,
            vec!["stop", "play Music/Cracklin_Rosie.wav", "pause", "resume"]
        );
    }

    #[test]
    fn forward_and_backward_move_by_one() {
        let (mut c, mut s, catalog) = setup(60);
        let t0 = Instant::now();
        c.play_song(&mut s, &catalog, 1, t0);

        c.forward(&mut s, &catalog, t0);
        assert_eq!(playing_index(&s), Some(2));

        c.backward(&mut s, &catalog, t0);
        c.backward(&mut s, &catalog, t0);
        assert_eq!(playing_index(&s), Some(0));

        // Nothing before the first song.
        c.backward(&mut s, &catalog, t0);
        assert_eq!(s.transport, Transport::Stopped);
    }

    #[test]
    fn stop_is_safe_when_idle() {
        let (mut c, mut s, _) = setup(60);
        c.stop(&mut s);
        c.stop(&mut s);
        assert_eq!(s.transport, Transport::Stopped);
    }
}
