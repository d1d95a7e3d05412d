//! core/playback/probe.rs
//! Duration probing (Symphonia). Reads headers only, never decodes audio.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

use crate::core::error::AudioError;

/// Length of the default track in `path`.
pub fn probe_duration(path: &Path) -> Result<Duration, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;

    let track = probed.format.default_track().ok_or(AudioError::NoTrack)?;
    let params = &track.codec_params;

    duration_from_params(params.time_base, params.n_frames).ok_or(AudioError::UnknownLength)
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<Duration> {
    let tb = time_base?;
    let frames = n_frames?;

    // Time is { seconds: u64, frac: f64 } in symphonia 0.5.x.
    let t = tb.calc_time(frames);
    Some(Duration::from_secs(t.seconds) + Duration::from_secs_f64(t.frac))
}
