//! core/error.rs
//! Error types for the core seams.
//!
//! Nothing here ever reaches the frame loop: callers degrade every variant to a
//! safe state (empty catalog, fallback image, stopped playback).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog io failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog parse failed: {0}")]
    Parse(#[from] quick_xml::de::DeError),

    #[error("catalog export failed: {0}")]
    Serialize(#[from] quick_xml::se::SeError),
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("song {index} of album {album} not found")]
    SongNotFound { album: usize, index: usize },

    #[error("open failed for {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("format probe failed: {0}")]
    Probe(#[from] symphonia::core::errors::Error),

    #[error("no supported audio track found")]
    NoTrack,

    #[error("track length unknown")]
    UnknownLength,

    #[error("playback engine unavailable")]
    EngineGone,

    #[error("playback failed: {0}")]
    Engine(String),
}
