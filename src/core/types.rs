//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs are "boring bags of data"
//! - No GUI code
//! - No filesystem code
//!
//! A `Catalog` is built once at startup and never mutated afterwards.

use std::path::PathBuf;

/// One playable song, owned by its album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub name: String,
    /// Path to the audio sample on disk.
    pub location: PathBuf,
}

/// One album record from the catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Cover image path (may not exist; drawing falls back).
    pub cover: PathBuf,
    pub songs: Vec<Song>,
}

/// All albums, in file order. File order drives sidebar paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub albums: Vec<Album>,
}

impl Catalog {
    pub fn album(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    /// Song `index` of album `album`, or None if either is out of range.
    pub fn song(&self, album: usize, index: usize) -> Option<(&Album, &Song)> {
        let album = self.albums.get(album)?;
        let song = album.songs.get(index)?;
        Some((album, song))
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}
