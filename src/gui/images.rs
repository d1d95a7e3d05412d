//! gui/images.rs
//! Fail-soft image loading.
//!
//! - every path is checked once (header read for the natural size) and cached
//! - a path that won't load resolves to the fallback image
//! - if the fallback won't load either, the element just isn't drawn

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use tracing::warn;

use super::element::{Element, ElementList};

#[derive(Debug, Clone)]
pub(crate) struct LoadedImage {
    pub handle: Handle,
    /// Pixel size as stored on disk.
    pub natural: (f32, f32),
}

#[derive(Debug)]
pub(crate) struct ImageStore {
    fallback: PathBuf,
    cache: HashMap<PathBuf, Option<LoadedImage>>,
}

impl ImageStore {
    pub(crate) fn new(fallback: PathBuf) -> Self {
        Self {
            fallback,
            cache: HashMap::new(),
        }
    }

    /// Make sure every image in this frame has been tried.
    pub(crate) fn warm(&mut self, elements: &ElementList) {
        if !self.cache.contains_key(&self.fallback) {
            let fallback = self.fallback.clone();
            self.load(&fallback);
        }
        for e in elements.iter() {
            if let Element::Image { path, .. } = e {
                if !self.cache.contains_key(path) {
                    self.load(path);
                }
            }
        }
    }

    fn load(&mut self, path: &Path) {
        let loaded = match image::image_dimensions(path) {
            Ok((w, h)) => Some(LoadedImage {
                handle: Handle::from_path(path),
                natural: (w as f32, h as f32),
            }),
            Err(e) => {
                warn!(path = %path.display(), "{}: {e}", self.unavailable(path));
                None
            }
        };
        self.cache.insert(path.to_path_buf(), loaded);
    }

    fn unavailable(&self, path: &Path) -> &'static str {
        if path == self.fallback {
            "fallback image unavailable, failed images will not be drawn"
        } else {
            "image unavailable, using fallback"
        }
    }

    /// The image to draw for `path`. None means draw nothing.
    pub(crate) fn resolve(&self, path: &Path) -> Option<&LoadedImage> {
        self.cache
            .get(path)
            .and_then(Option::as_ref)
            .or_else(|| self.cache.get(&self.fallback).and_then(Option::as_ref))
    }
}
