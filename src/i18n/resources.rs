// SPDX-License-Identifier: MPL-2.0
//! Read-only access to bundled message and catalog files.
//!
//! Paths are relative and `/`-separated, e.g. `messages/Welcome_EN.txt` or
//! `translations/es.ftl`.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

pub trait ResourceStore {
    /// Returns the file contents, or `None` if the resource is missing or unreadable.
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>>;
}

/// Resources compiled into the binary from the `assets/` directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl ResourceStore for EmbeddedResources {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        Asset::get(path).map(|file| file.data)
    }
}

/// Resources read from a directory on disk with the same layout as `assets/`.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        // Only plain relative paths; `..` or absolute paths would escape the root.
        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl ResourceStore for DirectoryResources {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        let full_path = self.resolve(path)?;
        match fs::read(&full_path) {
            Ok(bytes) => Some(Cow::Owned(bytes)),
            Err(err) => {
                log::debug!("Resource {} unavailable: {}", full_path.display(), err);
                None
            }
        }
    }
}

/// In-memory resources, handy for embedding applications and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(path)
    }
}

impl ResourceStore for MemoryResources {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        self.files.get(path).map(|bytes| Cow::Owned(bytes.clone()))
    }
}

impl<T: ResourceStore + ?Sized> ResourceStore for Box<T> {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        (**self).read(path)
    }
}
