//! Image manifest lookup and reference resolution.
//!
//! Content images are authored as plain files next to the markdown. An
//! optional build-time manifest maps them to optimized public URLs:
//!
//! ```text
//! { "portfolio": { "studio": { "cover": { "800": { "avif": "/img/…" } } } } }
//! ```
//!
//! The manifest may be absent entirely — callers fall back to the raw
//! colocated file. Reference resolution mirrors how the site serves paths:
//! relative references resolve against the item folder, absolute ones against
//! the public root, and bare filenames against the item folder. Remote URLs
//! are never existence-checked.

use pulldown_cmark::{Event, Parser, Tag};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extensions treated as images when scanning content folders.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg", "avif"];

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Optimized-image manifest: `kind -> slug -> image -> size -> format -> URL`.
#[derive(Debug, Default)]
pub struct ImageManifest {
    entries: Map<String, Value>,
}

impl ImageManifest {
    /// Load the manifest; a missing file yields an empty manifest.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Public URL for one size/format variant, if the manifest has it.
    pub fn url(&self, kind: &str, slug: &str, image: &str, size: &str, format: &str) -> Option<&str> {
        self.entries
            .get(kind)?
            .get(slug)?
            .get(image)?
            .get(size)?
            .get(format)?
            .as_str()
    }

    /// All optimized URLs known for one image, across sizes and formats.
    pub fn variant_urls(&self, kind: &str, slug: &str, image: &str) -> Vec<&str> {
        let Some(sizes) = self
            .entries
            .get(kind)
            .and_then(|v| v.get(slug))
            .and_then(|v| v.get(image))
            .and_then(|v| v.as_object())
        else {
            return Vec::new();
        };
        let mut urls = Vec::new();
        for formats in sizes.values() {
            if let Some(map) = formats.as_object() {
                urls.extend(map.values().filter_map(|v| v.as_str()));
            }
        }
        urls
    }
}

/// True for references that cannot be checked against the local tree.
pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("data:")
}

/// Resolve an image reference to an existing file, or `None`.
///
/// - `/path` → under the public root
/// - `./path`, `../path`, `dir/file` → relative to the item folder
/// - bare filename → directly in the item folder
pub fn resolve_reference(reference: &str, item_dir: &Path, public_root: &Path) -> Option<PathBuf> {
    if is_remote(reference) {
        return None;
    }
    let candidate = if let Some(stripped) = reference.strip_prefix('/') {
        public_root.join(stripped)
    } else {
        item_dir.join(reference)
    };
    candidate.is_file().then_some(candidate)
}

/// Extract inline image destinations (`![alt](path)`) from a markdown body.
///
/// Remote URLs are included; callers filter with [`is_remote`] as needed.
pub fn markdown_image_refs(body: &str) -> Vec<String> {
    let mut refs = Vec::new();
    for event in Parser::new(body) {
        if let Event::Start(Tag::Image { dest_url, .. }) = event {
            refs.push(dest_url.to_string());
        }
    }
    refs
}

/// True when the path's extension marks it as an image file.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
