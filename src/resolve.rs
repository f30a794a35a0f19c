//! Locale-aware file resolution for content items.
//!
//! Each slug directory holds a default-locale file plus optional translations:
//!
//! ```text
//! content/portfolio/studio-rebuild/
//! ├── studio-rebuild.md       # default locale (en)
//! ├── studio-rebuild.sv.md    # Swedish translation
//! ├── studio-rebuild.fa.md    # Persian translation
//! └── cover.jpg               # colocated assets
//! ```
//!
//! Resolution is a fixed two-step lookup: the localized file strictly wins
//! over the default file, and there is no fuzzy or region-variant matching.
//! The fallback chain is materialized as an ordered candidate list so adding
//! a tier later means appending a pattern, not rewriting the lookup.
//!
//! "Neither file exists" is an ordinary outcome (`Ok(None)`), not an error.
//! A file that exists but fails to parse is an error carrying the path — the
//! aggregate layer logs and skips it rather than aborting the batch.

use crate::frontmatter::{self, FrontMatterError};
use crate::types::{ContentItem, ContentKind, ContentMeta};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("front-matter error in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
}

/// One file that may satisfy a `(kind, slug, locale)` lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub path: PathBuf,
    /// True when serving this file means the requested locale is untranslated.
    pub needs_translation: bool,
}

/// The ordered candidate list for a lookup; first existing file wins.
pub fn candidates(
    content_root: &Path,
    kind: ContentKind,
    slug: &str,
    locale: &str,
    default_locale: &str,
) -> Vec<Candidate> {
    let dir = content_root.join(kind.dir_name()).join(slug);
    let mut list = Vec::with_capacity(2);
    if locale != default_locale {
        list.push(Candidate {
            path: dir.join(format!("{slug}.{locale}.md")),
            needs_translation: false,
        });
    }
    list.push(Candidate {
        path: dir.join(format!("{slug}.md")),
        needs_translation: locale != default_locale,
    });
    list
}

/// Resolve one `(kind, slug, locale)` tuple to a loaded content item.
///
/// Returns `Ok(None)` when no candidate file exists. Pure read, no caching:
/// repeated calls over an unchanged tree give identical results.
pub fn resolve(
    content_root: &Path,
    kind: ContentKind,
    slug: &str,
    locale: &str,
    default_locale: &str,
) -> Result<Option<ContentItem>, ResolveError> {
    for candidate in candidates(content_root, kind, slug, locale, default_locale) {
        if !candidate.path.is_file() {
            continue;
        }
        let item = load_item(&candidate.path, kind, slug, candidate.needs_translation)?;
        return Ok(Some(item));
    }
    Ok(None)
}

/// Parse one content file into a [`ContentItem`].
fn load_item(
    path: &Path,
    kind: ContentKind,
    slug: &str,
    needs_translation: bool,
) -> Result<ContentItem, ResolveError> {
    let raw = fs::read_to_string(path).map_err(|source| ResolveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (map, body) = frontmatter::split(&raw).map_err(|source| ResolveError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ContentItem {
        kind,
        slug: slug.to_string(),
        meta: ContentMeta::from_map(map),
        body: body.to_string(),
        file_path: path.to_path_buf(),
        needs_translation,
    })
}
