//! Content repository: enumeration and locale-filtered aggregation.
//!
//! The directory tree is the only source of truth — there is no cache and no
//! incremental index. Every call re-reads the filesystem, which keeps repeated
//! aggregation calls idempotent over an unchanged tree.
//!
//! Aggregation never aborts on a bad item: slugs whose resolution fails (no
//! file at all, or malformed front-matter) are skipped and recorded on the
//! returned [`Collection`] so the CLI can report them as context lines.

use crate::resolve::{self, ResolveError};
use crate::types::{ContentItem, ContentKind};
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

/// The aggregated items of one kind for one locale, plus skip diagnostics.
#[derive(Debug, Default)]
pub struct Collection {
    /// Sorted descending by effective date; undated items last.
    pub items: Vec<ContentItem>,
    pub skipped: Vec<Skipped>,
}

/// A slug directory that produced no item, with the reason.
#[derive(Debug)]
pub struct Skipped {
    pub slug: String,
    pub reason: String,
}

/// Enumerate slug directories under `contentRoot/<kind>`, sorted by name.
///
/// A missing kind directory is an empty collection, not an error. Hidden
/// entries and plain files are ignored — only directories can be items.
pub fn list_slugs(content_root: &Path, kind: ContentKind) -> io::Result<Vec<String>> {
    let dir = content_root.join(kind.dir_name());
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut slugs: Vec<String> = fs::read_dir(&dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| !name.starts_with('.'))
        .collect();
    slugs.sort();
    Ok(slugs)
}

/// Load every item of a kind for a locale.
///
/// One resolver call per slug; failures degrade to `skipped` entries. The
/// result is ordered by descending effective date, ties broken by slug so the
/// ordering is total and stable across runs.
pub fn load_all(
    content_root: &Path,
    kind: ContentKind,
    locale: &str,
    default_locale: &str,
) -> io::Result<Collection> {
    let mut collection = Collection::default();
    for slug in list_slugs(content_root, kind)? {
        match resolve::resolve(content_root, kind, &slug, locale, default_locale) {
            Ok(Some(item)) => collection.items.push(item),
            Ok(None) => collection.skipped.push(Skipped {
                slug,
                reason: "no content file for any locale".to_string(),
            }),
            Err(err) => collection.skipped.push(Skipped {
                slug,
                reason: err.to_string(),
            }),
        }
    }
    sort_by_effective_date(&mut collection.items);
    Ok(collection)
}

/// Resolve a single slug; `Ok(None)` carries 404 semantics for the caller.
pub fn load_one(
    content_root: &Path,
    kind: ContentKind,
    slug: &str,
    locale: &str,
    default_locale: &str,
) -> Result<Option<ContentItem>, ResolveError> {
    resolve::resolve(content_root, kind, slug, locale, default_locale)
}

/// Newest first; items without a parseable date sort last.
fn sort_by_effective_date(items: &mut [ContentItem]) {
    items.sort_by(|a, b| match (a.meta.effective_date(), b.meta.effective_date()) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    });
}

/// The featured subset, capped at `max` items (product decision, default 6).
pub fn featured(items: &[ContentItem], max: usize) -> Vec<&ContentItem> {
    items.iter().filter(|i| i.meta.featured).take(max).collect()
}

/// Items whose `category` matches exactly.
pub fn in_category<'a>(items: &'a [ContentItem], category: &str) -> Vec<&'a ContentItem> {
    items
        .iter()
        .filter(|i| i.meta.category.as_deref() == Some(category))
        .collect()
}
