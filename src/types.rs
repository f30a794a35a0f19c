//! Shared content model types.
//!
//! A content item is one slug directory on disk, resolved to a single markdown
//! file for a requested locale. Front-matter is carried two ways: recognized
//! keys land in the typed fields of [`ContentMeta`], everything else is
//! preserved verbatim in [`ContentMeta::extra`]. This keeps the model explicit
//! about what the engine understands without dropping author-defined keys.
//!
//! Construction is lenient: a recognized key with the wrong shape (say `tags`
//! as a bare string) is left out of the typed field and kept in `extra`. The
//! validators re-read the raw front-matter and are the ones that flag it —
//! loading never coerces and never fails on shape alone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;

/// The two content collections the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Portfolio,
    Blog,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Portfolio, ContentKind::Blog];

    /// Directory name under the content root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ContentKind::Portfolio => "portfolio",
            ContentKind::Blog => "blog",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One resolved content item.
#[derive(Debug, Clone, Serialize)]
pub struct ContentItem {
    pub kind: ContentKind,
    /// Directory-name identifier, unique across all kinds.
    pub slug: String,
    pub meta: ContentMeta,
    /// Raw markdown body of the resolved file variant.
    pub body: String,
    /// Resolved source file, retained for diagnostics.
    pub file_path: PathBuf,
    /// True when the requested locale had no dedicated file and the
    /// default-locale file was served instead.
    pub needs_translation: bool,
}

/// Typed front-matter: recognized keys as fields, the rest in `extra`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Always a list when present — bare strings are never coerced.
    pub tags: Option<Vec<String>>,
    pub date: Option<String>,
    pub publish_date: Option<String>,
    pub featured: bool,
    pub status: Option<String>,
    pub client: Option<String>,
    pub agency: Option<String>,
    pub author: Option<String>,
    /// Kept raw; the structure validator parses and range-checks it.
    pub year: Option<String>,
    pub background_image: Option<String>,
    pub logo: Option<String>,
    pub images: Vec<String>,
    /// Unrecognized keys, preserved verbatim.
    pub extra: Map<String, Value>,
}

impl ContentMeta {
    /// Build typed metadata from a raw front-matter mapping.
    pub fn from_map(map: Map<String, Value>) -> Self {
        let mut meta = ContentMeta::default();
        for (key, value) in map {
            match key.as_str() {
                "title" => assign_string(&mut meta.title, &mut meta.extra, key, value),
                "description" => assign_string(&mut meta.description, &mut meta.extra, key, value),
                "category" => assign_string(&mut meta.category, &mut meta.extra, key, value),
                "date" => assign_string(&mut meta.date, &mut meta.extra, key, value),
                "publishDate" | "publish_date" => {
                    assign_string(&mut meta.publish_date, &mut meta.extra, key, value)
                }
                "status" => assign_string(&mut meta.status, &mut meta.extra, key, value),
                "client" => assign_string(&mut meta.client, &mut meta.extra, key, value),
                "agency" => assign_string(&mut meta.agency, &mut meta.extra, key, value),
                "author" => assign_string(&mut meta.author, &mut meta.extra, key, value),
                "background_image" => {
                    assign_string(&mut meta.background_image, &mut meta.extra, key, value)
                }
                "logo" => assign_string(&mut meta.logo, &mut meta.extra, key, value),
                "featured" => match value {
                    Value::Bool(b) => meta.featured = b,
                    other => {
                        meta.extra.insert(key, other);
                    }
                },
                // Year appears both quoted and bare in authored files
                "year" => match value {
                    Value::String(s) => meta.year = Some(s),
                    Value::Number(n) => meta.year = Some(n.to_string()),
                    other => {
                        meta.extra.insert(key, other);
                    }
                },
                "tags" => match string_array(&value) {
                    Some(list) => meta.tags = Some(list),
                    None => {
                        meta.extra.insert(key, value);
                    }
                },
                "images" => match string_array(&value) {
                    Some(list) => meta.images = list,
                    None => {
                        meta.extra.insert(key, value);
                    }
                },
                _ => {
                    meta.extra.insert(key, value);
                }
            }
        }
        meta
    }

    /// The date used for sort ordering: `date`, then `publish_date`.
    ///
    /// Returns `None` when neither field parses — callers sort those items
    /// last, as if dated before everything else.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date).or_else(|| {
            self.publish_date.as_deref().and_then(parse_date)
        })
    }
}

fn assign_string(
    slot: &mut Option<String>,
    extra: &mut Map<String, Value>,
    key: String,
    value: Value,
) {
    match value {
        Value::String(s) => *slot = Some(s),
        other => {
            extra.insert(key, other);
        }
    }
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// Parse a front-matter date: `YYYY-MM-DD`, with RFC 3339 tolerated.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.date_naive())
    })
}
