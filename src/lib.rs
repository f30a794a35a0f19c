//! # Trifold
//!
//! Content engine for a trilingual (English/Swedish/Persian) portfolio and
//! blog site. Your filesystem is the data source: slug directories become
//! content items, front-matter carries the metadata, and locale-suffixed
//! files carry the translations.
//!
//! # Architecture: Resolve → Aggregate → Validate
//!
//! ```text
//! content/<kind>/<slug>/<slug>[.<locale>].md
//!        │
//!        ├─ resolve    one (kind, slug, locale) → one file, with fallback
//!        ├─ repo       all slugs of a kind → date-sorted collection
//!        └─ validate   batch authoring checks, run out-of-band
//! ```
//!
//! Serving and validation are deliberately separate: the resolver and
//! aggregator never reject suspicious metadata — they load what exists and
//! skip what cannot be parsed — while the validators re-read the raw
//! front-matter and report every problem in one pass.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | splits a file into a YAML metadata mapping and markdown body |
//! | [`types`] | content model: [`types::ContentItem`], typed metadata plus open `extra` map |
//! | [`resolve`] | locale fallback: localized file strictly preferred over the default |
//! | [`repo`] | enumeration and aggregation, newest first, skip-and-record on failure |
//! | [`images`] | optimized-image manifest and reference/path resolution |
//! | [`validate`] | content-structure, image-reference, and i18n-coverage batch checks |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting — information-first display of items and reports |
//!
//! # Design Decisions
//!
//! ## Filesystem as Database
//!
//! The directory tree is the only source of truth. There is no cache, no
//! index file, and no incremental bookkeeping: every call re-reads the tree,
//! so results are always consistent with what an editor last saved. Content
//! is authored externally and read-only here, which is what makes the
//! re-read-everything model safe and idempotent.
//!
//! ## Explicit Fallback Chain
//!
//! Locale resolution is a fixed ordered candidate list — `slug.<locale>.md`,
//! then `slug.md` — evaluated to the first existing file. No region variants,
//! no fuzzy matching. Items served from the fallback carry a
//! `needs_translation` flag so the presentation layer can badge them.
//!
//! ## Typed Metadata with an Open Side Map
//!
//! Recognized front-matter keys are plain struct fields; unknown keys are
//! preserved in an `extra` map instead of being spread into the record. A
//! wrong-shaped recognized key (e.g. `tags` as a bare string) is never
//! coerced — loading leaves it in `extra` and the structure validator flags
//! it.
//!
//! ## Warnings Never Block
//!
//! Validation distinguishes structurally wrong data (errors, non-zero exit)
//! from suspicious data (warnings). Translation coverage is warning-only by
//! policy: an incomplete translation should never hold back a deploy, and a
//! CI environment only changes the wording of the message.

pub mod config;
pub mod frontmatter;
pub mod images;
pub mod output;
pub mod repo;
pub mod resolve;
pub mod types;
pub mod validate;
