//! Image-reference validation.
//!
//! Walks every content folder and cross-checks two directions:
//!
//! - every image referenced from front-matter (`background_image`, `logo`,
//!   `images`) or inline markdown must resolve to an existing file — an
//!   unresolved reference is an error naming both the path and the
//!   referencing file;
//! - every image file sitting in a content folder must be referenced from
//!   somewhere — an unreferenced file is an "orphaned" warning.
//!
//! References are matched by canonical path, so `./cover.jpg`, `cover.jpg`
//! and a reference from a sibling item all count for the same file.

use crate::images::{self, is_image_file};
use crate::repo;
use crate::types::ContentKind;
use crate::validate::Report;
use crate::frontmatter;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Run the image-reference rules across the whole content tree.
pub fn check(content_root: &Path, public_root: &Path) -> Report {
    let mut report = Report::default();
    let mut referenced: BTreeSet<PathBuf> = BTreeSet::new();
    let mut colocated: Vec<(String, PathBuf)> = Vec::new();

    for kind in ContentKind::ALL {
        let slugs = match repo::list_slugs(content_root, kind) {
            Ok(slugs) => slugs,
            Err(err) => {
                report.error(kind.dir_name(), format!("cannot list content: {err}"));
                continue;
            }
        };
        for slug in slugs {
            let dir = content_root.join(kind.dir_name()).join(&slug);
            for entry in WalkDir::new(&dir).into_iter().filter_map(|e| e.ok()) {
                let path = entry.path();
                if !path.is_file() {
                    continue;
                }
                if is_image_file(path) {
                    colocated.push((format!("{kind}/{slug}"), path.to_path_buf()));
                } else if path.extension().is_some_and(|e| e == "md") {
                    let subject = subject_for(path, kind, &slug);
                    check_file(path, &dir, public_root, &subject, &mut referenced, &mut report);
                }
            }
        }
    }

    for (item, image) in &colocated {
        let canonical = fs::canonicalize(image).unwrap_or_else(|_| image.clone());
        if !referenced.contains(&canonical) {
            let name = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| image.display().to_string());
            report.warning(item.clone(), format!("orphaned image '{name}' is never referenced"));
        }
    }

    report
}

fn subject_for(path: &Path, kind: ContentKind, slug: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{kind}/{slug}/{name}")
}

/// Check every reference in one markdown file, recording resolved targets.
fn check_file(
    path: &Path,
    item_dir: &Path,
    public_root: &Path,
    subject: &str,
    referenced: &mut BTreeSet<PathBuf>,
    report: &mut Report,
) {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            report.error(subject, format!("cannot read: {err}"));
            return;
        }
    };
    let (meta, body) = match frontmatter::split(&raw) {
        Ok(parts) => parts,
        Err(err) => {
            report.error(subject, format!("front-matter: {err}"));
            return;
        }
    };

    let mut refs = front_matter_refs(&meta);
    refs.extend(images::markdown_image_refs(body));

    for reference in refs {
        if images::is_remote(&reference) {
            continue;
        }
        match images::resolve_reference(&reference, item_dir, public_root) {
            Some(resolved) => {
                let canonical = fs::canonicalize(&resolved).unwrap_or(resolved);
                referenced.insert(canonical);
            }
            None => report.error(subject, format!("missing image '{reference}'")),
        }
    }
}

/// Image references held in recognized front-matter fields.
fn front_matter_refs(meta: &Map<String, Value>) -> Vec<String> {
    let mut refs = Vec::new();
    for key in ["background_image", "logo"] {
        if let Some(value) = meta.get(key)
            && let Some(s) = value.as_str()
        {
            refs.push(s.to_string());
        }
    }
    if let Some(Value::Array(list)) = meta.get("images") {
        refs.extend(list.iter().filter_map(|v| v.as_str().map(str::to_string)));
    }
    refs
}
