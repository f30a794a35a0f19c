//! CLI output formatting.
//!
//! Information-first display: every entity leads with its semantic identity —
//! positional index plus title — with filesystem paths as indented `Source:`
//! context lines. Validation reports list every finding, errors before
//! warnings, and close with a one-line summary.
//!
//! Each surface has a `format_*` function returning `Vec<String>` (pure, no
//! I/O) and a `print_*` wrapper that writes to stdout.

use crate::images::ImageManifest;
use crate::repo::Collection;
use crate::types::ContentItem;
use crate::validate::Report;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Collections and items
// ============================================================================

/// Format an aggregated collection: one entity block per item, then skips.
pub fn format_collection(heading: &str, collection: &Collection) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(heading.to_string());

    for (i, item) in collection.items.iter().enumerate() {
        let title = item.meta.title.as_deref().unwrap_or(&item.slug);
        let marker = if item.needs_translation {
            " (needs translation)"
        } else {
            ""
        };
        lines.push(format!("{} {}{}", format_index(i + 1), title, marker));
        lines.push(format!("    Source: {}", item.file_path.display()));
        if let Some(date) = item.meta.effective_date() {
            lines.push(format!("    Date: {date}"));
        }
    }

    if !collection.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skipped in &collection.skipped {
            lines.push(format!("    {}: {}", skipped.slug, skipped.reason));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} items, {} skipped",
        collection.items.len(),
        collection.skipped.len()
    ));
    lines
}

pub fn print_collection(heading: &str, collection: &Collection) {
    for line in format_collection(heading, collection) {
        println!("{}", line);
    }
}

/// Format a single resolved item: metadata block, blank line, raw body.
///
/// Images declared in front-matter are listed with their optimized variants
/// when the manifest knows them; otherwise just the authored reference.
pub fn format_item(item: &ContentItem, manifest: &ImageManifest) -> Vec<String> {
    let mut lines = Vec::new();
    let title = item.meta.title.as_deref().unwrap_or(&item.slug);
    lines.push(title.to_string());
    lines.push(format!("    Source: {}", item.file_path.display()));
    if let Some(status) = &item.meta.status {
        lines.push(format!("    Status: {status}"));
    }
    if let Some(date) = item.meta.effective_date() {
        lines.push(format!("    Date: {date}"));
    }
    if let Some(tags) = &item.meta.tags {
        lines.push(format!("    Tags: {}", tags.join(", ")));
    }
    for image in &item.meta.images {
        lines.push(format!("    Image: {image}"));
        let stem = Path::new(image)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| image.clone());
        for url in manifest.variant_urls(item.kind.dir_name(), &item.slug, &stem) {
            lines.push(format!("        Optimized: {url}"));
        }
    }
    if item.needs_translation {
        lines.push("    Served from the default locale (translation missing)".to_string());
    }
    lines.push(String::new());
    lines.push(item.body.clone());
    lines
}

pub fn print_item(item: &ContentItem, manifest: &ImageManifest) {
    for line in format_item(item, manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Validation reports
// ============================================================================

/// Format a validation report: errors first, then warnings, then a summary.
pub fn format_report(heading: &str, report: &Report) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(heading.to_string());

    for finding in report.errors() {
        lines.push(format!("    error   {}: {}", finding.subject, finding.message));
    }
    for finding in report.warnings() {
        lines.push(format!("    warning {}: {}", finding.subject, finding.message));
    }

    if report.findings.is_empty() {
        lines.push("    No problems found".to_string());
    }
    lines.push(format!(
        "{} errors, {} warnings",
        report.error_count(),
        report.warning_count()
    ));
    lines
}

pub fn print_report(heading: &str, report: &Report) {
    for line in format_report(heading, report) {
        println!("{}", line);
    }
}
