//! Content-structure validation.
//!
//! Checks the default-locale file of every item against the per-kind required
//! field set, plus the cross-kind duplicate-slug rule. Value checks follow
//! the error taxonomy: structurally wrong data (missing field, non-array
//! tags, unparseable blog date) is an error; suspicious data (unknown status,
//! out-of-range year) is a warning.

use crate::frontmatter;
use crate::repo;
use crate::types::{self, ContentKind};
use crate::validate::Report;
use chrono::Datelike;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const VALID_STATUSES: [&str; 3] = ["published", "draft", "archived"];

/// Portfolio years earlier than this are assumed to be typos.
pub const YEAR_FLOOR: i32 = 2000;

fn required_keys(kind: ContentKind) -> &'static [&'static str] {
    match kind {
        ContentKind::Portfolio => &["title", "description", "client", "year", "tags", "status"],
        ContentKind::Blog => &["title", "description", "date", "tags", "status"],
    }
}

/// Run every structure rule across the whole content tree.
pub fn check(content_root: &Path) -> Report {
    let mut report = Report::default();
    let mut seen: BTreeMap<String, ContentKind> = BTreeMap::new();

    for kind in ContentKind::ALL {
        let slugs = match repo::list_slugs(content_root, kind) {
            Ok(slugs) => slugs,
            Err(err) => {
                report.error(kind.dir_name(), format!("cannot list content: {err}"));
                continue;
            }
        };
        for slug in slugs {
            if let Some(prev) = seen.insert(slug.clone(), kind) {
                report.error(
                    format!("{kind}/{slug}"),
                    format!("duplicate slug '{slug}' (also in {prev}/{slug})"),
                );
            }
            check_item(content_root, kind, &slug, &mut report);
        }
    }
    report
}

fn check_item(content_root: &Path, kind: ContentKind, slug: &str, report: &mut Report) {
    let subject = format!("{kind}/{slug}");
    let path = content_root
        .join(kind.dir_name())
        .join(slug)
        .join(format!("{slug}.md"));

    if !path.is_file() {
        report.error(&subject, format!("no default-locale file ({slug}.md)"));
        return;
    }
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            report.error(&subject, format!("cannot read {}: {err}", path.display()));
            return;
        }
    };
    let meta = match frontmatter::split(&raw) {
        Ok((meta, _)) => meta,
        Err(err) => {
            report.error(&subject, format!("front-matter: {err}"));
            return;
        }
    };

    for key in required_keys(kind) {
        if matches!(meta.get(*key), None | Some(Value::Null)) {
            report.error(&subject, format!("missing required field '{key}'"));
        }
    }

    if let Some(status) = meta.get("status")
        && !status.is_null()
        && !status.as_str().is_some_and(|s| VALID_STATUSES.contains(&s))
    {
        report.warning(
            &subject,
            format!("status {status} is not one of {VALID_STATUSES:?}"),
        );
    }

    if let Some(tags) = meta.get("tags")
        && !tags.is_array()
        && !tags.is_null()
    {
        report.error(&subject, "tags must be an array, not a bare value");
    }

    if kind == ContentKind::Portfolio
        && let Some(year) = meta.get("year")
        && !year.is_null()
    {
        check_year(year, &subject, report);
    }

    if kind == ContentKind::Blog
        && let Some(date) = meta.get("date")
        && !date.is_null()
    {
        let parses = date.as_str().is_some_and(|s| types::parse_date(s).is_some());
        if !parses {
            report.error(&subject, format!("date {date} is not a valid calendar date"));
        }
    }
}

fn check_year(year: &Value, subject: &str, report: &mut Report) {
    let parsed = match year {
        Value::Number(n) => n.as_i64().map(|y| y as i32),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    let current = chrono::Utc::now().year();
    match parsed {
        Some(y) if (YEAR_FLOOR..=current).contains(&y) => {}
        Some(y) => report.warning(
            subject,
            format!("year {y} is outside {YEAR_FLOOR}-{current}"),
        ),
        None => report.warning(subject, format!("year {year} is not a number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_item(root: &Path, kind: &str, slug: &str, front: &str) {
        let dir = root.join(kind).join(slug);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(format!("{slug}.md")),
            format!("---\n{front}\n---\nBody"),
        )
        .unwrap();
    }

    fn valid_portfolio_front() -> &'static str {
        "title: T\ndescription: D\nclient: C\nyear: 2022\ntags: [a]\nstatus: published"
    }

    fn valid_blog_front() -> &'static str {
        "title: T\ndescription: D\ndate: 2024-01-01\ntags: [a]\nstatus: published"
    }

    #[test]
    fn valid_tree_is_clean() {
        let tmp = TempDir::new().unwrap();
        write_item(tmp.path(), "portfolio", "studio", valid_portfolio_front());
        write_item(tmp.path(), "blog", "hello", valid_blog_front());

        let report = check(tmp.path());
        assert!(report.findings.is_empty(), "{:?}", report.findings);
    }

    #[test]
    fn missing_required_fields_are_errors() {
        let tmp = TempDir::new().unwrap();
        write_item(tmp.path(), "portfolio", "bare", "title: Only a title");

        let report = check(tmp.path());
        let messages: Vec<&str> = report.errors().map(|f| f.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("'description'")));
        assert!(messages.iter().any(|m| m.contains("'client'")));
        assert!(messages.iter().any(|m| m.contains("'year'")));
        assert!(messages.iter().any(|m| m.contains("'tags'")));
        assert!(messages.iter().any(|m| m.contains("'status'")));
    }

    #[test]
    fn null_required_field_counts_as_missing() {
        let tmp = TempDir::new().unwrap();
        write_item(
            tmp.path(),
            "blog",
            "nulled",
            "title:\ndescription: D\ndate: 2024-01-01\ntags: [a]\nstatus: published",
        );

        let report = check(tmp.path());
        assert!(report.errors().any(|f| f.message.contains("'title'")));
    }

    #[test]
    fn unknown_status_is_warning_not_error() {
        let tmp = TempDir::new().unwrap();
        write_item(
            tmp.path(),
            "blog",
            "wip",
            "title: T\ndescription: D\ndate: 2024-01-01\ntags: [a]\nstatus: someday",
        );

        let report = check(tmp.path());
        assert_eq!(report.error_count(), 0);
        assert!(report.warnings().any(|f| f.message.contains("someday")));
    }

    #[test]
    fn year_below_floor_warns() {
        let tmp = TempDir::new().unwrap();
        write_item(
            tmp.path(),
            "portfolio",
            "old",
            "title: T\ndescription: D\nclient: C\nyear: \"1999\"\ntags: [a]\nstatus: published",
        );

        let report = check(tmp.path());
        assert_eq!(report.error_count(), 0);
        assert!(report.warnings().any(|f| f.message.contains("1999")));
    }

    #[test]
    fn future_year_warns() {
        let tmp = TempDir::new().unwrap();
        write_item(
            tmp.path(),
            "portfolio",
            "future",
            "title: T\ndescription: D\nclient: C\nyear: 2031\ntags: [a]\nstatus: published",
        );

        let report = check(tmp.path());
        assert!(report.warnings().any(|f| f.message.contains("2031")));
    }

    #[test]
    fn year_check_is_portfolio_only() {
        let tmp = TempDir::new().unwrap();
        write_item(
            tmp.path(),
            "blog",
            "post",
            "title: T\ndescription: D\ndate: 2024-01-01\ntags: [a]\nstatus: published\nyear: 1999",
        );

        let report = check(tmp.path());
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn invalid_blog_date_is_error() {
        let tmp = TempDir::new().unwrap();
        write_item(
            tmp.path(),
            "blog",
            "baddate",
            "title: T\ndescription: D\ndate: not-a-date\ntags: [a]\nstatus: published",
        );

        let report = check(tmp.path());
        assert!(report.errors().any(|f| f.message.contains("not-a-date")));
    }

    #[test]
    fn bare_string_tags_is_error() {
        let tmp = TempDir::new().unwrap();
        write_item(
            tmp.path(),
            "blog",
            "stringtags",
            "title: T\ndescription: D\ndate: 2024-01-01\ntags: design\nstatus: published",
        );

        let report = check(tmp.path());
        assert!(report.errors().any(|f| f.message.contains("tags must be an array")));
    }

    #[test]
    fn duplicate_slug_across_kinds_is_error() {
        let tmp = TempDir::new().unwrap();
        write_item(tmp.path(), "portfolio", "foo", valid_portfolio_front());
        write_item(tmp.path(), "blog", "foo", valid_blog_front());

        let report = check(tmp.path());
        assert!(report.errors().any(|f| f.message.contains("duplicate slug 'foo'")));
    }

    #[test]
    fn missing_default_file_is_error() {
        let tmp = TempDir::new().unwrap();
        // Only a Swedish translation, no slug.md
        let dir = tmp.path().join("blog/svonly");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("svonly.sv.md"), "---\ntitle: T\n---\n").unwrap();

        let report = check(tmp.path());
        assert!(report.errors().any(|f| f.message.contains("svonly.md")));
    }

    #[test]
    fn malformed_front_matter_is_error() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("blog/broken");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("broken.md"), "---\ntitle: [oops\n---\n").unwrap();

        let report = check(tmp.path());
        assert!(report.has_errors());
        assert!(report.errors().any(|f| f.message.contains("front-matter")));
    }
}
