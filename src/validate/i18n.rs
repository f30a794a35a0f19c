//! Translation-coverage and locale-data validation.
//!
//! Two concerns share this entry point:
//!
//! - the UI string files (`i18nRoot/<locale>.json`) must exist and be valid
//!   JSON — these are errors, they break the rendered site;
//! - content translation coverage per locale, which is warning-only by
//!   policy: translation completeness never blocks a deploy. A detected CI
//!   environment only changes the wording of the coverage message, never
//!   the severity or exit code.

use crate::config::{LimitsConfig, LocalesConfig};
use crate::repo;
use crate::types::ContentKind;
use crate::validate::Report;
use std::fs;
use std::path::Path;

/// Per-locale translation tally across the whole content tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    pub locale: String,
    pub translated: usize,
    pub total: usize,
}

impl Coverage {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.translated as f64 * 100.0 / self.total as f64
        }
    }
}

/// Run locale-file and coverage checks.
pub fn check(
    content_root: &Path,
    i18n_root: &Path,
    locales: &LocalesConfig,
    limits: &LimitsConfig,
) -> Report {
    check_inner(
        content_root,
        i18n_root,
        locales,
        limits,
        std::env::var_os("CI").is_some(),
    )
}

fn check_inner(
    content_root: &Path,
    i18n_root: &Path,
    locales: &LocalesConfig,
    limits: &LimitsConfig,
    in_ci: bool,
) -> Report {
    let mut report = Report::default();

    check_locale_files(i18n_root, locales, &mut report);

    for coverage in measure_coverage(content_root, locales, limits, &mut report) {
        let threshold = limits.min_coverage as f64;
        if coverage.percent() < threshold {
            let suffix = if in_ci {
                "reported only, coverage never fails the build"
            } else {
                "add the missing translations before publishing"
            };
            report.warning(
                coverage.locale.clone(),
                format!(
                    "translation coverage {:.1}% ({}/{}) is below {}% — {suffix}",
                    coverage.percent(),
                    coverage.translated,
                    coverage.total,
                    limits.min_coverage
                ),
            );
        }
    }

    report
}

/// Every supported locale must have a syntactically valid JSON string file.
fn check_locale_files(i18n_root: &Path, locales: &LocalesConfig, report: &mut Report) {
    for locale in &locales.supported {
        let path = i18n_root.join(format!("{locale}.json"));
        let subject = format!("{locale}.json");
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                report.error(subject, format!("cannot read {}: {err}", path.display()));
                continue;
            }
        };
        if let Err(err) = serde_json::from_str::<serde_json::Value>(&raw) {
            report.error(subject, format!("malformed JSON: {err}"));
        }
    }
}

/// Tally `slug.<locale>.md` presence per locale, flagging short translations.
fn measure_coverage(
    content_root: &Path,
    locales: &LocalesConfig,
    limits: &LimitsConfig,
    report: &mut Report,
) -> Vec<Coverage> {
    let mut coverages: Vec<Coverage> = locales
        .translations()
        .map(|locale| Coverage {
            locale: locale.to_string(),
            translated: 0,
            total: 0,
        })
        .collect();

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
            let default_len = file_len(&dir.join(format!("{slug}.md")));

            for coverage in &mut coverages {
                coverage.total += 1;
                let translation = dir.join(format!("{slug}.{}.md", coverage.locale));
                let Some(translation_len) = file_len(&translation) else {
                    continue;
                };
                coverage.translated += 1;

                // Length heuristic: a translation far shorter than the
                // default file is probably unfinished.
                if let Some(default_len) = default_len
                    && default_len > 0
                    && translation_len * 100 < default_len * limits.min_translation_ratio as u64
                {
                    report.warning(
                        format!("{kind}/{slug}"),
                        format!(
                            "{} translation is {}% of the default file's length — possibly incomplete",
                            coverage.locale,
                            translation_len * 100 / default_len
                        ),
                    );
                }
            }
        }
    }
    coverages
}

fn file_len(path: &Path) -> Option<u64> {
    fs::metadata(path).ok().filter(|m| m.is_file()).map(|m| m.len())
}
