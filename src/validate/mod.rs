//! Batch content validation.
//!
//! Three independent entry points, one per authoring concern:
//!
//! | Module | Checks |
//! |--------|--------|
//! | [`content`] | required fields, status enum, year/date values, tags shape, duplicate slugs |
//! | [`images`] | front-matter and inline image references resolve; orphaned files |
//! | [`i18n`] | locale JSON validity, translation coverage, translation length |
//!
//! Findings are collected into a [`Report`] and surfaced in bulk at the end
//! of a run — never fail-fast, so one run shows every problem at once.
//! Warnings flag suspicious data and never block; errors drive a non-zero
//! exit from the corresponding CLI command.

pub mod content;
pub mod i18n;
pub mod images;

/// Whether a finding blocks (error) or merely nags (warning).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One problem found in the content tree.
#[derive(Debug, Clone)]
pub struct Finding {
    pub severity: Severity,
    /// What the finding is about: `kind/slug`, a file path, or a locale.
    pub subject: String,
    pub message: String,
}

/// Accumulated findings of one validation run.
#[derive(Debug, Default)]
pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn error(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Error,
            subject: subject.into(),
            message: message.into(),
        });
    }

    pub fn warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            subject: subject.into(),
            message: message.into(),
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Errors mean the run should exit non-zero; warnings never do.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn merge(&mut self, other: Report) {
        self.findings.extend(other.findings);
    }
}
