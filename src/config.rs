//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the site root. All
//! fields have defaults; user config files are sparse and only override what
//! they set. Unknown keys are rejected to catch typos early.
//!
//! ```toml
//! content_root = "content"
//! public_root = "public"
//! i18n_root = "i18n"
//! image_manifest = "public/images/manifest.json"
//!
//! [locales]
//! default = "en"
//! supported = ["en", "sv", "fa"]
//!
//! [limits]
//! featured_max = 6
//! min_coverage = 80
//! min_translation_ratio = 50
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content tree root, relative to the site root.
    pub content_root: String,
    /// Root served as `/` — absolute image references resolve here.
    pub public_root: String,
    /// Directory of per-locale UI string files (`<locale>.json`).
    pub i18n_root: String,
    /// Optimized-image manifest path; may not exist.
    pub image_manifest: String,
    pub locales: LocalesConfig,
    pub limits: LimitsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: "content".to_string(),
            public_root: "public".to_string(),
            i18n_root: "i18n".to_string(),
            image_manifest: "public/images/manifest.json".to_string(),
            locales: LocalesConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

/// Locale set for content resolution and coverage reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalesConfig {
    /// The locale whose files carry no locale suffix (`slug.md`).
    pub default: String,
    pub supported: Vec<String>,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            default: "en".to_string(),
            supported: vec!["en".to_string(), "sv".to_string(), "fa".to_string()],
        }
    }
}

impl LocalesConfig {
    /// Supported locales other than the default — the ones needing files.
    pub fn translations(&self) -> impl Iterator<Item = &str> {
        self.supported
            .iter()
            .map(String::as_str)
            .filter(|l| *l != self.default)
    }
}

/// Product-decision knobs: caps and warning thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum items in the featured projection.
    pub featured_max: usize,
    /// Per-locale translation coverage (%) below which a warning is emitted.
    pub min_coverage: u8,
    /// Translation length (% of the default file) below which it is flagged
    /// as possibly incomplete.
    pub min_translation_ratio: u8,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            featured_max: 6,
            min_coverage: 80,
            min_translation_ratio: 50,
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locales.supported.is_empty() {
            return Err(ConfigError::Validation(
                "locales.supported must not be empty".into(),
            ));
        }
        if !self.locales.supported.contains(&self.locales.default) {
            return Err(ConfigError::Validation(format!(
                "locales.default '{}' must be listed in locales.supported",
                self.locales.default
            )));
        }
        if self.limits.featured_max == 0 {
            return Err(ConfigError::Validation(
                "limits.featured_max must be at least 1".into(),
            ));
        }
        if self.limits.min_coverage > 100 {
            return Err(ConfigError::Validation(
                "limits.min_coverage must be 0-100".into(),
            ));
        }
        if self.limits.min_translation_ratio > 100 {
            return Err(ConfigError::Validation(
                "limits.min_translation_ratio must be 0-100".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Uses defaults when no file exists; rejects unknown keys and validates
/// the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# Trifold Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Content tree root: content/<kind>/<slug>/<slug>[.<locale>].md
content_root = "content"

# Root served as / — absolute image references resolve here.
public_root = "public"

# Directory of per-locale UI string files (<locale>.json).
i18n_root = "i18n"

# Optimized-image manifest produced by the image pipeline. May not exist;
# lookups fall back to the raw colocated files.
image_manifest = "public/images/manifest.json"

# ---------------------------------------------------------------------------
# Locales
# ---------------------------------------------------------------------------
[locales]
# The default locale's files carry no suffix (slug.md); translations are
# slug.<locale>.md. Resolution falls back to the default file when a
# translation is missing.
default = "en"
supported = ["en", "sv", "fa"]

# ---------------------------------------------------------------------------
# Limits
# ---------------------------------------------------------------------------
[limits]
# Cap on the featured-items projection.
featured_max = 6

# Translation coverage (%) per locale below which check-i18n warns.
min_coverage = 80

# A translation shorter than this share (%) of the default file is flagged
# as possibly incomplete.
min_translation_ratio = 50
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.content_root, "content");
        assert_eq!(config.locales.default, "en");
        assert_eq!(config.locales.supported, vec!["en", "sv", "fa"]);
        assert_eq!(config.limits.featured_max, 6);
        assert_eq!(config.limits.min_coverage, 80);
        assert_eq!(config.limits.min_translation_ratio, 50);
    }

    #[test]
    fn translations_excludes_default() {
        let locales = LocalesConfig::default();
        let list: Vec<&str> = locales.translations().collect();
        assert_eq!(list, vec!["sv", "fa"]);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[limits]
featured_max = 4
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.limits.featured_max, 4);
        // Defaults preserved
        assert_eq!(config.limits.min_coverage, 80);
        assert_eq!(config.locales.default, "en");
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.content_root, "content");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
content_root = "site-content"

[locales]
default = "sv"
supported = ["sv", "en"]
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.content_root, "site-content");
        assert_eq!(config.locales.default, "sv");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let toml = r#"
[limits]
featured_maximum = 6
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[limitz]\nfeatured_max = 6\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_default_not_in_supported() {
        let mut config = SiteConfig::default();
        config.locales.default = "de".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_empty_supported() {
        let mut config = SiteConfig::default();
        config.locales.supported.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_zero_featured_max() {
        let mut config = SiteConfig::default();
        config.limits.featured_max = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_coverage_over_100() {
        let mut config = SiteConfig::default();
        config.limits.min_coverage = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[limits]\nfeatured_max = 0\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.limits.featured_max, 6);
        assert_eq!(config.limits.min_coverage, 80);
        assert_eq!(config.locales.supported, vec!["en", "sv", "fa"]);
        assert_eq!(config.image_manifest, "public/images/manifest.json");
    }
}
