use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trifold::types::ContentKind;
use trifold::{config, images, output, repo, validate};

#[derive(Parser)]
#[command(name = "trifold")]
#[command(about = "Content engine for a trilingual portfolio and blog")]
#[command(long_about = "\
Content engine for a trilingual portfolio and blog

Your filesystem is the data source. Slug directories become content items,
front-matter carries the metadata, and locale-suffixed files carry the
translations.

Content structure:

  content/
  ├── portfolio/
  │   └── studio-rebuild/
  │       ├── studio-rebuild.md        # default locale (en)
  │       ├── studio-rebuild.sv.md     # Swedish translation
  │       ├── studio-rebuild.fa.md     # Persian translation
  │       └── cover.jpg                # colocated assets
  └── blog/
      └── hello-again/
          └── hello-again.md

Resolution prefers the localized file and falls back to the default; items
served from the fallback are marked as needing translation.

Run 'trifold gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site root directory (where config.toml lives)
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum KindArg {
    Portfolio,
    Blog,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Portfolio => ContentKind::Portfolio,
            KindArg::Blog => ContentKind::Blog,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List all items of a kind for a locale, newest first
    List {
        kind: KindArg,
        /// Locale to resolve (defaults to the configured default locale)
        #[arg(long)]
        locale: Option<String>,
        /// Only featured items, capped at the configured maximum
        #[arg(long)]
        featured: bool,
        /// Only items in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Show a single item; exits non-zero when the slug is not found
    Show {
        kind: KindArg,
        slug: String,
        #[arg(long)]
        locale: Option<String>,
    },
    /// Run all validations: content structure, images, i18n
    Check,
    /// Validate required fields, value shapes, and slug uniqueness
    CheckContent,
    /// Validate image references and find orphaned files
    CheckImages,
    /// Validate locale data files and translation coverage
    CheckI18n,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load_config(&cli.source)?;
    let content_root = cli.source.join(&config.content_root);
    let public_root = cli.source.join(&config.public_root);
    let i18n_root = cli.source.join(&config.i18n_root);

    match cli.command {
        Command::List {
            kind,
            locale,
            featured,
            category,
        } => {
            let kind = ContentKind::from(kind);
            let locale = locale.unwrap_or_else(|| config.locales.default.clone());
            let mut collection =
                repo::load_all(&content_root, kind, &locale, &config.locales.default)?;
            if let Some(category) = &category {
                collection.items = repo::in_category(&collection.items, category)
                    .into_iter()
                    .cloned()
                    .collect();
            }
            if featured {
                collection.items = repo::featured(&collection.items, config.limits.featured_max)
                    .into_iter()
                    .cloned()
                    .collect();
            }
            let heading = format!("{} ({locale})", heading_for(kind));
            output::print_collection(&heading, &collection);
        }
        Command::Show { kind, slug, locale } => {
            let kind = ContentKind::from(kind);
            let locale = locale.unwrap_or_else(|| config.locales.default.clone());
            let manifest = images::ImageManifest::load(&cli.source.join(&config.image_manifest))?;
            match repo::load_one(&content_root, kind, &slug, &locale, &config.locales.default)? {
                Some(item) => output::print_item(&item, &manifest),
                None => {
                    eprintln!("{kind}/{slug}: not found for locale {locale}");
                    std::process::exit(1);
                }
            }
        }
        Command::Check => {
            let content = validate::content::check(&content_root);
            output::print_report("Content structure", &content);
            println!();
            let image_refs = validate::images::check(&content_root, &public_root);
            output::print_report("Image references", &image_refs);
            println!();
            let coverage =
                validate::i18n::check(&content_root, &i18n_root, &config.locales, &config.limits);
            output::print_report("Translation coverage", &coverage);
            if content.has_errors() || image_refs.has_errors() || coverage.has_errors() {
                std::process::exit(1);
            }
        }
        Command::CheckContent => {
            let report = validate::content::check(&content_root);
            output::print_report("Content structure", &report);
            if report.has_errors() {
                std::process::exit(1);
            }
        }
        Command::CheckImages => {
            let report = validate::images::check(&content_root, &public_root);
            output::print_report("Image references", &report);
            if report.has_errors() {
                std::process::exit(1);
            }
        }
        Command::CheckI18n => {
            let report =
                validate::i18n::check(&content_root, &i18n_root, &config.locales, &config.limits);
            output::print_report("Translation coverage", &report);
            if report.has_errors() {
                std::process::exit(1);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn heading_for(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Portfolio => "Portfolio",
        ContentKind::Blog => "Blog",
    }
}
