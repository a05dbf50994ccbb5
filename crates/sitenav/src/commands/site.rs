//! Arguments shared by every command: where the site payload and
//! configuration come from.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use sitenav_config::{CliSettings, Config};
use sitenav_site::{SiteContext, SiteNav, SiteOptions, SitePages};
use sitenav_tree::{DuplicatePolicy, LookupStrategy};

use crate::error::CliError;

/// Key holding the current page's URL in a full site payload.
const CURRENT_PAGE_KEY: &str = "page.url";

/// Directory lookup used by the table of contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LookupArg {
    /// Descend through every segment, skipping ones containing "html".
    HtmlHeuristic,
    /// Descend through every segment but the last.
    LastSegment,
}

impl From<LookupArg> for LookupStrategy {
    fn from(arg: LookupArg) -> Self {
        match arg {
            LookupArg::HtmlHeuristic => Self::HtmlHeuristic,
            LookupArg::LastSegment => Self::LastSegment,
        }
    }
}

#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Site payload as JSON ("-" reads stdin).
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dotted key of the page list in the payload.
    #[arg(long)]
    pages_key: Option<String>,

    /// Fail when two pages share a path instead of keeping the last one.
    #[arg(long)]
    reject_duplicates: bool,

    /// Page the navigation is rendered for (default: the payload's page.url).
    #[arg(long)]
    current: Option<String>,
}

/// Loaded site, ready to render.
pub(crate) struct LoadedSite {
    pub(crate) nav: SiteNav,
    pub(crate) current: Option<String>,
}

impl SiteArgs {
    /// Load configuration and the site payload.
    ///
    /// `settings` carries command-specific overrides; the shared flags are
    /// merged into it.
    pub(crate) fn load(&self, mut settings: CliSettings) -> Result<LoadedSite, CliError> {
        settings.pages_key.clone_from(&self.pages_key);
        if self.reject_duplicates {
            settings.duplicates = Some(DuplicatePolicy::Reject);
        }

        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Using configuration file");
        }

        let json = read_input(&self.input)?;
        let context = SiteContext::from_json(&json)?;
        let options = site_options(&config);
        let pages = SitePages::from_context(&context, &options)?;
        tracing::info!(pages = pages.entries().len(), "Loaded site pages");

        let current = self
            .current
            .clone()
            .or_else(|| context.string(CURRENT_PAGE_KEY).ok().map(str::to_owned));

        Ok(LoadedSite {
            nav: SiteNav::new(pages, options),
            current,
        })
    }
}

impl LoadedSite {
    /// The page being rendered for, required by page-relative commands.
    pub(crate) fn require_current(&self) -> Result<&str, CliError> {
        self.current.as_deref().ok_or_else(|| {
            CliError::Validation(format!(
                "No current page: pass --current or include {CURRENT_PAGE_KEY} in the input"
            ))
        })
    }
}

fn site_options(config: &Config) -> SiteOptions {
    SiteOptions {
        pages_key: config.site.pages_key.clone(),
        exclude: config.site.exclude.clone(),
        index_pages: config.site.index_pages.clone(),
        duplicates: config.tree.duplicates,
        lookup: config.tree.lookup,
        escape_html: config.render.escape_html,
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    if !path.exists() {
        return Err(CliError::Validation(format!(
            "Input file not found: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}
