//! `toc` command implementation.

use clap::Args;
use sitenav_config::CliSettings;

use super::site::{LookupArg, SiteArgs};
use crate::error::CliError;
use crate::output;

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// How the current page's directory is located.
    #[arg(long, value_enum)]
    lookup: Option<LookupArg>,
}

impl TocArgs {
    /// Execute the toc command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded, no current page is
    /// known, or the tree cannot be built.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let settings = CliSettings {
            lookup: self.lookup.map(Into::into),
            ..CliSettings::default()
        };
        let site = self.site.load(settings)?;
        let toc = site.nav.toc(site.require_current()?)?;
        output::emit(&toc)?;
        Ok(())
    }
}
