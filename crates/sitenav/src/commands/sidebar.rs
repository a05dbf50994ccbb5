//! `sidebar` command implementation.

use clap::Args;
use sitenav_config::CliSettings;

use super::site::SiteArgs;
use crate::error::CliError;
use crate::output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// HTML-escape titles and paths.
    #[arg(long)]
    escape: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded or the tree cannot be built.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let settings = CliSettings {
            escape_html: self.escape.then_some(true),
            ..CliSettings::default()
        };
        let site = self.site.load(settings)?;
        // Without a current page nothing is highlighted.
        let current = site.current.as_deref().unwrap_or_default();
        let html = site.nav.sidebar(current)?;
        output::emit(&html)?;
        Ok(())
    }
}
