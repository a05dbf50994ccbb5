//! `tree` command implementation.

use clap::Args;
use sitenav_config::CliSettings;

use super::site::SiteArgs;
use crate::error::CliError;
use crate::output::{self, Output};

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded or the tree cannot be built.
    pub(crate) fn execute(self, out: &Output) -> Result<(), CliError> {
        let site = self.site.load(CliSettings::default())?;
        let tree = site.nav.tree()?;
        output::emit(&tree.to_string())?;
        out.highlight(&format!(
            "{} pages in {} top-level directories",
            tree.page_count(),
            tree.children().len()
        ));
        if let Some(current) = &site.current {
            out.info(&format!("Current page: {current}"));
        }
        Ok(())
    }
}
