//! sitenav CLI - site navigation builder.
//!
//! Provides commands for:
//! - `sidebar`: Render the full navigation sidebar
//! - `toc`: Render the table of contents for a page's directory
//! - `tree`: Print the page tree

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{SidebarArgs, TocArgs, TreeArgs};
use output::Output;

/// sitenav - Site navigation builder.
#[derive(Parser)]
#[command(name = "sitenav", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the navigation sidebar as HTML.
    Sidebar(SidebarArgs),
    /// Render the table of contents for the current page's directory.
    Toc(TocArgs),
    /// Print the page tree.
    Tree(TreeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sidebar(args) => args.execute(),
        Commands::Toc(args) => args.execute(),
        Commands::Tree(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
