pub mod cli;
pub mod manifest;

#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::{validate_path, Validate}};
#[cfg(feature = "cli")]
use clap::Parser;

/// Flags never change which fragments are merged or in what order.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "amalgamate")]
#[command(about = "Merge the csbench sources into a single translation unit")]
pub struct CliConfig {
    /// Directory holding the fragments and receiving the output
    #[arg(short = 'C', long, default_value = ".")]
    pub directory: String,

    /// Build the output and print a report without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run report as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("directory", &self.directory)
    }
}
