use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RestoreCommand {
    /// Path to sdkgen.toml (defaults to ./sdkgen.toml, then built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List the backups that would be restored without touching them
    #[arg(long)]
    pub dry_run: bool,
}

impl RestoreCommand {
    pub fn run(&self) -> Result<()> {
        // No IDL needed: recovery only touches the protected files
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();

        let report = ops::restore(&config, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
