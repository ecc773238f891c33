use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Path to sdkgen.toml (defaults to ./sdkgen.toml, then built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let (config, idl_file) = super::load(self.config.as_deref());

        let report = ops::info(&config, idl_file.into_idl())?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
