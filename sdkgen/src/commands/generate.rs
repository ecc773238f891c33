use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    config::Strategy,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args, Default)]
pub struct GenerateCommand {
    /// Path to sdkgen.toml (defaults to ./sdkgen.toml, then built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// How protected package files are kept (overrides sdkgen.toml)
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (config, idl_file) = super::load(self.config.as_deref());

        let opts = GenerateOptions {
            dry_run: self.dry_run,
            strategy: self.strategy,
        };
        let report = ops::generate(&config, idl_file.into_idl(), opts)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
