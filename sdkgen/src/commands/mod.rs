mod check;
mod generate;
mod info;
mod restore;

use std::path::Path;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;
use restore::RestoreCommand;
use sdkgen_idl::IdlFile;

use crate::config::{self, Config};

/// Extension trait for exiting on config and IDL errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sdkgen_idl::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the config, then the IDL it points at.
fn load(config: Option<&Path>) -> (Config, IdlFile) {
    let config = Config::load(config).unwrap_or_exit();
    let idl = IdlFile::open(config.idl_path()).unwrap_or_exit();
    (config, idl)
}

#[derive(Parser)]
#[command(name = "sdkgen")]
#[command(version)]
#[command(about = "Generate Rust and TypeScript client SDKs from a program IDL")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => GenerateCommand::default().run(),
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::Info(cmd)) => cmd.run(),
            Some(Commands::Restore(cmd)) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every configured client (the default)
    Generate(GenerateCommand),

    /// Validate and lint the IDL without generating code
    Check(CheckCommand),

    /// Show program and project information
    Info(InfoCommand),

    /// Restore protected files left backed up by an interrupted run
    Restore(RestoreCommand),
}
