//! CLI command definitions and handlers.

mod derive;

use std::ffi::OsString;

use bip85::Deriver;
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{Args, CommandFactory, FromArgMatches, Parser};

pub use derive::DeriveCommand;

/// bip85 - Derive deterministic child secrets from one master key.
#[derive(Parser)]
#[command(name = "bip85")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    master: MasterArgs,

    /// BIP39 passphrase for the master mnemonic.
    #[arg(short, long, env = "BIP85_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,

    #[arg(skip)]
    passphrase_source: Option<ValueSource>,

    #[command(subcommand)]
    command: DeriveCommand,
}

/// Master key source, from a flag or the environment.
///
/// A flag given on the command line takes precedence over a value picked up
/// from the environment for the other source.
#[derive(Args)]
#[group(required = true, multiple = true)]
struct MasterArgs {
    /// Master extended private key (xprv...).
    #[arg(short = 'x', long, env = "BIP85_XPRV", hide_env_values = true)]
    xprv: Option<String>,

    /// Master BIP39 mnemonic phrase.
    #[arg(short, long, env = "BIP85_MNEMONIC", hide_env_values = true)]
    mnemonic: Option<String>,

    #[arg(skip)]
    xprv_source: Option<ValueSource>,

    #[arg(skip)]
    mnemonic_source: Option<ValueSource>,
}

/// The master key input selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MasterSource<'a> {
    Xprv(&'a str),
    Mnemonic(&'a str),
}

fn on_command_line(source: Option<ValueSource>) -> bool {
    source == Some(ValueSource::CommandLine)
}

impl MasterArgs {
    fn select(&self) -> Result<MasterSource<'_>, String> {
        match (self.xprv.as_deref(), self.mnemonic.as_deref()) {
            (Some(xprv), Some(mnemonic)) => {
                match (on_command_line(self.xprv_source), on_command_line(self.mnemonic_source)) {
                    (true, false) => Ok(MasterSource::Xprv(xprv)),
                    (false, true) => Ok(MasterSource::Mnemonic(mnemonic)),
                    (true, true) => Err("--xprv and --mnemonic cannot be used together".into()),
                    (false, false) => Err(
                        "BIP85_XPRV and BIP85_MNEMONIC are both set; pass --xprv or --mnemonic to choose"
                            .into(),
                    ),
                }
            }
            (Some(xprv), None) => Ok(MasterSource::Xprv(xprv)),
            (None, Some(mnemonic)) => Ok(MasterSource::Mnemonic(mnemonic)),
            (None, None) => Err("a master --xprv or --mnemonic is required".into()),
        }
    }
}

impl Cli {
    /// Parse the process arguments, exiting with a usage error on failure.
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args`, recording whether each master input came from the
    /// command line or the environment.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command();
        let matches = command.try_get_matches_from_mut(args)?;
        let mut cli = Self::from_arg_matches(&matches).map_err(|e| e.format(&mut command))?;

        cli.master.xprv_source = matches.value_source("xprv");
        cli.master.mnemonic_source = matches.value_source("mnemonic");
        cli.passphrase_source = matches.value_source("passphrase");

        cli.validate()
            .map_err(|message| command.error(ErrorKind::ArgumentConflict, message))?;
        Ok(cli)
    }

    /// Reject conflicting master inputs and a passphrase that cannot apply.
    fn validate(&self) -> Result<(), String> {
        let source = self.master.select()?;
        let has_passphrase = self.passphrase.as_deref().is_some_and(|p| !p.is_empty());

        if has_passphrase && matches!(source, MasterSource::Xprv(_)) {
            if on_command_line(self.passphrase_source) {
                return Err("--passphrase only applies to a --mnemonic master".into());
            }
            tracing::warn!("BIP85_PASSPHRASE is set but ignored for an xprv master key");
        }
        Ok(())
    }

    /// Execute the selected command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let deriver = match self.master.select()? {
            MasterSource::Xprv(xprv) => Deriver::from_xprv(xprv)?,
            MasterSource::Mnemonic(mnemonic) => {
                Deriver::from_mnemonic(mnemonic, self.passphrase.as_deref().unwrap_or(""))?
            }
        };
        self.command.execute(&deriver)
    }
}
