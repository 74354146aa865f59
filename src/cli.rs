//! Command-line surface.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use ls_core::profile::{ProfilePatch, SUPPORTED_LANGUAGES, SUPPORTED_THEMES};

#[derive(Debug, Parser)]
#[command(name = "lifesync", version, about = "Manage the LifeSync user profile")]
pub struct Cli {
    /// Configuration file (default: <data dir>/config.toml, optional)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use this directory instead of the platform data directory
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the current profile
    Show {
        /// Print the stored JSON record instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the dashboard greeting
    Greet,
    /// Update one or more profile fields
    Set(SetArgs),
    /// Print where the profile and configuration live
    Path,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
#[command(group(
    ArgGroup::new("fields")
        .required(true)
        .multiple(true)
        .args(["name", "email", "language", "notifications", "theme"])
))]
pub struct SetArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(SUPPORTED_LANGUAGES.iter().copied()))]
    pub language: Option<String>,

    #[arg(long, action = ArgAction::Set, value_name = "true|false")]
    pub notifications: Option<bool>,

    #[arg(long, value_parser = PossibleValuesParser::new(SUPPORTED_THEMES.iter().copied()))]
    pub theme: Option<String>,
}

impl From<SetArgs> for ProfilePatch {
    fn from(args: SetArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            language: args.language,
            notifications: args.notifications,
            theme: args.theme,
        }
    }
}
