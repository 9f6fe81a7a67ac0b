pub mod check;
pub mod render;
pub mod sort;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ipgen_common::network::{Family, Fragment, RawValue};

#[derive(Parser)]
#[command(name = "ipgen")]
#[command(about = "Normalize, validate and order IP address fragments.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide headers and notes (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the canonical form of each value
    #[command(alias = "r")]
    Render {
        family: FamilyArg,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Print the values in ascending order
    #[command(alias = "s")]
    Sort {
        family: FamilyArg,
        /// Descending order
        #[arg(short, long)]
        reverse: bool,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Validate each value and report what it normalizes to
    #[command(alias = "c")]
    Check {
        family: FamilyArg,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FamilyArg {
    V4,
    V6,
}

impl From<FamilyArg> for Family {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::V4 => Family::V4,
            FamilyArg::V6 => Family::V6,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Builds every token into a fragment, stopping at the first invalid one.
pub fn build_all(family: Family, values: &[String]) -> anyhow::Result<Vec<Fragment>> {
    values
        .iter()
        .map(|token| {
            Fragment::from_raw(family, RawValue::from_token(token))
                .with_context(|| format!("failed to build {family} fragment from '{token}'"))
        })
        .collect()
}
