mod battery;
mod calculate;
mod demo;
mod report;

use clap::{Parser, Subcommand};

pub use self::{calculate::calculate, demo::demo};
use crate::cli::{calculate::CalculateArgs, demo::DemoArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: price the energy flows from the files with the tariffs from the file.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),

    /// Price a synthetic ten-minute series with the built-in tariffs.
    #[clap(name = "demo")]
    Demo(Box<DemoArgs>),
}
