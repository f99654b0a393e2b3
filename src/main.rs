#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod load;
mod ops;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, calculate, demo},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Calculate(args) => calculate(&args)?,
        Command::Demo(args) => demo(&args)?,
    }

    info!("done!");
    Ok(())
}
