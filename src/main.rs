mod api;
mod boilerplate;
mod cli;
mod commands;
mod config;
mod error;
mod manifest;
mod resolver;
mod scaffold;

#[cfg(test)]
mod testutil;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    commands::run(Cli::parse()).await
}
