mod start;

use anyhow::Result;

use crate::cli::Cli;

pub async fn run(cli: Cli) -> Result<()> {
    start::run(cli).await
}
