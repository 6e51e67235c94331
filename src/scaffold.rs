use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use crate::error::StartError;

/// Creates the skeleton for a new member crate.
///
/// Behind a trait so the command flow can run against a fake instead of
/// spawning `cargo`.
pub trait ScaffoldGenerator {
    fn create(&self, path: &Path) -> Result<()>;
}

/// Runs `cargo new --bin <path>` and waits for it to finish.
pub struct CargoScaffold;

impl ScaffoldGenerator for CargoScaffold {
    fn create(&self, path: &Path) -> Result<()> {
        let status = Command::new("cargo")
            .args(["new", "--bin"])
            .arg(path)
            .status()
            .context("Failed to run `cargo new`")?;

        if !status.success() {
            return Err(StartError::Scaffold(status).into());
        }
        Ok(())
    }
}
