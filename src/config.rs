use anyhow::{Context, Result, bail};
use std::path::Path;

/// Session cookie file next to the workspace manifest.
const SESSION_FILE: &str = "session.txt";

#[derive(Debug)]
pub struct Config {
    pub session: String,
}

impl Config {
    /// Priority: CLI flag > env var (handled by clap) > session file.
    pub fn load(cli_session: Option<String>, workspace: &Path) -> Result<Self> {
        if let Some(s) = cli_session {
            return Ok(Config { session: s });
        }

        let path = workspace.join(SESSION_FILE);
        if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Cannot read '{}'", path.display()))?;
            let session = raw.trim().to_string();
            if !session.is_empty() {
                return Ok(Config { session });
            }
        }

        bail!(
            "No session cookie found.\n\
             Provide it via:\n  \
             • --session <COOKIE>\n  \
             • AOC_SESSION environment variable\n  \
             • session.txt next to the workspace Cargo.toml"
        )
    }
}
