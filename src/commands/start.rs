use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;

use crate::api::AocClient;
use crate::boilerplate;
use crate::cli::Cli;
use crate::config::Config;
use crate::manifest::Manifest;
use crate::resolver::{self, Puzzle};
use crate::scaffold::{CargoScaffold, ScaffoldGenerator};

const MANIFEST_FILE: &str = "Cargo.toml";
const INPUT_FILE: &str = "input.txt";

pub async fn run(args: Cli) -> Result<()> {
    let today = Local::now().date_naive();
    let puzzle = resolver::resolve(args.day, args.year, today)?;

    let workspace = Path::new(".");
    let Some(crate_dir) = prepare_crate(workspace, &puzzle, &CargoScaffold)? else {
        return Ok(());
    };

    let config = Config::load(args.session, workspace)?;
    let client = AocClient::new(config.session)?;

    eprint!("Fetching input for {} day {}…", puzzle.year, puzzle.day);
    fetch_input_file(&client, &puzzle, &crate_dir.join("src"))
        .await
        .inspect_err(|_| eprintln!())?;
    eprintln!("  {}", "done".green());

    let page = client.puzzle_url(puzzle.year, puzzle.day);
    if let Err(e) = open::that(&page) {
        eprintln!("{} could not open {page}: {e}", "warning:".yellow());
    }

    println!("{} {} is ready", "✓".green(), puzzle.crate_name().cyan());
    Ok(())
}

/// The filesystem half of the flow: existence guard, manifest
/// registration, `cargo new`, boilerplate.
///
/// Returns `None` when the member already exists; that is a benign
/// short-circuit, not an error, and nothing is mutated.
fn prepare_crate(
    workspace: &Path,
    puzzle: &Puzzle,
    scaffold: &dyn ScaffoldGenerator,
) -> Result<Option<PathBuf>> {
    let crate_name = puzzle.crate_name();
    let crate_dir = workspace.join(&crate_name);

    if crate_dir.exists() {
        println!("{crate_name} already exists.");
        return Ok(None);
    }

    let mut manifest = Manifest::load(&workspace.join(MANIFEST_FILE))?;
    manifest.add_member(&crate_name)?;
    manifest.save()?;

    scaffold.create(&crate_dir)?;
    boilerplate::write(&crate_dir, &crate_name)?;

    Ok(Some(crate_dir))
}

/// Download the input and only then create the file, so a failed request
/// never leaves a stale `input.txt` behind.
async fn fetch_input_file(client: &AocClient, puzzle: &Puzzle, src_dir: &Path) -> Result<()> {
    let body = client.fetch_input(puzzle.year, puzzle.day).await?;
    let path = src_dir.join(INPUT_FILE);
    std::fs::write(&path, normalize_newlines(&body))
        .with_context(|| format!("Cannot write '{}'", path.display()))?;
    Ok(())
}

/// The input is stored with LF line breaks regardless of what the host
/// or the response used.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}
