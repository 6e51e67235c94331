use clap::Parser;

/// Advent of Code CLI – start solving a day.
///
/// Registers a new `dayNN` member in the workspace manifest, scaffolds the
/// crate, downloads the puzzle input, and opens the puzzle page.
#[derive(Parser, Debug)]
#[command(name = "aoc-start", version, about)]
pub struct Cli {
    /// Puzzle day (1–25). Defaults to today's day of month.
    #[arg(long, short, value_name = "DAY")]
    pub day: Option<u32>,

    /// Puzzle year (2015 up to the current year). Defaults to the current year.
    #[arg(long, short, value_name = "YEAR")]
    pub year: Option<i32>,

    /// Advent of Code session cookie [env: AOC_SESSION]
    #[arg(long, env = "AOC_SESSION", hide_env_values = true, value_name = "COOKIE")]
    pub session: Option<String>,
}
