use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartError {
    #[error("Advent of Code returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("day must be between 1 and 25 (got {0})")]
    DayOutOfRange(u32),

    #[error("year must be between 2015 and {current} (got {year})")]
    YearOutOfRange { year: i32, current: i32 },

    #[error("Cargo.toml is missing {0}")]
    ManifestSchema(&'static str),

    #[error("`cargo new` exited with {0}")]
    Scaffold(std::process::ExitStatus),
}
