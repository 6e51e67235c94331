use std::path::Path;

use anyhow::{Context, Result};

/// Entry point written over the one `cargo new` generates. The binary
/// prints the two answers produced by the sibling library crate.
const MAIN_RS: &str = r#"fn main() {
    let (part1, part2) = {{crate}}::solve();
    println!("{}", part1);
    println!("{}", part2);
}
"#;

/// Solver stub. The `T`s are placeholders for whatever the day's answer
/// type turns out to be; the file is meant to be edited immediately.
const LIB_RS: &str = r#"#[inline]
pub fn solve() -> (T, T) {
    unimplemented!()
}
"#;

/// Replace the generated sources with the solver boilerplate.
///
/// Both files are fully overwritten. `{{crate}}` is the only placeholder;
/// it is substituted with the member name wherever it appears.
pub fn write(crate_dir: &Path, crate_name: &str) -> Result<()> {
    let src = crate_dir.join("src");
    write_file(&src.join("main.rs"), &render(MAIN_RS, crate_name))?;
    write_file(&src.join("lib.rs"), &render(LIB_RS, crate_name))?;
    Ok(())
}

fn render(template: &str, crate_name: &str) -> String {
    template.replace("{{crate}}", crate_name)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Cannot write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn render_substitutes_the_crate_name() {
        assert_eq!(
            render("let answers = {{crate}}::solve();", "day07"),
            "let answers = day07::solve();"
        );
    }

    #[test]
    fn overwrites_both_generated_sources() {
        let dir = TempDir::new().unwrap();
        let crate_dir = dir.path().join("day07");
        std::fs::create_dir_all(crate_dir.join("src")).unwrap();
        std::fs::write(crate_dir.join("src/main.rs"), "fn main() {}\n").unwrap();

        write(&crate_dir, "day07").unwrap();

        let main = std::fs::read_to_string(crate_dir.join("src/main.rs")).unwrap();
        let lib = std::fs::read_to_string(crate_dir.join("src/lib.rs")).unwrap();
        assert!(main.contains("day07::solve()"));
        assert!(!main.contains("{{crate}}"));
        assert!(lib.contains("pub fn solve()"));
    }
}
