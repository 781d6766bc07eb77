//! CLI interface for single-file conversion
use std::path::{Path, PathBuf};

use sftext::converter::convert_file;
use sftext::formats::{Direction, FormatKind};

pub fn execute(
    source: &Path,
    destination: Option<&Path>,
    format: Option<&str>,
) -> anyhow::Result<()> {
    let kind = format.map(str::parse::<FormatKind>).transpose()?;

    let destination = match destination {
        Some(dest) => dest.to_path_buf(),
        None => default_destination(source),
    };

    match convert_file(source, &destination, kind)? {
        Direction::Parse => println!("Parsed {} -> {}", source.display(), destination.display()),
        Direction::Compile => {
            println!("Compiled {} -> {}", source.display(), destination.display());
        }
    }
    Ok(())
}

/// Binary sources gain a `.json` suffix; JSON sources lose theirs.
fn default_destination(source: &Path) -> PathBuf {
    let name = source.to_string_lossy();
    match Direction::detect(source) {
        Direction::Parse => PathBuf::from(format!("{name}.json")),
        Direction::Compile => PathBuf::from(name.strip_suffix(".json").unwrap_or(&name)),
    }
}
