//! CLI interface for directory batch conversion
use std::path::Path;

use sftext::batch::batch_convert;

pub fn execute(source: &Path, destination: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(destination)?;

    let result = batch_convert(source, destination);
    for line in &result.results {
        println!("{line}");
    }
    println!(
        "Done: {} converted, {} failed",
        result.success_count, result.fail_count
    );

    if result.fail_count > 0 {
        anyhow::bail!("{} file(s) failed to convert", result.fail_count);
    }
    Ok(())
}
