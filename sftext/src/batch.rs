//! Batch conversion of game data directories
//!
//! The game keeps all convertible text assets in one flat directory, so
//! discovery walks a single level. Files are converted in parallel, one
//! task per file; each codec invocation is self-contained, so no locking
//! is needed. A failing file is logged and counted, never aborts the run.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::converter;
use crate::formats::{Direction, FormatKind};

/// Result of a batch conversion.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Number of files converted successfully.
    pub success_count: usize,
    /// Number of files that failed.
    pub fail_count: usize,
    /// One message per processed file.
    pub results: Vec<String>,
}

/// Find all convertible asset files directly inside a directory.
///
/// Only files whose names match a known format are returned, sorted.
pub fn find_asset_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_file() && FormatKind::detect(e.path()).is_some())
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// Convert every recognized file in `dir`, writing outputs into `out_dir`.
///
/// Binary files become `<name>.json`; JSON files lose their `.json` suffix.
/// Unrecognized files are skipped during discovery.
pub fn batch_convert<P: AsRef<Path>>(dir: P, out_dir: P) -> BatchResult {
    let files = find_asset_files(&dir);
    let out_dir = out_dir.as_ref();

    let success = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    let results: Vec<String> = files
        .par_iter()
        .map(|source| {
            let dest = output_path(source, out_dir);
            match converter::convert_file(source, &dest, None) {
                Ok(Direction::Parse) => {
                    success.fetch_add(1, Ordering::Relaxed);
                    format!("parsed {} -> {}", source.display(), dest.display())
                }
                Ok(Direction::Compile) => {
                    success.fetch_add(1, Ordering::Relaxed);
                    format!("compiled {} -> {}", source.display(), dest.display())
                }
                Err(err) => {
                    failed.fetch_add(1, Ordering::Relaxed);
                    tracing::warn!("failed to convert {:?}: {err}", source);
                    format!("FAILED {}: {err}", source.display())
                }
            }
        })
        .collect();

    BatchResult {
        success_count: success.load(Ordering::Relaxed),
        fail_count: failed.load(Ordering::Relaxed),
        results,
    }
}

/// The output path for one source file: `.json` appended for binary
/// sources, stripped for JSON sources.
fn output_path(source: &Path, out_dir: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match Direction::detect(source) {
        Direction::Parse => out_dir.join(format!("{name}.json")),
        Direction::Compile => out_dir.join(name.strip_suffix(".json").unwrap_or(&name)),
    }
}
