//! Passthrough asset copying.
//!
//! Each configured source directory is copied unmodified to the output
//! tree, preserving its layout relative to the input directory. No
//! transformation happens here; this is declared configuration, not a
//! pipeline.

use crate::config::SiteConfig;
use crate::log;
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect all files from a directory recursively.
fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Check if destination is up-to-date compared to source.
fn is_up_to_date(src: &Path, dst: &Path) -> bool {
    let mtime = |p: &Path| -> Option<SystemTime> { p.metadata().ok()?.modified().ok() };
    match (mtime(src), mtime(dst)) {
        (Some(src_time), Some(dst_time)) => src_time <= dst_time,
        _ => false,
    }
}

/// Copy all passthrough directories to the output tree in parallel.
///
/// Returns the number of files considered (copied or already up-to-date).
pub fn copy_passthrough(config: &SiteConfig) -> Result<usize> {
    let input = &config.build.input;
    let output = &config.build.output;
    let clean = config.build.clean;

    let mut files = Vec::new();
    for dir in &config.build.passthrough {
        let source = input.join(dir);
        if !source.exists() {
            log!("assets"; "skipping missing passthrough directory `{}`", dir.display());
            continue;
        }
        files.extend(collect_all_files(&source));
    }

    files
        .par_iter()
        .try_for_each(|path| copy_one(path, input, output, clean))?;

    Ok(files.len())
}

/// Copy a single file, preserving its path relative to the input directory.
fn copy_one(path: &Path, input: &Path, output: &Path, clean: bool) -> Result<()> {
    let rel_path = path
        .strip_prefix(input)?
        .to_str()
        .ok_or_else(|| anyhow!("Invalid path"))?;

    let output_path = output.join(rel_path);

    // Unchanged files are skipped unless a clean build was requested
    if !clean && is_up_to_date(path, &output_path) {
        return Ok(());
    }

    log!("assets"; "{}", rel_path);

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::copy(path, &output_path)
        .with_context(|| format!("failed to copy `{}`", path.display()))?;
    Ok(())
}
