// src/file.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::ExportOptions;
use crate::error::Result;
use crate::runner::Analysis;

/// Write the enabled exports of an analysis. Returns the paths written, CSV
/// first.
pub fn write_exports(export: &ExportOptions, analysis: &Analysis) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(2);
    if !(export.write_csv || export.write_html) {
        return Ok(written);
    }
    ensure_directory(&export.out_dir)?;

    if export.write_csv {
        written.push(write_text(export.csv_path(), &analysis.csv)?);
    }
    if export.write_html {
        written.push(write_text(export.html_path(), &analysis.report)?);
    }
    Ok(written)
}

fn write_text(path: PathBuf, contents: &str) -> Result<PathBuf> {
    fs::write(&path, contents)?;
    logf!("Wrote {}", path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
