// src/report.rs

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::params::OUT_SEP;

/// One `<word><TAB><count>` line per row. No header, no summary line.
pub fn render(rows: &[(String, u32)]) -> String {
    let mut out = String::with_capacity(rows.len() * 16);
    for (word, count) in rows {
        let _ = writeln!(out, "{word}{OUT_SEP}{count}");
    }
    out
}

/// Overwrite `path` with the rendered report. Returns the path written to.
pub fn write(path: &Path, rows: &[(String, u32)]) -> Result<PathBuf, Box<dyn Error>> {
    fs::write(path, render(rows))?;
    Ok(path.to_path_buf())
}
