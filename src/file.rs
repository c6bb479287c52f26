// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::{
    board::PriceBoard,
    config::{ consts::FALLBACK_IMAGE, options::{ ExportFormat, ExportOptions } },
    csv, html,
};

/// Bundled placeholder icon. HTML pages reference it as `FALLBACK_IMAGE`.
pub const FALLBACK_PNG: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fallback.png"));

/// Write the board according to ExportOptions (path, format, headers policy).
/// HTML exports also get the fallback image next to the page.
/// Returns the paths written, page first.
pub fn export_board(export: &ExportOptions, board: &PriceBoard) -> io::Result<Vec<PathBuf>> {
    let path = export.out_path();
    let contents = match export.format.delim() {
        Some(sep) => csv::to_export_string(board, export.include_headers, sep),
        None => html::render_board(board),
    };
    write_file(&path, &contents)?;

    let mut written = vec![path];
    if export.format == ExportFormat::Html {
        written.push(write_fallback_asset(export.out_dir())?);
    }
    Ok(written)
}

/// Replace the page with the loading placeholder. No-op for tabular formats.
pub fn write_loading_page(export: &ExportOptions) -> io::Result<()> {
    if export.format != ExportFormat::Html {
        return Ok(());
    }
    write_file(&export.out_path(), &html::render_loading())
}

/// `<dir>/images/fallback.png`, matching the relative path used in pages.
pub fn write_fallback_asset(dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(FALLBACK_IMAGE);
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    fs::write(&path, FALLBACK_PNG)?;
    Ok(path)
}

fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
