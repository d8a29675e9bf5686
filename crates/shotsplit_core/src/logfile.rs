// SPDX-License-Identifier: MIT OR Apache-2.0
//! Split-log output.
//!
//! One plain-text file per session, listing every generated take with its
//! frame range. Frame numbers are derived here, at the edge, from the
//! document frame rate.

use crate::build::CameraRecord;
use shotsplit_scene::SceneDocument;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default log folder: `<user documents>/Shot Splitter/Logs/<document base name>`
pub fn default_log_dir(doc: &SceneDocument) -> PathBuf {
    let documents = dirs::document_dir().unwrap_or_else(|| PathBuf::from("."));
    documents
        .join("Shot Splitter")
        .join("Logs")
        .join(doc.base_name())
}

/// Write the split log into `dir`, creating the folder if absent.
///
/// Filename: `split-log_<MM-DD-YYYY_HH-MM-SS>.txt`. Returns the path of the
/// written file.
pub fn write_split_log(
    doc: &SceneDocument,
    records: &[CameraRecord],
    dir: &Path,
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let stamp = chrono::Local::now().format("%m-%d-%Y_%H-%M-%S");
    let path = dir.join(format!("split-log_{stamp}.txt"));

    let scene_file = doc
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| doc.name.clone());

    let mut lines = vec![format!("Scene File: {scene_file}")];
    for record in records {
        lines.push(String::new());
        lines.push(format!(
            "{}: {} - {}",
            record.take_name,
            record.range.start.frame(doc.fps),
            record.range.end.frame(doc.fps),
        ));
    }

    fs::write(&path, lines.join("\n"))?;
    tracing::info!(path = %path.display(), takes = records.len(), "wrote split log");
    Ok(path)
}
