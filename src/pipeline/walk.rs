use ignore::WalkBuilder;
use std::path::Path;

use crate::error::ScanError;
use crate::model::{CHART_FILE_NAME, ChartFile};

const SONG_FOLDER_DEPTH: usize = 2;

pub struct WalkResult {
    pub files: Vec<ChartFile>,
}

pub async fn walk_corpus(root: &Path) -> Result<WalkResult, ScanError> {
    let root = root.to_path_buf();
    let walk_root = root.clone();

    tokio::task::spawn_blocking(move || scan(&walk_root))
        .await
        .map_err(|e| ScanError::Walk {
            path: root,
            message: e.to_string(),
        })?
}

/// Lists `root/<partition>/<song>/maidata.txt` for every song folder that has one.
///
/// Entries that are not directories are skipped at both levels, as are
/// entries that cannot be read.
pub fn scan(root: &Path) -> Result<WalkResult, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::InvalidRoot(root.to_path_buf()));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .max_depth(Some(SONG_FOLDER_DEPTH))
        .build();

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if entry.depth() != SONG_FOLDER_DEPTH {
            continue;
        }

        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }

        let chart_path = entry.path().join(CHART_FILE_NAME);
        if chart_path.is_file() {
            files.push(ChartFile::new(chart_path));
        }
    }

    Ok(WalkResult { files })
}
