use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+").expect("valid leading digits regex"));

pub const CHART_FILE_NAME: &str = "maidata.txt";

const NOT_AVAILABLE: &str = "N/A";
const UNKNOWN_TITLE: &str = "Unknown Title";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SongId(Option<String>);

impl SongId {
    pub fn from_folder_name(name: &str) -> Self {
        Self(LEADING_DIGITS.find(name).map(|m| m.as_str().to_string()))
    }

    pub fn from_chart_path(path: &Path) -> Self {
        path.parent()
            .and_then(|folder| folder.file_name())
            .map(|name| Self::from_folder_name(&name.to_string_lossy()))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(NOT_AVAILABLE))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartFile {
    pub path: PathBuf,
    pub song_id: SongId,
}

impl ChartFile {
    pub fn new(path: PathBuf) -> Self {
        let song_id = SongId::from_chart_path(&path);
        Self { path, song_id }
    }
}

/// Break statistics for one authored difficulty of one chart.
///
/// Only constructed through [`FumenMetric::from_counts`], which refuses
/// difficulties without break notes, so `total_breaks > 0` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct FumenMetric {
    pub song_id: SongId,
    pub song_title: Option<String>,
    pub difficulty_index: Option<u32>,
    total_breaks: usize,
    special_breaks: usize,
}

impl FumenMetric {
    pub fn from_counts(
        song_id: SongId,
        song_title: Option<String>,
        difficulty_index: Option<u32>,
        total_breaks: usize,
        special_breaks: usize,
    ) -> Option<Self> {
        if total_breaks == 0 || special_breaks > total_breaks {
            return None;
        }

        Some(Self {
            song_id,
            song_title,
            difficulty_index,
            total_breaks,
            special_breaks,
        })
    }

    pub fn total_breaks(&self) -> usize {
        self.total_breaks
    }

    pub fn special_breaks(&self) -> usize {
        self.special_breaks
    }

    pub fn ratio(&self) -> f64 {
        self.special_breaks as f64 / self.total_breaks as f64
    }

    pub fn title_label(&self) -> &str {
        self.song_title.as_deref().unwrap_or(UNKNOWN_TITLE)
    }

    pub fn difficulty_label(&self) -> String {
        match self.difficulty_index {
            Some(index) => index.to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}
