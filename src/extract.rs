use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::chart::{ChartData, ChartParser, FumenData};
use crate::error::ExtractError;
use crate::model::{ChartFile, FumenMetric, SongId};
use crate::pipeline::read::read_chart_text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakCounts {
    pub total: usize,
    pub special: usize,
}

pub fn count_breaks(fumen: &FumenData) -> BreakCounts {
    let mut counts = BreakCounts::default();

    for note in fumen.notes().filter(|note| note.is_break) {
        counts.total += 1;
        if !note.is_ex {
            counts.special += 1;
        }
    }

    counts
}

pub fn metrics_from_chart(song_id: &SongId, chart: &ChartData) -> Vec<FumenMetric> {
    chart
        .fumens
        .iter()
        .filter(|fumen| fumen.is_authored())
        .filter_map(|fumen| {
            let counts = count_breaks(fumen);
            FumenMetric::from_counts(
                song_id.clone(),
                chart.title.clone(),
                fumen.difficulty_index,
                counts.total,
                counts.special,
            )
        })
        .collect()
}

/// Extracts break metrics from one chart file.
///
/// Read, decode and parse failures are logged and yield no metrics.
pub async fn extract<P>(file: &ChartFile, parser: Arc<P>) -> Vec<FumenMetric>
where
    P: ChartParser + 'static,
{
    let outcome = try_extract(file, parser).await;
    log_outcome(file, outcome)
}

/// Logs the result of [`try_extract`] and turns failures into an empty result.
pub fn log_outcome(
    file: &ChartFile,
    outcome: Result<Vec<FumenMetric>, ExtractError>,
) -> Vec<FumenMetric> {
    match outcome {
        Ok(metrics) => {
            debug!(
                path = %file.path.display(),
                metrics = metrics.len(),
                "Extracted chart metrics"
            );
            metrics
        }
        Err(e) => {
            warn!(path = %file.path.display(), "Failed to process chart file: {}", e);
            Vec::new()
        }
    }
}

pub async fn extract_path<P>(path: &Path, parser: Arc<P>) -> Vec<FumenMetric>
where
    P: ChartParser + 'static,
{
    extract(&ChartFile::new(path.to_path_buf()), parser).await
}

pub async fn try_extract<P>(file: &ChartFile, parser: Arc<P>) -> Result<Vec<FumenMetric>, ExtractError>
where
    P: ChartParser + 'static,
{
    let content = read_chart_text(&file.path).await?;

    let chart = tokio::task::spawn_blocking(move || parser.parse(&content))
        .await
        .map_err(|e| ExtractError::Aborted {
            path: file.path.clone(),
            message: e.to_string(),
        })?
        .map_err(|source| ExtractError::Parse {
            path: file.path.clone(),
            source,
        })?;

    Ok(metrics_from_chart(&file.song_id, &chart))
}
