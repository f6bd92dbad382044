pub mod read;
pub mod walk;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::chart::ChartParser;
use crate::error::ScanError;
use crate::extract;
use crate::model::{ChartFile, FumenMetric};

pub use walk::{WalkResult, scan, walk_corpus};

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub jobs: usize,
    pub show_progress: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            jobs: num_cpus::get().max(1),
            show_progress: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct PipelineResult {
    pub chart_files: usize,
    pub metrics: Vec<FumenMetric>,
}

pub async fn analyze<P>(root: &Path, parser: P, options: PipelineOptions) -> Result<PipelineResult>
where
    P: ChartParser + 'static,
{
    if !root.is_dir() {
        return Err(ScanError::InvalidRoot(root.to_path_buf()).into());
    }

    info!("Scanning directory: {}", root.display());

    let walk_result = walk_corpus(root).await?;
    let chart_files = walk_result.files.len();

    info!("Found {} chart files", chart_files);

    let metrics = extract_all(walk_result.files, Arc::new(parser), options).await;

    Ok(PipelineResult {
        chart_files,
        metrics,
    })
}

/// Runs the extractor over every file on a bounded set of tasks.
///
/// The returned metrics are in scan order regardless of completion order.
pub async fn extract_all<P>(
    files: Vec<ChartFile>,
    parser: Arc<P>,
    options: PipelineOptions,
) -> Vec<FumenMetric>
where
    P: ChartParser + 'static,
{
    let pb = if options.show_progress {
        ProgressBar::new(files.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let semaphore = Arc::new(Semaphore::new(options.jobs.max(1)));
    let results = Arc::new(Mutex::new(Vec::with_capacity(files.len())));

    let mut join_set = JoinSet::new();
    let mut task_paths = HashMap::with_capacity(files.len());

    for (position, file) in files.into_iter().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let results = Arc::clone(&results);
        let parser = Arc::clone(&parser);
        let pb = pb.clone();
        let path = file.path.clone();

        let handle = join_set.spawn(async move {
            let _permit = semaphore.acquire().await;

            let outcome = extract::try_extract(&file, parser).await;
            let metrics = pb.suspend(|| extract::log_outcome(&file, outcome));
            results.lock().await.push((position, metrics));

            pb.inc(1);
        });
        task_paths.insert(handle.id(), path);
    }

    while let Some(joined) = join_set.join_next().await {
        if let Err(e) = joined {
            let path = task_paths
                .get(&e.id())
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            pb.suspend(|| warn!(path = %path, "Extraction task failed: {}", e));
            pb.inc(1);
        }
    }

    pb.finish_and_clear();

    let mut results = std::mem::take(&mut *results.lock().await);
    results.sort_by_key(|(position, _)| *position);

    results
        .into_iter()
        .flat_map(|(_, metrics)| metrics)
        .collect()
}
