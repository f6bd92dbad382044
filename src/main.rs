use anyhow::Result;
use breakrank::cli::Cli;
use breakrank::{PipelineOptions, SimaiParser, analyze, output};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("breakrank=info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut options = PipelineOptions::default();
    if let Some(jobs) = cli.jobs {
        options.jobs = jobs.max(1);
    }

    let result = analyze(&cli.data_directory, SimaiParser, options).await?;

    print!("{}", output::render_report(&result.metrics, cli.limit));

    Ok(())
}
