use clap::Parser;
use std::path::PathBuf;

use crate::output::DEFAULT_LIMIT;

#[derive(Parser)]
#[command(
    name = "breakrank",
    about = "Rank simai charts by break notes that are not ex notes",
    version
)]
pub struct Cli {
    #[arg(
        default_value = "data",
        help = "Chart root, laid out as <root>/<partition>/<id>_<name>/maidata.txt"
    )]
    pub data_directory: PathBuf,

    #[arg(long, short, default_value_t = DEFAULT_LIMIT, help = "Number of ranked rows to print")]
    pub limit: usize,

    #[arg(long, short, help = "Charts parsed concurrently (default: number of CPUs)")]
    pub jobs: Option<usize>,
}
