pub mod chart;
pub mod cli;
pub mod error;
pub mod extract;
pub mod layout;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod simai;

pub use chart::{ChartData, ChartParser, FumenData, Note, NoteEvent};
pub use error::{ExtractError, ParseError, ScanError};
pub use model::{ChartFile, FumenMetric, SongId};
pub use pipeline::{PipelineOptions, PipelineResult, analyze};
pub use simai::SimaiParser;
