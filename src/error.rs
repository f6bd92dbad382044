use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory '{0}' does not exist or is not a directory")]
    InvalidRoot(PathBuf),

    #[error("Failed to enumerate '{path}': {message}")]
    Walk { path: PathBuf, message: String },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Parser aborted on '{path}': {message}")]
    Aborted { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("[{key}] unclosed '{open}' in token '{token}'")]
    Unbalanced {
        key: String,
        open: char,
        token: String,
    },

    #[error("[{key}] invalid bpm '{value}'")]
    InvalidBpm { key: String, value: String },

    #[error("[{key}] invalid beat division '{value}'")]
    InvalidDivision { key: String, value: String },

    #[error("[{key}] unrecognized note '{token}'")]
    UnknownNote { key: String, token: String },

    #[error("[{key}] button out of range in '{token}'")]
    InvalidButton { key: String, token: String },

    #[error("[{key}] sensor out of range in '{token}'")]
    InvalidSensor { key: String, token: String },
}
