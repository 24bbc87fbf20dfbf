use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One of the three user selections required before generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Model,
    Prompt,
    Artist,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Model => "AI model",
            Field::Prompt => "base prompt",
            Field::Artist => "artist style",
        };
        f.write_str(name)
    }
}

/// Reasons a generation request is rejected before any sample lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Please select all options (missing {0})")]
    Validation(Field),

    #[error("This combination is not yet available: {model} with {artist}")]
    UnsupportedCombination { model: String, artist: String },
}

/// Failure to read a score from a sheet. Never surfaced to the user;
/// the resolver logs it and falls back to a zero score.
#[derive(Debug, Error)]
pub enum ScoreLookupError {
    #[error("failed to open workbook {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("workbook {} has no worksheets", .0.display())]
    NoWorksheet(PathBuf),

    #[error("failed to read first worksheet of {}: {source}", .path.display())]
    Sheet {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("worksheet in {} has no {column:?} column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a config directory")]
    NoConfigDir,

    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
