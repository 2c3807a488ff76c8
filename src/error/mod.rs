//! Error types and handling infrastructure for view scanning

use std::fmt;
use std::path::PathBuf;

/// Systemic failures that abort a scan run
#[derive(Debug, thiserror::Error)]
pub enum ScanErrorKind {
    #[error("Search root not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Search root is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("CSV error: {message}")]
    Csv { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ScanErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for scan operations
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error(transparent)]
    WalkError(#[from] WalkError),

    #[error("{kind}")]
    Scan {
        kind: ScanErrorKind,
        source: Option<BoxedSource>,
    },
}

impl ScanError {
    pub fn scan(kind: ScanErrorKind) -> Self {
        Self::Scan { kind, source: None }
    }

    pub fn scan_with_source(kind: ScanErrorKind, source: BoxedSource) -> Self {
        Self::Scan {
            kind,
            source: Some(source),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::scan(ScanErrorKind::configuration(message.into()))
    }

    pub fn io(error: std::io::Error, path: Option<PathBuf>) -> Self {
        let message = match &path {
            Some(p) => format!("{} ({})", error, p.display()),
            None => error.to_string(),
        };
        Self::scan_with_source(ScanErrorKind::io(message, path), error.into())
    }

    /// Per-pair failures leave the run going; everything else aborts it.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::WalkError(_))
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::WalkError(err) => format!("Search aborted: {}", err),
            Self::Scan { kind, .. } => match kind {
                ScanErrorKind::RootNotFound { path } => {
                    format!("Search root does not exist: {}", path.display())
                }
                ScanErrorKind::Configuration { message } => {
                    format!("Configuration error: {}", message)
                }
                _ => self.to_string(),
            },
        }
    }
}

impl From<csv::Error> for ScanError {
    fn from(error: csv::Error) -> Self {
        let message = error.to_string();
        Self::scan_with_source(ScanErrorKind::Csv { message }, error.into())
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub path: Option<PathBuf>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            path: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        if let Some(path) = &self.path {
            write!(f, " in {}", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Tree-walk failures; each one aborts the search for a single file
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WalkError {
    #[error("Maximum nesting depth ({max}) exceeded at '{path}'")]
    DepthExceeded { max: usize, path: String },

    #[error("Malformed component: 'meta' at '{path}' is not an object")]
    MalformedMeta { path: String },
}

impl WalkError {
    pub fn depth_exceeded(max: usize, path: String) -> Self {
        Self::DepthExceeded { max, path }
    }

    pub fn malformed_meta(path: String) -> Self {
        Self::MalformedMeta { path }
    }
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience result type for tree walks
pub type WalkResult<T> = Result<T, WalkError>;
