//! Error enum
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// I/O error on a known file.
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Serde(serde_json::Error),
    /// A line that does not follow the annotation layout.
    /// `line` is 1-based, `path` is filled when the line comes from a file.
    MalformedLine {
        path: Option<PathBuf>,
        line: usize,
        content: String,
        reason: String,
    },
    /// Unsupported option value, raised before any I/O.
    Configuration(String),
    /// Gold and predicted files do not line up.
    Alignment {
        line: usize,
        gold: usize,
        pred: usize,
    },
    Custom(String),
}

impl Error {
    pub fn file(path: &Path, source: std::io::Error) -> Self {
        Error::File {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Build a [Error::MalformedLine] that is not yet attached to a file or a line number.
    pub fn malformed(content: &str, reason: impl Into<String>) -> Self {
        Error::MalformedLine {
            path: None,
            line: 0,
            content: content.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach a line number to a [Error::MalformedLine]. Other variants are left untouched.
    pub fn at_line(self, line_number: usize) -> Self {
        match self {
            Error::MalformedLine {
                path,
                content,
                reason,
                ..
            } => Error::MalformedLine {
                path,
                line: line_number,
                content,
                reason,
            },
            e => e,
        }
    }

    /// Attach a source file to a [Error::MalformedLine]. Other variants are left untouched.
    pub fn in_file(self, file: &Path) -> Self {
        match self {
            Error::MalformedLine {
                line,
                content,
                reason,
                ..
            } => Error::MalformedLine {
                path: Some(file.to_path_buf()),
                line,
                content,
                reason,
            },
            e => e,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::File { path, source } => write!(f, "io error on {:?}: {}", path, source),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "invalid glob pattern: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::MalformedLine {
                path,
                line,
                content,
                reason,
            } => {
                match path {
                    Some(p) => write!(f, "malformed line {} in {:?}", line, p)?,
                    None => write!(f, "malformed line {}", line)?,
                }
                write!(f, ": {} ({:?})", reason, content)
            }
            Error::Configuration(msg) => write!(f, "configuration error: {}", msg),
            Error::Alignment { line, gold, pred } => write!(
                f,
                "alignment error on line {}: gold has {} tokens, prediction has {}",
                line, gold, pred
            ),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::File { source, .. } => Some(source),
            Error::Glob(e) => Some(e),
            Error::GlobPattern(e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
