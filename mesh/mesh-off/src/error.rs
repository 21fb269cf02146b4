//! Error types for OFF reading and writing.

use std::path::PathBuf;

use mesh_types::ValidationError;
use thiserror::Error;

/// Result type for OFF I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Structural problems in an OFF document.
///
/// These are always fatal: a document either decodes into a complete,
/// index-valid mesh or not at all. Individual malformed vertex or face lines
/// are *not* format errors; the decoder skips them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// First non-blank line is not `OFF`, `NOFF`, `COFF` or `NCOFF`.
    #[error("unrecognized header: expected OFF, NOFF, COFF or NCOFF, found {found:?}")]
    UnrecognizedHeader {
        /// The text found in place of the header token.
        found: String,
    },

    /// Count line is not exactly three non-negative integers.
    #[error("malformed counts on line {line}: {text:?}")]
    MalformedCounts {
        /// 1-based line number of the count line (0 if the stream ended).
        line: usize,
        /// The offending text.
        text: String,
    },

    /// Stream ended before the declared number of vertices was read.
    #[error("truncated vertex section: expected {expected} vertices, found {found}")]
    TruncatedVertexSection {
        /// Declared vertex count.
        expected: usize,
        /// Vertices successfully read.
        found: usize,
    },

    /// Stream ended before the declared number of face records was read.
    #[error("truncated face section: expected {expected} records, found {found}")]
    TruncatedFaceSection {
        /// Declared face count.
        expected: usize,
        /// Records successfully read.
        found: usize,
    },

    /// A face or edge record references a vertex that was not declared.
    #[error(
        "index out of range: record {record} references vertex {index}, but the document has {vertex_count} vertices"
    )]
    IndexOutOfRange {
        /// 0-based position of the record in the face section.
        record: usize,
        /// The offending index.
        index: i64,
        /// Number of vertices in the document.
        vertex_count: usize,
    },
}

/// Errors that can occur while loading or saving OFF files.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Path does not carry the `.off` extension.
    #[error("unknown file format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// The document is not valid OFF.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The mesh handed to the writer violates its own invariants.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] ValidationError),

    /// Import or export parameters are inconsistent.
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// What was wrong.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoded output was not valid UTF-8.
    #[error("string conversion error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

impl IoError {
    /// Create an `InvalidParams` error with the given message.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// The format error, if this is one.
    #[must_use]
    pub const fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format(e) => Some(e),
            _ => None,
        }
    }

    /// Map a file-open error, turning `NotFound` into [`IoError::FileNotFound`].
    pub(crate) fn from_open(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }
}
