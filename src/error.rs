//! Error types for the glyph-grid library.
//!
//! A single fatal error type, [`GlyphGridError`], covers every way a run can
//! end without a grid. Malformed triples are *not* errors: the parser skips
//! them and rescans, so they only show up as a lower hit count.
//!
//! The CLI maps each variant to a process exit code via
//! [`GlyphGridError::exit_code`]:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 1 | input could not be fetched or read (and other fatal errors) |
//! | 2 | the document contained zero recognisable triples |
//! | 3 | the grid would exceed the configured safety cap |

use crate::output::CellSample;
use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the glyph-grid library.
#[derive(Debug, Error)]
pub enum GlyphGridError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The input string is neither an HTTP(S) URL nor a readable file path.
    #[error("Invalid input '{input}': not a file path or a valid HTTP/HTTPS URL")]
    InvalidInput { input: String },

    /// Local input file was not found.
    #[error("File not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Local input file exists but could not be read as text.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Connection, TLS, body or HTTP status failure while downloading.
    #[error("Failed to download '{url}': {reason}\nCheck the URL is published and reachable.")]
    FetchFailed { url: String, reason: String },

    /// Download exceeded the configured timeout.
    #[error("Download timed out after {secs}s for '{url}'")]
    FetchTimeout { url: String, secs: u64 },

    // ── Parse / render errors ─────────────────────────────────────────────
    /// Cleaning produced lines, but none of them formed an (x, glyph, y) triple.
    #[error(
        "Parsed 0 triples from {lines} lines; ensure the document uses three-cell groups: x, glyph, y."
    )]
    NoTriples { lines: usize },

    /// The coordinates would produce a grid larger than the safety cap.
    ///
    /// `samples` holds a few parsed cells so the caller can see which
    /// coordinates inflated the grid.
    #[error("Suspicious grid {width}x{height} from {unique_cells} cells; refusing to allocate.")]
    GridTooLarge {
        width: usize,
        height: usize,
        unique_cells: usize,
        samples: Vec<CellSample>,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GlyphGridError {
    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GlyphGridError::NoTriples { .. } => 2,
            GlyphGridError::GridTooLarge { .. } => 3,
            _ => 1,
        }
    }

    /// True for failures that happened before any markup was obtained.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GlyphGridError::InvalidInput { .. }
                | GlyphGridError::FileNotFound { .. }
                | GlyphGridError::ReadFailed { .. }
                | GlyphGridError::FetchFailed { .. }
                | GlyphGridError::FetchTimeout { .. }
        )
    }
}
