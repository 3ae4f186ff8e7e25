//! Configuration types for grid reconstruction.
//!
//! Every knob lives in [`GridConfig`], built via its [`GridConfigBuilder`].
//! The defaults reproduce the CLI's defaults exactly, so library callers and
//! the binary behave the same unless told otherwise.

use crate::error::GlyphGridError;
use serde::Serialize;

/// `User-Agent` sent with the document request.
///
/// Published-document hosts reject obvious bot identities; a desktop browser
/// string gets the normal HTML rendition.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                                      (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Default cap on `width × height`.
pub const DEFAULT_MAX_CELLS: usize = 1_000_000;

/// Hard ceiling on either grid dimension, independent of `max_cells`.
pub const DEFAULT_MAX_DIMENSION: usize = 5000;

/// Configuration for a fetch → clean → parse → render run.
///
/// # Example
/// ```rust
/// use glyph_grid::GridConfig;
///
/// let config = GridConfig::builder()
///     .blank("·")
///     .max_cells(250_000)
///     .build()
///     .unwrap();
/// assert_eq!(config.blank, "·");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct GridConfig {
    /// Fill value for cells without a parsed glyph. Default: a single space.
    pub blank: String,

    /// Largest grid (`width × height`) the renderer will allocate. Default: 1 000 000.
    ///
    /// Coordinates come from an untrusted document. One stray `99999` would
    /// otherwise ask for billions of cells.
    pub max_cells: usize,

    /// Largest allowed width or height. Default: 5000.
    pub max_dimension: usize,

    /// How many parsed cells to report when the grid is refused. Default: 10.
    pub sample_limit: usize,

    /// HTTP request timeout in seconds. Default: 20.
    pub timeout_secs: u64,

    /// `User-Agent` header for the document request.
    pub user_agent: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            blank: " ".to_string(),
            max_cells: DEFAULT_MAX_CELLS,
            max_dimension: DEFAULT_MAX_DIMENSION,
            sample_limit: 10,
            timeout_secs: 20,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GridConfig {
    /// Create a new builder for `GridConfig`.
    pub fn builder() -> GridConfigBuilder {
        GridConfigBuilder {
            config: Self::default(),
        }
    }

    /// Whether a `width × height` grid fits inside the configured limits.
    ///
    /// Uses saturating arithmetic: coordinates near `usize::MAX` must be
    /// refused, not wrapped into a small product.
    pub fn allows(&self, width: usize, height: usize) -> bool {
        width <= self.max_dimension
            && height <= self.max_dimension
            && width.saturating_mul(height) <= self.max_cells
    }
}

/// Builder for [`GridConfig`].
#[derive(Debug)]
pub struct GridConfigBuilder {
    config: GridConfig,
}

impl GridConfigBuilder {
    pub fn blank(mut self, blank: impl Into<String>) -> Self {
        self.config.blank = blank.into();
        self
    }

    pub fn max_cells(mut self, n: usize) -> Self {
        self.config.max_cells = n;
        self
    }

    pub fn max_dimension(mut self, n: usize) -> Self {
        self.config.max_dimension = n;
        self
    }

    pub fn sample_limit(mut self, n: usize) -> Self {
        self.config.sample_limit = n;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<GridConfig, GlyphGridError> {
        let c = &self.config;
        if c.blank.is_empty() {
            return Err(GlyphGridError::InvalidConfig(
                "blank fill value must not be empty".into(),
            ));
        }
        if c.blank.contains(['\n', '\r']) {
            return Err(GlyphGridError::InvalidConfig(
                "blank fill value must not contain a line break".into(),
            ));
        }
        if c.max_cells == 0 {
            return Err(GlyphGridError::InvalidConfig(
                "max cells must be ≥ 1".into(),
            ));
        }
        if c.max_dimension == 0 {
            return Err(GlyphGridError::InvalidConfig(
                "max dimension must be ≥ 1".into(),
            ));
        }
        if c.timeout_secs == 0 {
            return Err(GlyphGridError::InvalidConfig(
                "timeout must be ≥ 1 second".into(),
            ));
        }
        Ok(self.config)
    }
}
