//! # glyph-grid
//!
//! Rebuild a character grid from a published web document that lists its
//! cells as `(x, glyph, y)` triples.
//!
//! Documents published to the web from a word processor render tables as
//! HTML. When such a table holds three columns (x, character, y), stripping
//! the markup leaves a flat run of lines: `0`, `█`, `0`, `1`, `▀`, `0`, …
//! This crate reads those lines back into a 2D grid and prints it.
//!
//! ## Pipeline Overview
//!
//! ```text
//! URL / file
//!  │
//!  ├─ 1. Fetch   one GET with a browser User-Agent and a 20 s timeout
//!  ├─ 2. Clean   one line per table cell / paragraph, entities decoded
//!  ├─ 3. Parse   scan for (digits, glyph, digits); skip noise line by line
//!  ├─ 4. Check   refuse grids over the cell cap or 5000 per side
//!  └─ 5. Render  dense grid, blank-filled, one text row per y
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glyph_grid::{convert, GridConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GridConfig::default();
//!     let output = convert("https://docs.example.com/document/d/e/XYZ/pub", &config).await?;
//!     print!("{}", output.text);
//!     eprintln!("{}", output.stats.summary());
//!     Ok(())
//! }
//! ```
//!
//! Markup already in memory can skip the fetch:
//!
//! ```rust
//! use glyph_grid::{convert_markup, GridConfig};
//!
//! let html = "<p>1</p><p>&#9608;</p><p>0</p>";
//! let out = convert_markup(html, &GridConfig::default()).unwrap();
//! assert_eq!(out.text, " █\n");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `glyph-grid` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{GridConfig, GridConfigBuilder};
pub use convert::{convert, convert_markup, convert_sync, convert_to_file};
pub use error::GlyphGridError;
pub use output::{CellSample, GridOutput, GridStats};
pub use pipeline::clean::clean_markup;
pub use pipeline::parse::{parse_triples, CellMap, Coord, Glyph, ParsedCells};
pub use pipeline::render::{render_cells, Grid};
