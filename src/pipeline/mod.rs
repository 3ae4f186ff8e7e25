//! Pipeline stages for document-to-grid conversion.
//!
//! Each submodule implements exactly one transformation step and is testable
//! on its own.
//!
//! ## Data Flow
//!
//! ```text
//! fetch ──▶ clean ──▶ parse ──▶ render
//! (URL/path) (lines)  (cells)   (text)
//! ```
//!
//! 1. [`fetch`]: download the published document (or read a saved copy)
//! 2. [`clean`]: strip markup, leaving one line per table cell / paragraph
//! 3. [`parse`]: scan lines for `(x, glyph, y)` triples into a sparse map
//! 4. [`render`]: place glyphs into a dense grid and serialise its rows
//!
//! The size check between `parse` and `render` lives in
//! [`crate::convert`], which owns the run's configuration.

pub mod clean;
pub mod fetch;
pub mod parse;
pub mod render;
