//! Conversion entry points: fetch → clean → parse → (size check) → render.
//!
//! [`convert`] is the full pipeline for a URL or path. [`convert_markup`]
//! runs everything after the fetch on markup already in memory; it is pure,
//! so the same markup always yields the same grid.

use crate::config::GridConfig;
use crate::error::GlyphGridError;
use crate::output::{CellSample, GridOutput, GridStats};
use crate::pipeline::parse::ParsedCells;
use crate::pipeline::render::Grid;
use crate::pipeline::{clean, fetch, parse};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Rebuild the grid published at `input` (an HTTP(S) URL or a local path).
///
/// # Errors
/// - fetch/read failures (`FetchFailed`, `FetchTimeout`, `FileNotFound`, …)
/// - `NoTriples` when the document holds no `(x, glyph, y)` group
/// - `GridTooLarge` when the coordinates exceed the configured cap
pub async fn convert(
    input_str: impl AsRef<str>,
    config: &GridConfig,
) -> Result<GridOutput, GlyphGridError> {
    let total_start = Instant::now();
    let input_str = input_str.as_ref();
    info!("Starting conversion: {}", input_str);

    // ── Step 1: Fetch ────────────────────────────────────────────────────
    let fetch_start = Instant::now();
    let markup = fetch::resolve_markup(input_str, config).await?;
    let fetch_duration_ms = fetch_start.elapsed().as_millis() as u64;

    // ── Steps 2-4: Clean, parse, render ──────────────────────────────────
    let mut output = convert_markup(&markup, config)?;
    output.stats.source = input_str.to_string();
    output.stats.fetch_duration_ms = fetch_duration_ms;
    output.stats.total_duration_ms = total_start.elapsed().as_millis() as u64;

    info!(
        "Conversion complete: {} in {}ms",
        output.stats.summary(),
        output.stats.total_duration_ms
    );
    Ok(output)
}

/// Clean, parse and render markup that is already in memory.
pub fn convert_markup(markup: &str, config: &GridConfig) -> Result<GridOutput, GlyphGridError> {
    let start = Instant::now();

    let lines = clean::clean_markup(markup);
    let parsed = parse::parse_triples(&lines);

    let Some((width, height)) = parsed.dimensions() else {
        warn!("No triples found in {} lines", lines.len());
        return Err(GlyphGridError::NoTriples { lines: lines.len() });
    };

    if !config.allows(width, height) {
        warn!(
            "Grid {}x{} exceeds limits (max {} cells, max {} per side)",
            width, height, config.max_cells, config.max_dimension
        );
        return Err(GlyphGridError::GridTooLarge {
            width,
            height,
            unique_cells: parsed.cells.len(),
            samples: sample_cells(&parsed, config.sample_limit),
        });
    }

    let mut grid = Grid::new(width, height, &config.blank);
    let skipped_cells = grid.fill(&parsed.cells);
    debug!("Rendered {}x{} grid", width, height);

    Ok(GridOutput {
        text: grid.to_text(),
        stats: GridStats {
            source: String::new(),
            lines: lines.len(),
            triples: parsed.hits,
            unique_cells: parsed.cells.len(),
            width,
            height,
            skipped_cells,
            fetch_duration_ms: 0,
            total_duration_ms: start.elapsed().as_millis() as u64,
        },
    })
}

/// Up to `limit` cells in the order the document first listed them.
fn sample_cells(parsed: &ParsedCells, limit: usize) -> Vec<CellSample> {
    parsed
        .iter_ordered()
        .take(limit)
        .map(|(coord, glyph)| CellSample::new(coord, glyph))
        .collect()
}

/// Convert and write the grid text to `output_path`.
///
/// The write goes to a sibling temp file first and is renamed into place, so
/// a failed run never leaves a half-written grid behind.
pub async fn convert_to_file(
    input_str: impl AsRef<str>,
    output_path: impl AsRef<Path>,
    config: &GridConfig,
) -> Result<GridStats, GlyphGridError> {
    let output = convert(input_str, config).await?;
    let path = output_path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| GlyphGridError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
    }

    let tmp_path = path.with_extension("grid.tmp");
    tokio::fs::write(&tmp_path, &output.text)
        .await
        .map_err(|e| GlyphGridError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| GlyphGridError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!("Wrote grid to {}", path.display());
    Ok(output.stats)
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_sync(
    input_str: impl AsRef<str>,
    config: &GridConfig,
) -> Result<GridOutput, GlyphGridError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| GlyphGridError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(convert(input_str, config))
}
