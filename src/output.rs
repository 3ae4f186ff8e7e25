//! Result types returned by the conversion entry points.

use crate::pipeline::parse::{Coord, Glyph};
use serde::Serialize;
use std::fmt;

/// A rendered grid plus the statistics of the run that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct GridOutput {
    /// Grid rows, each terminated by `\n`.
    pub text: String,
    pub stats: GridStats,
}

/// Counters and timings for one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GridStats {
    /// URL or path the markup came from. Empty for in-memory markup.
    pub source: String,
    /// Non-empty lines left after cleaning.
    pub lines: usize,
    /// Triples accepted, including ones that overwrote an earlier cell.
    pub triples: usize,
    /// Distinct coordinates after overwrites.
    pub unique_cells: usize,
    pub width: usize,
    pub height: usize,
    /// Parsed cells that fell outside the grid at render time.
    pub skipped_cells: usize,
    /// Time spent obtaining the markup (download or file read).
    pub fetch_duration_ms: u64,
    pub total_duration_ms: u64,
}

impl GridStats {
    /// One-line summary for the CLI's `[info]` label.
    pub fn summary(&self) -> String {
        format!(
            "parsed {} triples, {} unique cells -> grid {}x{}",
            self.triples, self.unique_cells, self.width, self.height
        )
    }
}

/// One parsed cell, reported when a grid is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSample {
    pub x: usize,
    pub y: usize,
    pub glyph: String,
    pub codepoints: Vec<u32>,
}

impl CellSample {
    pub fn new(coord: Coord, glyph: &Glyph) -> Self {
        Self {
            x: coord.x,
            y: coord.y,
            glyph: glyph.to_string(),
            codepoints: glyph.codepoints(),
        }
    }
}

impl fmt::Display for CellSample {
    /// `█ 12 3  (cp=U+2588)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cps: Vec<String> = self.codepoints.iter().map(|cp| format!("U+{cp:04X}")).collect();
        write!(f, "{} {} {}  (cp={})", self.glyph, self.x, self.y, cps.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line() {
        let stats = GridStats {
            triples: 3,
            unique_cells: 2,
            width: 6,
            height: 4,
            ..Default::default()
        };
        assert_eq!(stats.summary(), "parsed 3 triples, 2 unique cells -> grid 6x4");
    }

    #[test]
    fn sample_display() {
        let s = CellSample::new(Coord::new(12, 3), &Glyph::from_char('█'));
        assert_eq!(s.to_string(), "█ 12 3  (cp=U+2588)");

        let vs = Glyph::from_codepoints(&[0x2764, 0xFE0F]).unwrap();
        let s = CellSample::new(Coord::new(0, 0), &vs);
        assert!(s.to_string().ends_with("(cp=U+2764 U+FE0F)"));
    }

    #[test]
    fn output_serialises() {
        let out = GridOutput {
            text: "█\n".into(),
            stats: GridStats {
                source: "doc.html".into(),
                width: 1,
                height: 1,
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["text"], "█\n");
        assert_eq!(json["stats"]["width"], 1);
        assert_eq!(json["stats"]["source"], "doc.html");
    }
}
