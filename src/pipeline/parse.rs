//! Triple parsing: cleaned lines → sparse coordinate map.
//!
//! The source document lists cells as three consecutive lines:
//! `x`, `glyph`, `y`. Published documents are noisy (headers, captions,
//! stray punctuation), so the scan never fails: a window that does not look
//! like a triple moves the cursor by one line and tries again.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use unicode_general_category::{get_general_category, GeneralCategory};

/// A grid position. Both components are non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// One user-visible character, possibly made of several code points
/// (base + variation selector, base + combining mark).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph(String);

impl Glyph {
    pub fn from_char(c: char) -> Self {
        Self(c.to_string())
    }

    /// Rebuild a glyph from its code points.
    ///
    /// Returns `None` for an empty sequence or one containing a value that is
    /// not a Unicode scalar (surrogates, > U+10FFFF).
    pub fn from_codepoints(cps: &[u32]) -> Option<Self> {
        if cps.is_empty() {
            return None;
        }
        cps.iter()
            .map(|&cp| char::from_u32(cp))
            .collect::<Option<String>>()
            .map(Self)
    }

    /// The glyph's code points, in order.
    pub fn codepoints(&self) -> Vec<u32> {
        self.0.chars().map(u32::from).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Glyph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Sparse coordinate → glyph mapping. Later writes win.
pub type CellMap = HashMap<Coord, Glyph>;

/// Result of scanning a line sequence for triples.
#[derive(Debug, Clone, Default)]
pub struct ParsedCells {
    /// Unique cells; duplicates were overwritten by the later triple.
    pub cells: CellMap,
    /// Triples accepted, counting those that overwrote an earlier cell.
    pub hits: usize,
    /// Largest x and largest y seen (tracked independently). `None` when no
    /// triple was accepted.
    pub max: Option<Coord>,
    /// Each key of `cells` once, in the order it was first parsed. An
    /// overwrite keeps the cell's original position.
    pub order: Vec<Coord>,
}

impl ParsedCells {
    /// Largest x seen, or `-1` when nothing was parsed.
    pub fn max_x(&self) -> i64 {
        self.max.map_or(-1, |m| m.x as i64)
    }

    /// Largest y seen, or `-1` when nothing was parsed.
    pub fn max_y(&self) -> i64 {
        self.max.map_or(-1, |m| m.y as i64)
    }

    /// Grid `(width, height)` needed to hold every parsed cell.
    ///
    /// Saturates at `usize::MAX` so an absurd coordinate still yields a
    /// dimension the size check can refuse.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.max
            .map(|m| (m.x.saturating_add(1), m.y.saturating_add(1)))
    }

    /// Unique cells with their glyphs, in first-parsed order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (Coord, &Glyph)> + '_ {
        self.order
            .iter()
            .filter_map(|coord| self.cells.get(coord).map(|glyph| (*coord, glyph)))
    }

    fn record(&mut self, coord: Coord, glyph: Glyph) {
        if self.cells.insert(coord, glyph).is_none() {
            self.order.push(coord);
        }
        self.hits += 1;
        self.max = Some(match self.max {
            Some(m) => Coord::new(m.x.max(coord.x), m.y.max(coord.y)),
            None => coord,
        });
    }
}

/// Scan `lines` for `(x, glyph, y)` triples.
///
/// An accepted window advances the cursor by three, a rejected one by one.
/// Windows with fewer than three lines left are never examined.
pub fn parse_triples<S: AsRef<str>>(lines: &[S]) -> ParsedCells {
    let mut parsed = ParsedCells::default();
    let mut rejected = 0usize;

    let mut i = 0;
    while i + 2 < lines.len() {
        let x_line = lines[i].as_ref();
        let glyph_line = lines[i + 1].as_ref();
        let y_line = lines[i + 2].as_ref();

        if let Some((coord, glyph)) = match_triple(x_line, glyph_line, y_line) {
            parsed.record(coord, glyph);
            i += 3;
        } else {
            rejected += 1;
            i += 1;
        }
    }

    debug!(
        "Parsed {} triples ({} unique cells) from {} lines, {} windows skipped",
        parsed.hits,
        parsed.cells.len(),
        lines.len(),
        rejected
    );
    parsed
}

/// Try to read one window as a triple.
fn match_triple(x_line: &str, glyph_line: &str, y_line: &str) -> Option<(Coord, Glyph)> {
    let x = parse_coordinate(x_line)?;
    let y = parse_coordinate(y_line)?;
    let glyph = extract_glyph(glyph_line)?;
    Some((Coord::new(x, y), glyph))
}

/// A coordinate line is one or more decimal digits and nothing else.
///
/// Any Unicode decimal digit counts (`٣` is 3), and scripts may be mixed.
/// Values too large for `usize` clamp to `usize::MAX` so the size check
/// refuses them instead of the scan skipping them.
fn parse_coordinate(line: &str) -> Option<usize> {
    if line.is_empty() {
        return None;
    }
    line.chars().try_fold(0usize, |acc, c| {
        let d = decimal_digit_value(c)?;
        Some(acc.saturating_mul(10).saturating_add(d))
    })
}

/// Numeric value of a decimal digit (general category `Nd`).
///
/// Unicode encodes every decimal digit set as a contiguous run starting at
/// zero, so the value is the distance from the start of the run, mod 10.
/// Runs can sit back to back (the mathematical digit sets do).
fn decimal_digit_value(c: char) -> Option<usize> {
    if c.is_ascii_digit() {
        return Some(usize::from(c as u8 - b'0'));
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut offset = 0usize;
    let mut cp = u32::from(c);
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        cp -= 1;
    }
    Some(offset % 10)
}

fn is_decimal_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Pick the glyph out of the middle line of a window.
///
/// The first Letter or Symbol wins, which skips stray punctuation such as
/// `/` or `,` around the real glyph. A line with neither is accepted only if
/// it is exactly one character long.
pub fn extract_glyph(line: &str) -> Option<Glyph> {
    if let Some(c) = line.chars().find(|&c| is_letter_or_symbol(c)) {
        return Some(Glyph::from_char(c));
    }
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(Glyph::from_char(c)),
        _ => None,
    }
}

fn is_letter_or_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}
