//! Markup cleaning: raw HTML → ordered, non-empty text lines.
//!
//! A published document lays its data out as table cells and paragraphs.
//! Turning every closing cell/paragraph tag into a line break, then throwing
//! the rest of the markup away, leaves exactly one line per cell. That is the
//! shape the triple parser expects.
//!
//! ## Rule Order
//!
//! Script and style blocks go first so their contents never become lines.
//! Newlines already in the source are kept as line separators, so `<pre>`
//! blocks and plain-text documents split one value per line. Entities are
//! decoded after tags are stripped: a decoded `&lt;` must not be mistaken for
//! the start of a tag.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Clean raw markup into lines, one per structural boundary.
///
/// Steps (applied in order):
/// 1. Drop `<script>` and `<style>` blocks with their contents
/// 2. `<br>` and closing block/table/list tags → newline
/// 3. Every other tag → a single space
/// 4. Decode character entities (`&#9608;` → `█`, `&amp;` → `&`)
/// 5. Collapse horizontal whitespace runs and blank-line runs
/// 6. Split, trim, drop empty lines
pub fn clean_markup(markup: &str) -> Vec<String> {
    let s = strip_script_and_style(markup);
    let s = mark_boundaries(&s);
    let s = strip_tags(&s);
    let s = decode_entities(&s);
    let s = collapse_whitespace(&s);
    let lines = split_lines(&s);
    debug!("Cleaned {} bytes of markup into {} lines", markup.len(), lines.len());
    lines
}

// ── Step 1: Drop script/style blocks ─────────────────────────────────────────

static RE_SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script.*?</script>").unwrap());
static RE_STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style.*?</style>").unwrap());

fn strip_script_and_style(input: &str) -> String {
    let s = RE_SCRIPT.replace_all(input, "");
    RE_STYLE.replace_all(&s, "").into_owned()
}

// ── Step 2: Structural boundaries → newline ──────────────────────────────────

static RE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static RE_BLOCK_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</(p|div|tr|td|th|li|h\d)\s*>").unwrap());

fn mark_boundaries(input: &str) -> String {
    let s = RE_BREAK.replace_all(input, "\n");
    RE_BLOCK_CLOSE.replace_all(&s, "\n").into_owned()
}

// ── Step 3: Strip remaining tags ─────────────────────────────────────────────

static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());

fn strip_tags(input: &str) -> String {
    // A space, not nothing: `<span>1</span><span>2</span>` must not read as "12".
    RE_TAG.replace_all(input, " ").into_owned()
}

// ── Step 4: Decode entities ──────────────────────────────────────────────────

fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}

// ── Step 5: Collapse whitespace ──────────────────────────────────────────────

static RE_HSPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\r\f\v]+").unwrap());
static RE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").unwrap());

fn collapse_whitespace(input: &str) -> String {
    let s = RE_HSPACE.replace_all(input, " ");
    RE_BLANK_LINES.replace_all(&s, "\n").into_owned()
}

// ── Step 6: Split into lines ─────────────────────────────────────────────────

fn split_lines(input: &str) -> Vec<String> {
    input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────
