//! CLI binary for glyph-grid.
//!
//! A thin shim over the library crate that maps CLI flags to `GridConfig`,
//! prints the grid, and turns library errors into exit codes.

use anyhow::{Context, Result};
use clap::Parser;
use glyph_grid::{convert, convert_to_file, GlyphGridError, GridConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (stderr only, and only on a terminal) ────────────────

fn paint(code: &str, s: &str) -> String {
    if io::stderr().is_terminal() {
        format!("\x1b[{code}m{s}\x1b[0m")
    } else {
        s.to_string()
    }
}
fn red(s: &str) -> String {
    paint("31", s)
}
fn yellow(s: &str) -> String {
    paint("33", s)
}
fn green(s: &str) -> String {
    paint("32", s)
}
fn dim(s: &str) -> String {
    paint("2", s)
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Print the grid hidden in a published document
  glyph-grid "https://docs.google.com/document/d/e/2PACX-.../pub"

  # Make empty cells visible
  glyph-grid --blank . "https://docs.google.com/document/d/e/2PACX-.../pub"

  # Convert a saved copy of the page, write the grid to a file
  glyph-grid page.html -o grid.txt

  # Grid text plus statistics as JSON
  glyph-grid --json page.html > grid.json

INPUT FORMAT:
  The document must contain cells (table cells or paragraphs) in groups of
  three: an x coordinate, a glyph, a y coordinate. Rows and captions around
  the groups are skipped.

EXIT CODES:
  0  grid printed
  1  document could not be downloaded or read
  2  no (x, glyph, y) triples were found
  3  grid exceeds --max-cells or 5000 per side (sample cells are printed)
"#;

/// Rebuild a character grid from (x, glyph, y) triples in a published document.
#[derive(Parser, Debug)]
#[command(
    name = "glyph-grid",
    version,
    about = "Rebuild a character grid from (x, glyph, y) triples in a published document",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Published document URL (or a local HTML file).
    input: String,

    /// Fill value for cells without a glyph.
    #[arg(long, default_value = " ")]
    blank: String,

    /// Safety cap on width × height.
    #[arg(long, default_value_t = 1_000_000)]
    max_cells: usize,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = 20)]
    timeout: u64,

    /// Write the grid to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print grid text and statistics as JSON.
    #[arg(long)]
    json: bool,

    /// Disable the fetch spinner.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except the grid and errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Library warnings duplicate the labelled messages printed below, so the
    // default filter only lets errors through.
    let filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = match GridConfig::builder()
        .blank(cli.blank.clone())
        .max_cells(cli.max_cells)
        .timeout_secs(cli.timeout)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {e}", red("[error]"));
            return Ok(ExitCode::from(e.exit_code()));
        }
    };

    let show_progress = !cli.quiet && !cli.no_progress && !cli.json && io::stderr().is_terminal();
    let spinner = show_progress.then(|| fetch_spinner(&cli.input));

    // ── Run conversion ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let result = convert_to_file(&cli.input, output_path, &config).await;
        if let Some(bar) = spinner {
            bar.finish_and_clear();
        }
        let stats = match result {
            Ok(stats) => stats,
            Err(e) => return Ok(report_failure(&e)),
        };

        if cli.json {
            let json = serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?;
            println!("{json}");
        } else if !cli.quiet {
            eprintln!("[info] {}", stats.summary());
            eprintln!(
                "{}  {}  {}",
                green("✔"),
                output_path.display(),
                dim(&format!("{}ms", stats.total_duration_ms))
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    let result = convert(&cli.input, &config).await;
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let output = match result {
        Ok(output) => output,
        Err(e) => return Ok(report_failure(&e)),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        writeln!(handle, "{json}").context("Failed to write to stdout")?;
    } else {
        if !cli.quiet {
            writeln!(handle, "[info] {}", output.stats.summary())
                .context("Failed to write to stdout")?;
        }
        handle
            .write_all(output.text.as_bytes())
            .context("Failed to write to stdout")?;
    }
    handle.flush().context("Failed to flush stdout")?;

    Ok(ExitCode::SUCCESS)
}

fn fetch_spinner(input: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
    );
    bar.set_prefix("Fetching");
    bar.set_message(input.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Print a labelled message for `e` and return its exit code.
fn report_failure(e: &GlyphGridError) -> ExitCode {
    match e {
        GlyphGridError::NoTriples { .. } => {
            eprintln!("{} {e}", yellow("[warn]"));
        }
        GlyphGridError::GridTooLarge { samples, .. } => {
            eprintln!("{} {e}", yellow("[warn]"));
            for (i, sample) in samples.iter().enumerate() {
                eprintln!("  sample {}: {sample}", i + 1);
            }
        }
        e if e.is_input_error() => {
            eprintln!("{} failed to load input: {e}", red("[error]"));
        }
        e => {
            eprintln!("{} {e}", red("[error]"));
        }
    }
    ExitCode::from(e.exit_code())
}
