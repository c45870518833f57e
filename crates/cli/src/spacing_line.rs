//! spacing-line - Inspect baseline vs candidate spacing deltas for a
//! single visual line.
//!
//! Reads the combined spacing geometry written by extract-spacing,
//! resolves one baseline line by index or y position, matches it in the
//! candidate document, and prints per-word and per-gap deltas.

use clap::Parser;
use spacediff_core::inspect::{LineInspection, inspect_line};
use spacediff_core::layout::LineTarget;
use spacediff_core::model::SpacingReport;
use spacediff_core::{MatchParams, Result};
use std::path::PathBuf;

/// Inspect baseline vs candidate spacing deltas for a single line.
#[derive(Parser, Debug)]
#[command(name = "spacing-line")]
#[command(author, version, about, long_about = None)]
#[command(group(clap::ArgGroup::new("target").required(true).args(["line_index", "y"])))]
struct Args {
    /// Path to spacing.json (output of extract-spacing)
    #[arg(long)]
    spacing: PathBuf,

    /// 1-based index of the line (sorted by baseline Y)
    #[arg(long = "line-index")]
    line_index: Option<usize>,

    /// Exact baseline Y (points) to match
    #[arg(long)]
    y: Option<f64>,
}

fn run(args: &Args) -> Result<LineInspection> {
    let report = SpacingReport::load(&args.spacing)?;
    let target = match (args.line_index, args.y) {
        (Some(index), _) => LineTarget::Index(index),
        (None, Some(y)) => LineTarget::Y(y),
        (None, None) => unreachable!("clap enforces the target group"),
    };
    inspect_line(&report, target, &MatchParams::default())
}

fn print_inspection(inspection: &LineInspection) {
    println!(
        "Line y={} (word count {})",
        inspection.y, inspection.word_count
    );
    println!("{}", "-".repeat(80));

    println!("Word deltas (candidate x - baseline x):");
    for delta in &inspection.word_deltas {
        println!("{:<12} dx={:+.3}", delta.text, delta.dx);
    }

    if !inspection.gap_deltas.is_empty() {
        println!("\nGap deltas (candidate - baseline):");
        for (i, gap) in inspection.gap_deltas.iter().enumerate() {
            println!(
                "gap{:02}: base={:>8.3} cand={:>8.3} delta={:+.3} share={:+.3} prevWordWidth={:.3}",
                i + 1,
                gap.base,
                gap.cand,
                gap.delta,
                gap.share,
                gap.prev_width
            );
        }
    }

    println!("\nTotal extra gap width: {:+.3} pt", inspection.total_extra);
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(inspection) => print_inspection(&inspection),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
