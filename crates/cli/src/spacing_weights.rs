//! spacing-weights - Collect gap spacing deltas per paragraph alignment.
//!
//! Joins the spacing geometry with an alignment map, filters lines by
//! their paragraph's declared alignment, and prints ranked and
//! per-alignment spacing-delta statistics.

use clap::Parser;
use spacediff_core::analysis::{WeightReport, collect_weights, parse_alignment_filter};
use spacediff_core::model::{SpacingReport, load_alignment_sample};
use spacediff_core::{MatchParams, Result};
use std::path::PathBuf;

/// Collect gap spacing deltas per alignment.
#[derive(Parser, Debug)]
#[command(name = "spacing-weights")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// spacing.json from extract-spacing
    #[arg(long)]
    spacing: PathBuf,

    /// JSON produced by the alignment-map script
    #[arg(long = "alignment-map")]
    alignment_map: PathBuf,

    /// Sample name key inside the alignment-map JSON
    #[arg(long)]
    sample: String,

    /// Comma-separated list of paragraph alignments to include
    #[arg(long, default_value = "both,distribute")]
    alignments: String,
}

fn run(args: &Args) -> Result<WeightReport> {
    let report = SpacingReport::load(&args.spacing)?;
    let entries = load_alignment_sample(&args.alignment_map, &args.sample)?;
    let filter = parse_alignment_filter(&args.alignments);
    collect_weights(&report, &entries, &filter, &MatchParams::default())
}

fn print_report(report: &WeightReport) {
    println!("Entries collected: {}", report.records.len());
    println!(
        "Sum delta: {:+.3} pt, sum |delta|: {:.3} pt",
        report.sum_delta, report.sum_abs_delta
    );

    for record in report.top(10) {
        println!(
            "line {:02} align={:<10} word={:<12} width={:.2} delta={:+.3}",
            record.line_index, record.alignment, record.word, record.width, record.delta
        );
    }

    println!("\nPer-alignment summary:");
    for summary in &report.summaries {
        println!(
            "{:<10} count={:3} sum_delta={:+.3} sum|delta|={:.3} delta/width={:+.4}",
            summary.alignment,
            summary.count,
            summary.sum_delta,
            summary.sum_abs_delta,
            summary.delta_per_width
        );
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(report) if report.is_empty() => println!("No entries collected."),
        Ok(report) => print_report(&report),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
