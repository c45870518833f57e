//! extract-spacing - Run the external geometry extractor over a baseline
//! and a candidate PDF and write the combined spacing geometry.
//!
//! The extractor is an opaque Java tool; each invocation writes one
//! document's `{ pages: [...] }` JSON to a temporary file. The two
//! outputs are wrapped as `{ base, candidate }` and saved for the
//! analysis tools. Temporary files are removed whether or not
//! extraction succeeds.

use anyhow::Context;
use clap::Parser;
use spacediff_core::SpacingError;
use spacediff_core::model::{GeometryDocument, SpacingReport};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

/// Extract geometry for baseline and candidate PDFs.
#[derive(Parser, Debug)]
#[command(name = "extract-spacing")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Baseline PDF path
    #[arg(long)]
    base: PathBuf,

    /// Candidate PDF path
    #[arg(long)]
    candidate: PathBuf,

    /// Page selector passed to the extractor
    #[arg(long, default_value = "1")]
    pages: String,

    /// Directory holding the extractor and pdfbox jars
    #[arg(long = "pdfbox-dir", default_value = "PdfVisualDiff/tools/pdfbox")]
    pdfbox_dir: PathBuf,

    /// Path the combined report is written to
    #[arg(long, default_value = "out/diff-spacing.json")]
    output: PathBuf,
}

fn classpath(pdfbox_dir: &Path) -> anyhow::Result<String> {
    let jars = [
        pdfbox_dir.join("geometry-extractor.jar"),
        pdfbox_dir.join("pdfbox-app-3.0.2.jar"),
    ];
    let joined = std::env::join_paths(jars).context("building extractor classpath")?;
    Ok(joined.to_string_lossy().into_owned())
}

/// Runs the extractor for one PDF and parses its JSON output.
fn extract(pdf: &Path, pages: &str, classpath: &str) -> anyhow::Result<GeometryDocument> {
    let tmp = NamedTempFile::new()?;
    let status = Command::new("java")
        .arg("-cp")
        .arg(classpath)
        .arg("GeometryExtractor")
        .arg("--pdf")
        .arg(pdf)
        .arg("--pages")
        .arg(pages)
        .arg("--output")
        .arg(tmp.path())
        .status()
        .context("failed to launch java")?;
    if !status.success() {
        return Err(SpacingError::ExtractorFailed { status }.into());
    }
    let data = std::fs::read(tmp.path())?;
    Ok(serde_json::from_slice(&data)?)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let classpath = classpath(&args.pdfbox_dir)?;
    let base = extract(&args.base, &args.pages, &classpath)
        .with_context(|| format!("extracting {}", args.base.display()))?;
    let candidate = extract(&args.candidate, &args.pages, &classpath)
        .with_context(|| format!("extracting {}", args.candidate.display()))?;

    let report = SpacingReport { base, candidate };
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(&args.output, json)?;
    println!("Report saved to {}", args.output.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
