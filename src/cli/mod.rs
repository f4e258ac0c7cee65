//! Command-line interface for gbk-compare.
//!
//! ## Usage
//!
//! ```text
//! # Compare two annotated assemblies
//! gbk-compare old_assembly.gbk new_assembly.gbk
//!
//! # Stricter matching, narrower skip window
//! gbk-compare old.gbk new.gbk --match-identity-threshold 0.9 --allowed-skipped-genes 3
//!
//! # JSON output for scripting
//! gbk-compare old.gbk new.gbk --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod compare;

#[derive(Parser)]
#[command(name = "gbk-compare")]
#[command(version)]
#[command(about = "Compare CDS annotations between two versions of an annotated genome")]
#[command(
    long_about = "gbk-compare reads the CDS features of two GenBank-annotated assemblies and \
reports, feature by feature, whether each one persisted, was gained, was lost, or changed, \
using pairwise sequence identity rather than coordinates alone.\n\nFeature lists are walked \
in order; bounded local insertions and deletions on either side are tolerated up to the \
skip budget. Rearrangements are not handled."
)]
pub struct Cli {
    /// First (old) annotated genome in GenBank format
    pub old: PathBuf,

    /// Second (new) annotated genome in GenBank format
    pub new: PathBuf,

    /// Two genes must exceed this identity to be considered the same
    #[arg(long, default_value_t = 0.7, value_parser = parse_threshold)]
    pub match_identity_threshold: f64,

    /// How many missing genes are tolerated when aligning the annotations
    #[arg(long, default_value_t = 10)]
    pub allowed_skipped_genes: usize,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(format!("threshold must be in (0, 1], got {value}"))
    }
}
