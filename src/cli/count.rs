use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::counting::pipeline::{self, CountConfig, RunSummary};
use crate::kmer::hashing::DEFAULT_HASH_SEED;

#[derive(Args)]
pub struct CountArgs {
    /// Database directory containing Subcontigs/ and excludedSubcontigs/
    #[arg(required = true)]
    pub db_directory: PathBuf,

    /// K-mer size
    #[arg(required = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub kmer_size: u32,

    /// Directory of subcontigs to score [default: <db_directory>/Subcontigs]
    #[arg(long)]
    pub subcontigs: Option<PathBuf>,

    /// Directory of excluded subcontigs [default: <db_directory>/excludedSubcontigs]
    #[arg(long)]
    pub excluded: Option<PathBuf>,

    /// Report path [default: <db_directory>/KmerContent.report]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed of the k-mer hash function
    #[arg(long, default_value_t = DEFAULT_HASH_SEED)]
    pub seed: u64,

    /// Use 32-bit hashes to halve memory use (less accurate on large inputs)
    #[arg(long)]
    pub compact: bool,
}

impl CountArgs {
    /// Resolve the run configuration, applying directory and output overrides
    #[must_use]
    pub fn to_config(&self) -> CountConfig {
        let mut config = CountConfig::from_db_dir(&self.db_directory, self.kmer_size as usize);
        if let Some(dir) = &self.subcontigs {
            config.subcontigs_dir.clone_from(dir);
        }
        if let Some(dir) = &self.excluded {
            config.excluded_dir.clone_from(dir);
        }
        if let Some(path) = &self.output {
            config.output.clone_from(path);
        }
        config.seed = self.seed;
        config.compact = self.compact;
        config
    }
}

/// Execute a counting run
///
/// # Errors
///
/// Returns an error if the input directories cannot be read, a subcontig is
/// malformed, or the report cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CountArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.to_config();

    if verbose {
        eprintln!("Subcontigs: {}", config.subcontigs_dir.display());
        eprintln!("Excluded subcontigs: {}", config.excluded_dir.display());
        eprintln!("Report: {}", config.output.display());
    }

    let summary = pipeline::run(&config)?;

    match format {
        OutputFormat::Text => print_text_summary(&summary),
        OutputFormat::Json => print_json_summary(&summary)?,
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_summary(summary: &RunSummary) {
    println!("Unique Hash Counts");
    println!("{}", "=".repeat(60));
    println!("  K-mer size: {}", summary.kmer_size);
    println!("  Hash width: {} bits", summary.hash_bits);
    println!("  Excluded subcontigs: {}", summary.excluded_subcontigs);
    println!("  Subcontigs: {}", summary.included_subcontigs);
    println!("  Distinct hashes: {}", summary.distinct_hashes);
    println!("  Unique hashes: {}", summary.unique_hashes);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Non-negative seconds
    let elapsed = summary.elapsed_secs as u64;
    println!(
        "  Elapsed: {} minutes and {} seconds",
        elapsed / 60,
        elapsed % 60
    );
    println!(
        "\n{} rows written to {}",
        summary.reported_subcontigs,
        summary.report.display()
    );
}

fn print_json_summary(summary: &RunSummary) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn print_tsv_summary(summary: &RunSummary) {
    println!(
        "kmer_size\thash_bits\texcluded_subcontigs\tincluded_subcontigs\treported_subcontigs\tdistinct_hashes\tunique_hashes\treport"
    );
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        summary.kmer_size,
        summary.hash_bits,
        summary.excluded_subcontigs,
        summary.included_subcontigs,
        summary.reported_subcontigs,
        summary.distinct_hashes,
        summary.unique_hashes,
        summary.report.display(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_to_config_defaults() {
        let cli = Cli::try_parse_from(["hashcounter", "db", "15"]).unwrap();
        let config = cli.args.to_config();
        assert_eq!(config, CountConfig::from_db_dir("db", 15));
    }

    #[test]
    fn test_to_config_overrides() {
        let cli = Cli::try_parse_from([
            "hashcounter",
            "db",
            "15",
            "--subcontigs",
            "other/subs",
            "--excluded",
            "other/excl",
            "--output",
            "out.tsv",
            "--seed",
            "7",
            "--compact",
        ])
        .unwrap();
        let config = cli.args.to_config();
        assert_eq!(config.subcontigs_dir, PathBuf::from("other/subs"));
        assert_eq!(config.excluded_dir, PathBuf::from("other/excl"));
        assert_eq!(config.output, PathBuf::from("out.tsv"));
        assert_eq!(config.seed, 7);
        assert!(config.compact);
        assert_eq!(config.kmer_size, 15);
    }
}
