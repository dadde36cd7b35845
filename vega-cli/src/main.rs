//! Vega Lens CLI
//!
//! Terminal front end for the spectral risk index: generates synthetic
//! ordered/chaotic signal pairs and scores recorded sample sequences.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use vega_core::{RiskAssessment, RiskLens, DEFAULT_SAMPLE_RATE};
use vega_sim::SignalGenerator;

#[derive(Parser)]
#[command(name = "vega-lens")]
#[command(author, version, about = "Vega Lens: spectral risk index for biosignals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an ordered/chaotic signal pair and score both
    Demo {
        /// Signal duration in seconds
        #[arg(short, long, default_value = "10.0")]
        duration: f64,

        /// Sampling rate in Hz
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_RATE)]
        fs: f64,

        /// RNG seed for reproducible signals
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a recorded signal (whitespace/comma-separated samples)
    Score {
        /// Input file of samples; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Sampling rate in Hz
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_RATE)]
        fs: f64,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match cli.command {
        Commands::Demo {
            duration,
            fs,
            seed,
            json,
        } => run_demo(duration, fs, seed, json),
        Commands::Score { input, fs, json } => run_score(input, fs, json),
    }
}

fn run_demo(duration: f64, fs: f64, seed: Option<u64>, json: bool) -> Result<()> {
    let mut generator = match seed {
        Some(seed) => {
            info!(seed, "using seeded generator");
            SignalGenerator::seeded(seed)
        }
        None => SignalGenerator::new(),
    };

    let pair = generator
        .generate(duration, fs)
        .context("signal generation failed")?;
    debug!(samples = pair.ordered.len(), "generated signal pair");

    let lens = RiskLens::new(fs);
    let ordered = lens.score(&pair.ordered).context("scoring ordered signal")?;
    let chaotic = lens.score(&pair.chaotic).context("scoring chaotic signal")?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "ordered": ordered, "chaotic": chaotic })
        );
        return Ok(());
    }

    println!("Vega Lens demo ({duration} s at {fs} Hz)\n");
    print_assessment("Ordered (healthy state)", &ordered);
    print_assessment("Chaotic (crisis state)", &chaotic);
    Ok(())
}

fn run_score(input: Option<PathBuf>, fs: f64, json: bool) -> Result<()> {
    let raw = match &input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading samples from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading samples from stdin")?;
            buf
        }
    };

    let signal = parse_samples(&raw)?;
    info!(samples = signal.len(), fs, "scoring signal");

    let lens = RiskLens::new(fs);
    let result = lens.score(&signal).context("scoring failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_assessment("Signal", &result);
    }
    Ok(())
}

/// Parse whitespace- or comma-separated real samples.
fn parse_samples(raw: &str) -> Result<Vec<f64>> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("invalid sample value: {token:?}"))
        })
        .collect()
}

fn print_assessment(label: &str, result: &RiskAssessment) {
    println!("{label}");
    println!("  risk score:         {:>8.1} / 100", result.score);
    println!("  excitation energy:  {:>12.4}", result.excitation_energy);
    println!("  inhibition energy:  {:>12.4}", result.inhibition_energy);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_samples_mixed_separators() {
        let parsed = parse_samples("1.0, 2.5\n-3e-2\t4").unwrap();
        assert_eq!(parsed, vec![1.0, 2.5, -0.03, 4.0]);
    }

    #[test]
    fn test_parse_samples_rejects_garbage() {
        assert!(parse_samples("1.0 two 3.0").is_err());
    }

    #[test]
    fn test_parse_samples_empty_input() {
        assert!(parse_samples("  \n ").unwrap().is_empty());
    }
}
