//! Trafgen CLI - Synthetic Network Traffic Sample Generation
//!
//! Data traffic in computer networks arrives at random times, so realistic
//! test traffic needs reproducible randomised inputs. This binary drives
//! the generation kernel and its sample sinks.
//!
//! # Commands
//!
//! - `trafgen generate` - Uniform sample via the linear congruential method
//! - `trafgen variates` - Exponential variates via the inverse transform
//! - `trafgen reference` - Library-drawn exponential sample for cross-checking
//! - `trafgen demo` - The traffic study's full scenario sweep

use clap::{Parser, Subcommand};
use service_cli::{commands, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use traffic_core::lcg::LcgParams;

/// Synthetic network-traffic sample generator CLI
#[derive(Parser)]
#[command(name = "trafgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory for generated files
    #[arg(short, long, global = true, default_value = "./out")]
    output_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a uniform sample with the linear congruential method
    Generate {
        /// Number of values to generate
        #[arg(short = 'n', long, default_value = "1024")]
        count: usize,

        /// Initial state X0
        #[arg(short, long, default_value = "7")]
        seed: u64,

        /// Additive constant c
        #[arg(long, default_value = "0")]
        increment: u64,

        /// Multiplier a
        #[arg(long, default_value = "11")]
        multiplier: u64,

        /// Modulus m
        #[arg(long, default_value = "1024")]
        modulus: u64,

        /// Number of histogram bins
        #[arg(short, long, default_value = "30")]
        bins: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Generate exponential variates through the inverse-transform pipeline
    Variates {
        /// Number of values to generate
        #[arg(short = 'n', long, default_value = "1024")]
        count: usize,

        /// Initial state X0
        #[arg(short, long, default_value = "7")]
        seed: u64,

        /// Additive constant c
        #[arg(long, default_value = "0")]
        increment: u64,

        /// Multiplier a
        #[arg(long, default_value = "11")]
        multiplier: u64,

        /// Modulus m
        #[arg(long, default_value = "1024")]
        modulus: u64,

        /// Rate parameter of the exponential distribution
        #[arg(short, long, default_value = "3.0")]
        lambda: f64,

        /// Number of histogram bins
        #[arg(short, long, default_value = "30")]
        bins: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Draw an exponential sample from the library sampler for cross-checking
    Reference {
        /// Number of values to draw
        #[arg(short = 'n', long, default_value = "102400")]
        count: usize,

        /// Rate parameter of the exponential distribution
        #[arg(short, long, default_value = "3.0")]
        lambda: f64,

        /// PRNG seed
        #[arg(short, long, default_value = "5")]
        seed: u64,

        /// Number of histogram bins
        #[arg(short, long, default_value = "30")]
        bins: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Run the full scenario sweep from the traffic study
    Demo {
        /// Number of histogram bins
        #[arg(short, long, default_value = "30")]
        bins: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate {
            count,
            seed,
            increment,
            multiplier,
            modulus,
            bins,
            format,
        } => {
            let params = LcgParams::new(seed, increment, multiplier, modulus);
            commands::generate::run(count, &params, bins, &format, &cli.output_dir)
        }
        Commands::Variates {
            count,
            seed,
            increment,
            multiplier,
            modulus,
            lambda,
            bins,
            format,
        } => {
            let params = LcgParams::new(seed, increment, multiplier, modulus);
            commands::variates::run(count, &params, lambda, bins, &format, &cli.output_dir)
        }
        Commands::Reference {
            count,
            lambda,
            seed,
            bins,
            format,
        } => commands::reference::run(count, lambda, seed, bins, &format, &cli.output_dir),
        Commands::Demo { bins, format } => commands::demo::run(bins, &format, &cli.output_dir),
    }
}
