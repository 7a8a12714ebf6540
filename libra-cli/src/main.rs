//! Libra CLI - Command-line interface for book record conversion

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "libra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a book collection to another format
    Convert {
        /// Input file path (.jsonl, .json, .xml, .csv, .txt)
        input: String,

        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Output format (jsonl, xml, csv); defaults to the output extension
        #[arg(short, long)]
        format: Option<String>,

        /// Write XML without indentation
        #[arg(long)]
        compact: bool,
    },

    /// Display the books in a collection
    Info {
        /// Input file path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a book collection file
    Validate {
        /// Input file path
        input: String,

        /// Fail when any record had to be skipped
        #[arg(long)]
        strict: bool,
    },

    /// Copy a cover image unchanged
    Cover {
        /// Source image path
        input: String,

        /// Destination path
        #[arg(short, long)]
        output: String,
    },

    /// Write the sample collection
    Sample {
        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Output format (jsonl, xml, csv); defaults to the output extension
        #[arg(short, long)]
        format: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let filter = if cli.verbose {
        "libra_cli=debug,libra_core=debug"
    } else {
        "libra_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            compact,
        } => commands::convert(&input, &output, format.as_deref(), compact),

        Commands::Info { input, json } => commands::info(&input, json),

        Commands::Validate { input, strict } => commands::validate(&input, strict),

        Commands::Cover { input, output } => commands::cover(&input, &output),

        Commands::Sample { output, format } => commands::sample(&output, format.as_deref()),
    }
}
