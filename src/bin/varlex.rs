//! varlex CLI
//!
//! Command-line interface for classifying free-text variant descriptors.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use varlex::cli::{format_classifications, format_tokens, read_descriptors, OutputFormat};
use varlex::summary::CategorySummary;
use varlex::{Classifier, GeneSymbols};

#[derive(Parser)]
#[command(name = "varlex")]
#[command(author, version, about = "Classify free-text cancer variant descriptors")]
#[command(
    long_about = "Classify free-text variant descriptors from cancer knowledgebases
into a fixed set of semantic categories.

Examples:
  varlex classify 'V600E' 'EGFR FUSION' --genes symbols.tsv
  varlex classify -i descriptors.txt --genes symbols.tsv --format json
  echo 'EXON 19 DELETION' | varlex classify
  varlex tokenize 'BRAF V600E' --genes symbols.tsv
  varlex summarize -i civic.txt --genes symbols.tsv --source civic"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify descriptors given as arguments, from a file, or on stdin
    Classify {
        /// Descriptors to classify (stdin is read when empty and no -i given)
        descriptors: Vec<String>,

        /// Read descriptors from a file, one per line (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Gene-symbol list (tab-delimited; `symbol` column or first column)
        #[arg(long)]
        genes: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Dump the token stream for one descriptor
    Tokenize {
        /// Descriptor to tokenize
        descriptor: String,

        /// Gene-symbol list (tab-delimited)
        #[arg(long)]
        genes: Option<PathBuf>,
    },

    /// Classify descriptors and print per-category counts and proportions
    Summarize {
        /// Read descriptors from a file, one per line (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Gene-symbol list (tab-delimited)
        #[arg(long)]
        genes: Option<PathBuf>,

        /// Label for the descriptor source, used in the report
        #[arg(long, default_value = "input")]
        source: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> varlex::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            descriptors,
            input,
            genes,
            format,
        } => {
            let classifier = build_classifier(genes.as_deref())?;
            let descriptors = gather_descriptors(descriptors, input.as_deref())?;
            let results: Vec<_> = descriptors
                .iter()
                .map(|d| classifier.classify(d))
                .collect();
            print!("{}", format_classifications(&results, format)?);
        }

        Commands::Tokenize { descriptor, genes } => {
            let classifier = build_classifier(genes.as_deref())?;
            let tokens = classifier.library().tokenize(&descriptor);
            print!("{}", format_tokens(&tokens));
        }

        Commands::Summarize {
            input,
            genes,
            source,
            format,
        } => {
            let classifier = build_classifier(genes.as_deref())?;
            let descriptors = gather_descriptors(Vec::new(), input.as_deref())?;
            let groups = classifier.classify_many(&descriptors);
            let summary = CategorySummary::from_groups(source, &groups);
            match format {
                OutputFormat::Text => print!("{}", summary),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&summary)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    println!("{}", json);
                }
            }
        }
    }

    Ok(())
}

/// Build the classifier, with or without a gene-symbol list.
///
/// Without a list the GENE pattern matches nothing; classification is still
/// total, but fusion descriptors will not resolve their gene symbols.
fn build_classifier(genes: Option<&std::path::Path>) -> varlex::Result<Classifier> {
    let symbols = match genes {
        Some(path) => GeneSymbols::from_tsv_path(path)?,
        None => GeneSymbols::empty(),
    };
    Classifier::new(&symbols)
}

/// Collect descriptors from positional arguments, a file, or stdin.
fn gather_descriptors(
    args: Vec<String>,
    input: Option<&std::path::Path>,
) -> varlex::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    match input {
        Some(path) if path.as_os_str() != "-" => {
            read_descriptors(BufReader::new(File::open(path)?))
        }
        _ => read_descriptors(io::stdin().lock()),
    }
}
