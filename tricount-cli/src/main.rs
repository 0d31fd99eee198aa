use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};
use tricount_core::{Analysis, Source};
use tricount_types::{AnalysisConfig, TricountResult, DEFAULT_TOP_K};

/// Report the most frequent three-word sequences in text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input files, read in order as one stream. Reads stdin when empty; `-` also means stdin.
    files: Vec<PathBuf>,

    /// Number of trigrams to report. Zero or negative reports nothing.
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_K, allow_negative_numbers = true)]
    top: i64,

    /// Log progress to stderr (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn sources(&self) -> Vec<Source> {
        if self.files.is_empty() {
            vec![Source::Stdin]
        } else {
            self.files.iter().map(Source::from_arg).collect()
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> TricountResult<()> {
    let mut analysis = Analysis::new(AnalysisConfig::with_top_k(cli.top));

    for source in cli.sources() {
        info!("📂 Reading {}", source.name());
        analysis.ingest_source(&source)?;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    analysis.write_report(&mut out)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}
