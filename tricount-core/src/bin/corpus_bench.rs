//! Corpus Benchmarking Tool
//!
//! Measures the trigram pipeline on a large text file (a book, a Wikipedia
//! dump) to get realistic throughput numbers.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenize**: splitting the raw bytes into tokens
//! 2. **Ingest**: tokenize, clean and count every trigram into a fresh table
//! 3. **Select**: bounded top-k over the table built by the ingest stage
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/corpus_bench /path/to/corpus.txt
//!
//! # Select a different number of results (default 100)
//! ./target/release/corpus_bench /path/to/corpus.txt 1000
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Ingest ===
//! --------------------------------
//! Mode        : Ingest
//! Elapsed     : 0.912 s
//! Throughput  : 0.107 GiB/s
//! Words       : 17_005_207
//! Words/sec   : 18_645_183
//! --------------------------------
//! ```
//!
//! Build with `--release`; debug numbers are meaningless.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use tricount_core::analyzer::Tokenizer;
use tricount_core::{select_top_k, Accumulator, FrequencyTable};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;
const DEFAULT_TOP_K: usize = 100;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [top_k]");
        std::process::exit(1);
    }

    let path = &args[1];
    let top_k = args
        .get(2)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_TOP_K);

    println!("Loading file...");
    let input = fs::read(path)?;

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Top k:     {}\n", top_k);

    bench_tokenize(&input);
    let table = bench_ingest(&input);
    bench_select(&table, top_k);

    Ok(())
}

fn bench_tokenize(input: &[u8]) {
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(input, |_t| sink += 1);
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(input, |_t| local += 1);
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", input.len(), elapsed, "Tokens", tokens);
}

fn bench_ingest(input: &[u8]) -> FrequencyTable {
    println!("=== Ingest ===");

    let run = || -> (FrequencyTable, u64) {
        let mut table = FrequencyTable::new();
        let mut acc = Accumulator::new();
        if let Err(e) = acc.ingest_reader(input, &mut table) {
            eprintln!("in-memory read failed: {e}");
            std::process::exit(1);
        }
        let words = acc.words_seen();
        (table, words)
    };

    warmup(|| {
        std::hint::black_box(run());
    });

    let mut last = (FrequencyTable::new(), 0u64);
    let elapsed = measure(|| {
        last = run();
    });

    let (table, words) = last;
    print_perf("Ingest", input.len(), elapsed, "Words", words);
    println!("{}\n", table.stats(words));
    table
}

fn bench_select(table: &FrequencyTable, top_k: usize) {
    println!("=== Select (k = {top_k}) ===");

    warmup(|| {
        std::hint::black_box(select_top_k(table, top_k));
    });

    let elapsed = measure(|| {
        std::hint::black_box(select_top_k(table, top_k));
    });

    println!("--------------------------------");
    println!("Mode        : Select");
    println!("Elapsed     : {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    println!("Entries     : {}", fmt_count(table.len() as u64));
    println!("--------------------------------\n");
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, unit: &str, n: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if n > 0 {
        println!("{:<12}: {}", unit, fmt_count(n));
        println!("{:<12}: {}", format!("{unit}/sec"), fmt_count((n as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
