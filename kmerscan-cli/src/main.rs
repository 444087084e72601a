//! # Kmerscan CLI - K-mer Enrichment Scanner
//!
//! Command-line front end for the windowed k-mer enrichment scan.
//!
//! ## Usage
//!
//! ```bash
//! # Default scan (k=8, 5 kb windows, 500 bp stride)
//! kmerscan genome.fasta
//!
//! # Custom geometry and chart location
//! kmerscan genome.fasta -k 6 -w 1000 -s 100 -o peaks.png
//! ```
//!
//! ## Options
//!
//! - `<FASTA>`: input sequence file (headers stripped, records concatenated)
//! - `-k, --kmer-length <K>`: substring length (default: 8)
//! - `-w, --window <BP>`: scan window length (default: 5000)
//! - `-s, --step <BP>`: scan stride (default: 500)
//! - `-o, --output <FILE>`: chart image file (default: enrichment.png)
//! - `-q, --quiet`: suppress progress messages

use clap::{Arg, ArgAction, ArgMatches, Command};
use kmerscan_core::config::ScanConfig;
use kmerscan_core::output::{write_enrichment_chart, write_report};
use kmerscan_core::EnrichmentScanner;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("kmerscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sliding-window k-mer enrichment scanner")
        .arg(
            Arg::new("input")
                .value_name("FASTA")
                .help("Input FASTA file"),
        )
        .arg(
            Arg::new("kmer-length")
                .short('k')
                .long("kmer-length")
                .value_name("K")
                .help("Substring length")
                .default_value("8"),
        )
        .arg(
            Arg::new("window")
                .short('w')
                .long("window")
                .value_name("BP")
                .help("Scan window length")
                .default_value("5000"),
        )
        .arg(
            Arg::new("step")
                .short('s')
                .long("step")
                .value_name("BP")
                .help("Scan stride")
                .default_value("500"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Chart image file")
                .default_value("enrichment.png"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .get_matches();

    // Usage error precedes any computation.
    let Some(input) = matches.get_one::<String>("input") else {
        println!("Usage: kmerscan <genome.fasta> [-k K] [-w WINDOW] [-s STEP] [-o FILE]");
        std::process::exit(1);
    };

    let config = ScanConfig {
        kmer_length: parse_usize(&matches, "kmer-length")?,
        window_size: parse_usize(&matches, "window")?,
        step: parse_usize(&matches, "step")?,
        quiet: matches.get_flag("quiet"),
    };
    let chart_path = matches.get_one::<String>("output").expect("has default");

    let scanner = EnrichmentScanner::new(config);
    let results = scanner.analyze_fasta_file(input)?;

    if !scanner.config.quiet {
        eprintln!("Scan complete: {} windows examined.", results.series.len());
    }

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &results)?;

    if write_enrichment_chart(&results, scanner.config.kmer_length, Path::new(chart_path))? {
        writeln!(stdout, "Plot saved to {chart_path}")?;
    } else if !scanner.config.quiet {
        eprintln!("Chart skipped: empty enrichment series.");
    }

    Ok(())
}

fn parse_usize(matches: &ArgMatches, name: &str) -> Result<usize, Box<dyn std::error::Error>> {
    let raw = matches.get_one::<String>(name).expect("has default");
    raw.parse()
        .map_err(|_| format!("Invalid value for --{name}: {raw}").into())
}
