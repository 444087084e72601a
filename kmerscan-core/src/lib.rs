//! # Kmerscan - Windowed K-mer Enrichment Scanner
//!
//! A library for locating locally over-represented k-mers in a genomic
//! sequence. The sequence is swept with a fixed-size sliding window; inside
//! each window every overlapping k-mer is counted exactly, and the count of
//! the most frequent k-mer becomes that window's enrichment value. The window
//! whose top k-mer count is the global maximum is reported as the most
//! enriched location.
//!
//! ## Overview
//!
//! - **Exact counting**: no sketches or probabilistic structures; every
//!   window is counted exhaustively and independently.
//! - **Deterministic results**: ties inside a window resolve to the leftmost
//!   first occurrence, and ties between windows resolve to the smallest start
//!   offset, regardless of how the scan is scheduled.
//! - **Parallel scan**: windows are independent and counted on a Rayon
//!   thread pool; the series is returned in genomic position order.
//!
//! ## Quick Start
//!
//! ```rust
//! use kmerscan_core::{EnrichmentScanner, config::ScanConfig};
//!
//! let config = ScanConfig {
//!     kmer_length: 2,
//!     window_size: 4,
//!     step: 2,
//!     ..Default::default()
//! };
//! let scanner = EnrichmentScanner::new(config);
//! let results = scanner.analyze_sequence(b"ABABABAB", Some("toy".to_string()))?;
//!
//! let best = results.best.as_ref().unwrap();
//! assert_eq!((best.offset, best.kmer.as_str(), best.count), (0, "AB", 2));
//! # Ok::<(), kmerscan_core::ScanError>(())
//! ```
//!
//! ## Architecture
//!
//! The crate is split along the pipeline: [`sequence`] loads a FASTA file
//! into one flat residue buffer, [`scanner`] performs the pure windowed
//! count, and [`output`] renders the textual report and the enrichment
//! line chart. [`EnrichmentScanner`] ties the first two together behind a
//! validated [`config::ScanConfig`].

pub mod config;
pub mod engine;
pub mod output;
pub mod results;
pub mod scanner;
pub mod sequence;
pub mod types;

pub use config::ScanConfig;
pub use engine::EnrichmentScanner;
pub use results::{BestResult, ScanResults, SequenceInfo, WindowResult};
pub use types::ScanError;
