//! Reporting for enrichment scan results.
//!
//! Two consumers of a finished [`ScanResults`]: a plain-text summary of the
//! best location for the terminal, and a line chart of the enrichment series
//! rendered to an image file.
//!
//! ## Examples
//!
//! ```rust
//! use kmerscan_core::{EnrichmentScanner, config::ScanConfig};
//! use kmerscan_core::output::write_report;
//!
//! let config = ScanConfig { kmer_length: 2, window_size: 4, step: 2, ..Default::default() };
//! let results = EnrichmentScanner::new(config).analyze_sequence(b"ABABABAB", None)?;
//!
//! let mut out = Vec::new();
//! write_report(&mut out, &results)?;
//! # Ok::<(), kmerscan_core::ScanError>(())
//! ```

use std::io::Write;

use crate::results::ScanResults;
use crate::types::ScanError;

mod chart;

pub use chart::write_enrichment_chart;

const SEPARATOR_WIDTH: usize = 30;

/// Writes the textual scan summary.
///
/// Prints the sequence length followed by a separator-framed block naming
/// the most enriched location, its k-mer, and the count. An empty series
/// renders a "no enrichment data" block instead of failing.
///
/// # Errors
///
/// Returns [`ScanError::IoError`] if writing fails.
pub fn write_report<W: Write>(writer: &mut W, results: &ScanResults) -> Result<(), ScanError> {
    writeln!(
        writer,
        "Processing sequence of length: {} bp",
        results.sequence_info.length
    )?;
    writeln!(writer, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    match &results.best {
        Some(best) => {
            writeln!(writer, "MOST ENRICHED LOCATION FOUND")?;
            writeln!(writer, "Location (start): {} bp", best.offset)?;
            writeln!(writer, "K-mer sequence:   {}", best.kmer)?;
            writeln!(writer, "Occurrence count: {}", best.count)?;
        }
        None => {
            writeln!(
                writer,
                "No enrichment data: no full window fits the sequence"
            )?;
        }
    }
    writeln!(writer, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{BestResult, SequenceInfo, WindowResult};

    fn results_with_best() -> ScanResults {
        ScanResults {
            series: vec![
                WindowResult { offset: 0, count: 3 },
                WindowResult { offset: 500, count: 7 },
            ],
            best: Some(BestResult {
                offset: 500,
                kmer: "ACGTACGT".to_string(),
                count: 7,
            }),
            sequence_info: SequenceInfo {
                length: 5500,
                header: "chr1".to_string(),
                description: None,
            },
        }
    }

    #[test]
    fn report_names_best_location_kmer_and_count() {
        let mut out = Vec::new();
        write_report(&mut out, &results_with_best()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Processing sequence of length: 5500 bp"));
        assert!(text.contains("MOST ENRICHED LOCATION FOUND"));
        assert!(text.contains("Location (start): 500 bp"));
        assert!(text.contains("K-mer sequence:   ACGTACGT"));
        assert!(text.contains("Occurrence count: 7"));
        // Framed by separator lines.
        assert_eq!(
            text.matches(&"-".repeat(SEPARATOR_WIDTH)).count(),
            2
        );
    }

    #[test]
    fn report_handles_empty_series() {
        let results = ScanResults {
            series: Vec::new(),
            best: None,
            sequence_info: SequenceInfo {
                length: 120,
                header: String::new(),
                description: None,
            },
        };
        let mut out = Vec::new();
        write_report(&mut out, &results).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No enrichment data"));
    }
}
