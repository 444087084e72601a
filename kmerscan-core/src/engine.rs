//! High-level scan driver tying the loader to the scanner.

use std::path::Path;

use crate::config::ScanConfig;
use crate::results::{ScanResults, SequenceInfo};
use crate::scanner;
use crate::sequence::read_flat_sequence;
use crate::types::ScanError;

/// Runs enrichment scans against files or in-memory sequences.
///
/// # Examples
///
/// ```rust,no_run
/// use kmerscan_core::{EnrichmentScanner, config::ScanConfig};
///
/// let scanner = EnrichmentScanner::new(ScanConfig::default());
/// let results = scanner.analyze_fasta_file("genome.fasta")?;
///
/// println!("Sequence: {} bp", results.sequence_info.length);
/// if let Some(best) = &results.best {
///     println!("Best window at {} ({} x{})", best.offset, best.kmer, best.count);
/// }
/// # Ok::<(), kmerscan_core::ScanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnrichmentScanner {
    pub config: ScanConfig,
}

impl EnrichmentScanner {
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Load a FASTA file as one flat sequence and scan it.
    ///
    /// # Errors
    ///
    /// Propagates loader failures ([`ScanError::IoError`],
    /// [`ScanError::ParseError`]) and configuration rejections
    /// ([`ScanError::InvalidConfig`]).
    pub fn analyze_fasta_file<P: AsRef<Path>>(&self, path: P) -> Result<ScanResults, ScanError> {
        self.config.validate()?;
        let flat = read_flat_sequence(path)?;
        let (series, best) = scanner::scan(&flat.residues, &self.config);
        Ok(ScanResults {
            series,
            best,
            sequence_info: SequenceInfo {
                length: flat.residues.len(),
                header: flat.header,
                description: flat.description,
            },
        })
    }

    /// Scan an in-memory sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] for degenerate parameters.
    pub fn analyze_sequence(
        &self,
        sequence: &[u8],
        header: Option<String>,
    ) -> Result<ScanResults, ScanError> {
        self.config.validate()?;
        let (series, best) = scanner::scan(sequence, &self.config);
        Ok(ScanResults {
            series,
            best,
            sequence_info: SequenceInfo {
                length: sequence.len(),
                header: header.unwrap_or_default(),
                description: None,
            },
        })
    }
}

impl Default for EnrichmentScanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toy_config() -> ScanConfig {
        ScanConfig {
            kmer_length: 2,
            window_size: 4,
            step: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_analyze_fasta_file_not_found() {
        let scanner = EnrichmentScanner::default();
        let result = scanner.analyze_fasta_file("nonexistent_file.fa");
        assert!(matches!(result, Err(ScanError::IoError(_))));
    }

    #[test]
    fn test_analyze_fasta_file_end_to_end() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b">toy\nABAB\nABAB\n").unwrap();

        let scanner = EnrichmentScanner::new(toy_config());
        let results = scanner.analyze_fasta_file(file.path()).unwrap();

        assert_eq!(results.sequence_info.length, 8);
        assert_eq!(results.sequence_info.header, "toy");
        assert_eq!(results.series.len(), 3);
        let best = results.best.unwrap();
        assert_eq!((best.offset, best.kmer.as_str(), best.count), (0, "AB", 2));
    }

    #[test]
    fn test_analyze_sequence_rejects_degenerate_config() {
        let scanner = EnrichmentScanner::new(ScanConfig {
            step: 0,
            ..toy_config()
        });
        let result = scanner.analyze_sequence(b"ACGT", None);
        assert!(matches!(result, Err(ScanError::InvalidConfig(_))));
    }

    #[test]
    fn test_analyze_sequence_short_input_is_empty_not_error() {
        let scanner = EnrichmentScanner::default();
        let results = scanner.analyze_sequence(b"ACGT", None).unwrap();
        assert!(results.is_empty());
        assert!(results.best.is_none());
    }
}
