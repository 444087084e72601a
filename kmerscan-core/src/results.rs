/// Enrichment value of a single scan window.
///
/// One is produced per full window, in ascending offset order; the list of
/// all of them is the enrichment series used for plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResult {
    /// Start offset of the window within the flat sequence.
    pub offset: usize,
    /// Occurrence count of the most frequent k-mer inside the window.
    pub count: u32,
}

/// The globally most enriched window.
///
/// Ties on count resolve to the smallest start offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestResult {
    /// Start offset of the winning window.
    pub offset: usize,
    /// The winning k-mer itself.
    pub kmer: String,
    /// Its occurrence count inside that window.
    pub count: u32,
}

/// Metadata about the scanned sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceInfo {
    /// Length of the flat sequence in residues.
    pub length: usize,
    /// Identifier from the first FASTA header, if any.
    pub header: String,
    /// Description text following the identifier, if any.
    pub description: Option<String>,
}

/// Complete output of one enrichment scan.
///
/// # Examples
///
/// ```rust
/// use kmerscan_core::{EnrichmentScanner, config::ScanConfig};
///
/// let config = ScanConfig { kmer_length: 1, window_size: 5, step: 5, ..Default::default() };
/// let results = EnrichmentScanner::new(config).analyze_sequence(b"AAAAAAAAAA", None)?;
///
/// assert_eq!(results.series.len(), 2);
/// assert_eq!(results.best.unwrap().count, 5);
/// # Ok::<(), kmerscan_core::ScanError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResults {
    /// Per-window maxima in genomic position order.
    pub series: Vec<WindowResult>,
    /// Globally best window, absent when no full window fits the sequence.
    pub best: Option<BestResult>,
    /// Metadata about the analyzed sequence.
    pub sequence_info: SequenceInfo,
}

impl ScanResults {
    /// True when no full window fit the input sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
