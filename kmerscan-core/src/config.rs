use crate::types::ScanError;

/// Configuration settings for a k-mer enrichment scan.
///
/// The defaults reproduce the reference analysis parameters: 8-mers counted
/// in 5 kb windows advanced by 500 bp.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use kmerscan_core::config::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.kmer_length, 8);
/// ```
///
/// ## Custom window geometry
///
/// ```rust
/// use kmerscan_core::config::ScanConfig;
///
/// let config = ScanConfig {
///     kmer_length: 6,
///     window_size: 1_000,
///     step: 100,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Length of the counted substrings (k).
    ///
    /// **Default**: `8`
    pub kmer_length: usize,

    /// Length of each scan window in residues.
    ///
    /// A window shorter than `kmer_length` contains no full k-mer and
    /// contributes nothing to the series; that is a policy, not an error.
    ///
    /// **Default**: `5000`
    pub window_size: usize,

    /// Stride between consecutive window start offsets.
    ///
    /// **Default**: `500`
    pub step: usize,

    /// Suppress informational messages on stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            kmer_length: 8,
            window_size: 5000,
            step: 500,
            quiet: false,
        }
    }
}

impl ScanConfig {
    /// Rejects degenerate parameter sets instead of silently fixing them.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] if `kmer_length`, `window_size`,
    /// or `step` is zero.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.kmer_length == 0 {
            return Err(ScanError::InvalidConfig(
                "kmer_length must be at least 1".to_string(),
            ));
        }
        if self.window_size == 0 {
            return Err(ScanError::InvalidConfig(
                "window_size must be at least 1".to_string(),
            ));
        }
        if self.step == 0 {
            return Err(ScanError::InvalidConfig(
                "step must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_parameters() {
        let config = ScanConfig::default();
        assert_eq!(config.kmer_length, 8);
        assert_eq!(config.window_size, 5000);
        assert_eq!(config.step, 500);
        assert!(!config.quiet);
    }

    #[test]
    fn validate_accepts_positive_parameters() {
        assert!(ScanConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_parameters() {
        for broken in [
            ScanConfig {
                kmer_length: 0,
                ..Default::default()
            },
            ScanConfig {
                window_size: 0,
                ..Default::default()
            },
            ScanConfig {
                step: 0,
                ..Default::default()
            },
        ] {
            match broken.validate() {
                Err(ScanError::InvalidConfig(_)) => {}
                other => panic!("Expected InvalidConfig, got {other:?}"),
            }
        }
    }

    #[test]
    fn window_shorter_than_k_is_valid() {
        // Yields an empty series downstream, but is not a config error.
        let config = ScanConfig {
            kmer_length: 10,
            window_size: 4,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
