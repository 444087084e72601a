use crate::types::ScanError;
use bio::io::fasta;
use std::fs::File;
use std::path::Path;

/// A FASTA file flattened into a single residue buffer.
///
/// Header lines are stripped and every record's residues are concatenated in
/// file order, with no embedded line breaks. The identifier and description
/// of the first record are kept for reporting.
#[derive(Debug, Clone)]
pub struct FlatSequence {
    pub residues: Vec<u8>,
    pub header: String,
    pub description: Option<String>,
}

/// Read a FASTA file into one flat sequence using rust-bio.
///
/// The residue alphabet is not validated; symbols pass through opaquely.
///
/// # Errors
///
/// [`ScanError::IoError`] if the file cannot be opened and
/// [`ScanError::ParseError`] if the FASTA framing is malformed.
pub fn read_flat_sequence<P: AsRef<Path>>(path: P) -> Result<FlatSequence, ScanError> {
    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);

    let mut residues = Vec::new();
    let mut header = String::new();
    let mut description = None;

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ScanError::ParseError(e.to_string()))?;
        if index == 0 {
            header = record.id().to_string();
            description = record.desc().map(String::from);
        }
        residues.extend_from_slice(record.seq());
    }

    Ok(FlatSequence {
        residues,
        header,
        description,
    })
}
