//! Exact sliding-window k-mer enrichment scan.
//!
//! Windows are generated left to right with a constant stride; the scan stops
//! once a full window no longer fits. Each window is counted independently
//! with its own frequency map, so the windows can be processed in parallel
//! without any cross-window state. Determinism is preserved by collecting the
//! series back into offset order and selecting the global best by
//! (count descending, offset ascending) rather than by arrival order.

use std::cmp::Reverse;
use std::collections::HashMap;

use rayon::prelude::*;

use crate::config::ScanConfig;
use crate::results::{BestResult, WindowResult};

/// Scans `sequence` and returns the enrichment series together with the
/// globally best window.
///
/// The series holds one `(offset, top count)` entry per full window, in
/// generation order. The best window is the one with the strictly largest
/// top count; on ties the smallest offset wins. A sequence shorter than one
/// window yields an empty series and `None` — a valid outcome, not an error.
///
/// Symbols are treated opaquely; no alphabet validation is performed.
#[must_use]
pub fn scan(sequence: &[u8], config: &ScanConfig) -> (Vec<WindowResult>, Option<BestResult>) {
    let starts = window_starts(sequence.len(), config.window_size, config.step);

    // Per-window counting is embarrassingly parallel; collect preserves the
    // ascending-offset order of `starts`.
    let per_window: Vec<(usize, &[u8], u32)> = starts
        .into_par_iter()
        .filter_map(|start| {
            let window = &sequence[start..start + config.window_size];
            top_kmer(window, config.kmer_length).map(|(kmer, count)| (start, kmer, count))
        })
        .collect();

    let series = per_window
        .iter()
        .map(|&(offset, _, count)| WindowResult { offset, count })
        .collect();

    let best = per_window
        .iter()
        .min_by_key(|&&(offset, _, count)| (Reverse(count), offset))
        .map(|&(offset, kmer, count)| BestResult {
            offset,
            kmer: String::from_utf8_lossy(kmer).into_owned(),
            count,
        });

    (series, best)
}

/// Start offsets `0, step, 2*step, ...` of every full window.
fn window_starts(sequence_length: usize, window_size: usize, step: usize) -> Vec<usize> {
    if window_size == 0 || step == 0 || sequence_length < window_size {
        return Vec::new();
    }
    (0..=sequence_length - window_size).step_by(step).collect()
}

/// Most frequent k-mer of one window and its count.
///
/// Ties resolve to the k-mer whose first occurrence is leftmost: after the
/// counting pass the offsets are re-walked in order and the running maximum
/// only advances on a strictly greater count. Returns `None` when the window
/// cannot contain a single full k-mer.
fn top_kmer(window: &[u8], k: usize) -> Option<(&[u8], u32)> {
    if k == 0 || window.len() < k {
        return None;
    }

    let last_start = window.len() - k;
    let mut counts: HashMap<&[u8], u32> = HashMap::with_capacity(last_start + 1);
    for start in 0..=last_start {
        *counts.entry(&window[start..start + k]).or_insert(0) += 1;
    }

    let mut best: Option<(&[u8], u32)> = None;
    for start in 0..=last_start {
        let kmer = &window[start..start + k];
        let count = counts[kmer];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((kmer, count));
        }
    }
    best
}
