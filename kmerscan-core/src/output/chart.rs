use std::path::Path;

use plotters::prelude::*;

use crate::results::ScanResults;
use crate::types::ScanError;

const CHART_WIDTH: u32 = 1200;
const CHART_HEIGHT: u32 = 600;

/// Renders the enrichment series as a line chart (x = genomic offset,
/// y = top k-mer count per window) into an image file at `path`.
///
/// Returns `Ok(false)` without touching the filesystem when the series is
/// empty; charting zero points is a skip, not a failure.
///
/// # Errors
///
/// Returns [`ScanError::ChartError`] if the backend cannot draw or write
/// the image.
pub fn write_enrichment_chart(
    results: &ScanResults,
    kmer_length: usize,
    path: &Path,
) -> Result<bool, ScanError> {
    if results.series.is_empty() {
        return Ok(false);
    }

    let x_max = results
        .series
        .last()
        .map(|w| w.offset as i64)
        .unwrap_or(0)
        .max(1);
    let y_max = results
        .series
        .iter()
        .map(|w| w.count)
        .max()
        .unwrap_or(0)
        .saturating_add(1);

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("K-mer enrichment (k={kmer_length}) along genome"),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0i64..x_max, 0u32..y_max)
        .map_err(to_chart_error)?;

    chart
        .configure_mesh()
        .x_desc("Genomic position (bp)")
        .y_desc("Highest k-mer count in window")
        .draw()
        .map_err(to_chart_error)?;

    chart
        .draw_series(LineSeries::new(
            results.series.iter().map(|w| (w.offset as i64, w.count)),
            &BLUE,
        ))
        .map_err(to_chart_error)?;

    root.present().map_err(to_chart_error)?;
    Ok(true)
}

fn to_chart_error<E: std::fmt::Display>(error: E) -> ScanError {
    ScanError::ChartError(error.to_string())
}
