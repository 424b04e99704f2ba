//! One-shot report pipeline: load, clean, derive, draw.

use std::path::PathBuf;

use pageview_charts::{draw_bar_plot, draw_box_plot, draw_line_plot, FigureFileRenderer};
use pageview_core::error::Result;
use pageview_core::settings::ReportSettings;
use pageview_data::{load_cleaned, MonthlyAggregator, YearMonthDecomposer};
use tracing::info;

/// Where each figure ended up, plus the cleaning summary.
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub line_plot: PathBuf,
    pub bar_plot: PathBuf,
    pub box_plot: PathBuf,
    pub observations_read: usize,
    pub observations_kept: usize,
}

/// Run the full pipeline described by `settings`.
///
/// The cleaned series is built once and shared by reference with every
/// derivation; any load or parse failure aborts before a figure is drawn.
pub fn run(settings: &ReportSettings) -> Result<ReportArtifacts> {
    let series = load_cleaned(&settings.input_path)?;
    let bounds = series.bounds();
    info!(
        "Removed {} outliers outside [{:.1}, {:.1}] from {} observations",
        series.removed(),
        bounds.lo,
        bounds.hi,
        series.raw_len()
    );

    let monthly = MonthlyAggregator::aggregate(&series);
    let decomposed = YearMonthDecomposer::decompose(&series);
    info!(
        "Prepared {} monthly averages and {} annotated rows",
        monthly.len(),
        decomposed.len()
    );

    let renderer = FigureFileRenderer::new(settings.output_dir.clone());
    let charts = &settings.charts;

    Ok(ReportArtifacts {
        line_plot: draw_line_plot(&series, charts, &renderer)?,
        bar_plot: draw_bar_plot(&monthly, charts, &renderer)?,
        box_plot: draw_box_plot(&decomposed, charts, &renderer)?,
        observations_read: series.raw_len(),
        observations_kept: series.len(),
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
