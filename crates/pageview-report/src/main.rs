mod bootstrap;
mod report;

use anyhow::Result;
use pageview_core::settings::ReportSettings;

fn main() -> Result<()> {
    let settings = ReportSettings::load()?;

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Page-view report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, output: {}",
        settings.input_path.display(),
        settings.output_dir.display()
    );

    let artifacts = report::run(&settings)?;

    tracing::info!(
        "Kept {} of {} observations; wrote {}, {}, {}",
        artifacts.observations_kept,
        artifacts.observations_read,
        artifacts.line_plot.display(),
        artifacts.bar_plot.display(),
        artifacts.box_plot.display()
    );

    Ok(())
}
