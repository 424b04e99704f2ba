//! The seam between prepared figures and whatever draws them.

use std::path::PathBuf;

use pageview_core::error::{ReportError, Result};
use tracing::debug;

use crate::figure::Figure;

/// Turns a [`Figure`] into an artefact.
///
/// Implementations must not alter the data they are given; any failure is
/// reported as [`ReportError::Render`].
pub trait ChartRenderer {
    type Output;

    /// Render `figure`; `name` identifies the artefact (e.g. `"bar_plot"`).
    fn render(&self, name: &str, figure: &Figure) -> Result<Self::Output>;
}

// ── FigureFileRenderer ────────────────────────────────────────────────────────

/// Persists each figure description as `<dir>/<name>.json` for an external
/// plotting front end to draw.
#[derive(Debug, Clone)]
pub struct FigureFileRenderer {
    dir: PathBuf,
}

impl FigureFileRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the figure called `name` is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

impl ChartRenderer for FigureFileRenderer {
    type Output = PathBuf;

    fn render(&self, name: &str, figure: &Figure) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|e| render_error(name, e))?;
        let json = serde_json::to_string_pretty(figure).map_err(|e| render_error(name, e))?;

        // Write to a temp file then rename for atomicity.
        let path = self.path_for(name);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json).map_err(|e| render_error(name, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| render_error(name, e))?;

        debug!("Wrote figure {} to {}", name, path.display());
        Ok(path)
    }
}

fn render_error(name: &str, e: impl std::fmt::Display) -> ReportError {
    ReportError::Render(format!("{name}: {e}"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{LineChart, LinePoint};
    use chrono::NaiveDate;
    use pageview_core::settings::FigureSize;
    use tempfile::TempDir;

    fn small_line() -> Figure {
        Figure::Line(LineChart {
            title: "Views".to_string(),
            x_label: "Date".to_string(),
            y_label: "Page Views".to_string(),
            size: FigureSize::default(),
            points: vec![LinePoint {
                date: NaiveDate::from_ymd_opt(2016, 5, 9).unwrap(),
                value: 42,
            }],
        })
    }

    #[test]
    fn test_file_renderer_writes_json() {
        let tmp = TempDir::new().unwrap();
        let renderer = FigureFileRenderer::new(tmp.path().join("out"));

        let path = renderer.render("line_plot", &small_line()).unwrap();

        assert_eq!(path, tmp.path().join("out").join("line_plot.json"));
        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["kind"], "line");
        assert_eq!(value["points"][0]["date"], "2016-05-09");
        assert_eq!(value["points"][0]["value"], 42);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_renderer_round_trips_figure() {
        let tmp = TempDir::new().unwrap();
        let renderer = FigureFileRenderer::new(tmp.path());
        let figure = small_line();

        let path = renderer.render("line_plot", &figure).unwrap();
        let loaded: Figure =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(loaded, figure);
    }

    #[test]
    fn test_file_renderer_failure_is_render_error() {
        let tmp = TempDir::new().unwrap();
        // A regular file where the output directory should be.
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let renderer = FigureFileRenderer::new(blocker.join("nested"));

        let err = renderer.render("line_plot", &small_line()).unwrap_err();
        assert!(matches!(err, ReportError::Render(_)));
    }
}
