use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE_NAME: &str = "pageview-report.json";

/// Source data file used when no settings file overrides it.
pub const DEFAULT_INPUT_FILE: &str = "fcc-forum-pageviews.csv";

// ── FigureSize ─────────────────────────────────────────────────────────────────

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 6.0,
        }
    }
}

// ── ChartSettings ──────────────────────────────────────────────────────────────

/// Static presentation parameters for the three figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub line_title: String,
    pub line_x_label: String,
    pub line_y_label: String,
    pub line_size: FigureSize,

    pub bar_x_label: String,
    pub bar_y_label: String,
    pub bar_legend_title: String,
    pub bar_size: FigureSize,

    pub box_year_title: String,
    pub box_year_x_label: String,
    pub box_month_title: String,
    pub box_month_x_label: String,
    pub box_y_label: String,
    pub box_size: FigureSize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            line_title: "Daily freeCodeCamp Forum Page Views 5/2016-12/2019".to_string(),
            line_x_label: "Date".to_string(),
            line_y_label: "Page Views".to_string(),
            line_size: FigureSize::default(),

            bar_x_label: "Years".to_string(),
            bar_y_label: "Average Page Views".to_string(),
            bar_legend_title: "Months".to_string(),
            // seaborn catplot default: height 5, aspect 1
            bar_size: FigureSize {
                width: 5.0,
                height: 5.0,
            },

            box_year_title: "Year-wise Box Plot (Trend)".to_string(),
            box_year_x_label: "Year".to_string(),
            box_month_title: "Month-wise Box Plot (Seasonality)".to_string(),
            box_month_x_label: "Month".to_string(),
            box_y_label: "Page Views".to_string(),
            box_size: FigureSize::default(),
        }
    }
}

// ── ReportSettings ─────────────────────────────────────────────────────────────

/// Everything the report binary needs to run; every field has a default.
///
/// Unknown keys are rejected; in particular the outlier cut points are fixed
/// and cannot be set here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    /// CSV file with a `date,value` header.
    pub input_path: PathBuf,
    /// Directory the figure artefacts are written to.
    pub output_dir: PathBuf,
    /// Logging level (`"debug"`, `"info"`, `"warn"`, `"error"`).
    pub log_level: String,
    pub charts: ChartSettings,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from("."),
            log_level: "info".to_string(),
            charts: ChartSettings::default(),
        }
    }
}

impl ReportSettings {
    /// Return the settings path rooted at `base_dir`.
    pub fn config_path_in(base_dir: &Path) -> PathBuf {
        base_dir.join(SETTINGS_FILE_NAME)
    }

    /// Load settings from `pageview-report.json` in the working directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path_in(Path::new(".")))
    }

    /// Load settings from an explicit path.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is a [`ReportError::Config`] error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content)
            .map_err(|e| ReportError::Config(format!("{}: {}", path.display(), e)))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
