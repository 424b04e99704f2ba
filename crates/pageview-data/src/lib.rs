//! Data preparation for the page-view report.
//!
//! Loads the daily series from CSV, trims outliers by quantile bounds and
//! derives the two reshaped tables the charts consume: monthly averages and
//! the per-day year/month annotation.

pub mod aggregator;
pub mod cleaner;
pub mod decomposer;
pub mod reader;

pub use aggregator::{MonthlyAggregator, MonthlyAverageTable};
pub use cleaner::{clean, load_cleaned, CleanedSeries};
pub use decomposer::{YearMonthDecomposer, YearMonthTable};
