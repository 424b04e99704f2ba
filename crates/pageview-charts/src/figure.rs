//! Renderer-neutral descriptions of the three report figures.
//!
//! A figure carries the prepared data plus its static presentation
//! parameters. Nothing here transforms data; builders only project the
//! columns each chart consumes.

use chrono::NaiveDate;
use pageview_core::models::Metric;
use pageview_core::settings::FigureSize;
use serde::{Deserialize, Serialize};

/// One point of the daily line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub date: NaiveDate,
    pub value: u64,
}

/// Full-range daily page views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size: FigureSize,
    pub points: Vec<LinePoint>,
}

/// One bar: the average for `month` within `year`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub year: i32,
    pub month: String,
    pub metric: Metric,
    pub value: f64,
}

/// Bars grouped by year on the x axis and coloured by month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarChart {
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub size: FigureSize,
    /// X-axis categories, ascending.
    pub years: Vec<i32>,
    /// Hue order, always January→December.
    pub legend: Vec<String>,
    pub bars: Vec<Bar>,
}

/// One box: a category label and the raw values it summarises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxCategory {
    pub label: String,
    pub values: Vec<u64>,
}

/// A single box-plot axis; `categories` are drawn left to right as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotPanel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<BoxCategory>,
}

/// Side-by-side box plots: trend by year (left), seasonality by month (right).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotPair {
    pub size: FigureSize,
    pub by_year: BoxPlotPanel,
    pub by_month: BoxPlotPanel,
}

/// Any figure the report produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Line(LineChart),
    Bar(GroupedBarChart),
    BoxPair(BoxPlotPair),
}
