//! The three report figures as projections of prepared data.
//!
//! Each `draw_*` function builds its [`Figure`] from one prepared data shape
//! and the static [`ChartSettings`], then hands it to the renderer.

use pageview_core::calendar;
use pageview_core::error::Result;
use pageview_core::settings::ChartSettings;
use pageview_data::{CleanedSeries, MonthlyAverageTable, YearMonthTable};
use tracing::info;

use crate::figure::{
    Bar, BoxCategory, BoxPlotPair, BoxPlotPanel, Figure, GroupedBarChart, LineChart, LinePoint,
};
use crate::renderer::ChartRenderer;

/// Artefact name of the daily line chart.
pub const LINE_PLOT: &str = "line_plot";
/// Artefact name of the monthly-average bar chart.
pub const BAR_PLOT: &str = "bar_plot";
/// Artefact name of the year/month box plots.
pub const BOX_PLOT: &str = "box_plot";

// ── Figure builders ───────────────────────────────────────────────────────────

pub fn line_chart(series: &CleanedSeries, settings: &ChartSettings) -> LineChart {
    LineChart {
        title: settings.line_title.clone(),
        x_label: settings.line_x_label.clone(),
        y_label: settings.line_y_label.clone(),
        size: settings.line_size,
        points: series
            .iter()
            .map(|o| LinePoint {
                date: o.date,
                value: o.value,
            })
            .collect(),
    }
}

pub fn bar_chart(table: &MonthlyAverageTable, settings: &ChartSettings) -> GroupedBarChart {
    GroupedBarChart {
        x_label: settings.bar_x_label.clone(),
        y_label: settings.bar_y_label.clone(),
        legend_title: settings.bar_legend_title.clone(),
        size: settings.bar_size,
        years: table.years(),
        legend: table
            .legend()
            .iter()
            .map(|&m| calendar::full_name(m).to_string())
            .collect(),
        bars: table
            .rows()
            .iter()
            .map(|r| Bar {
                year: r.year,
                month: r.month_name().to_string(),
                metric: r.metric,
                value: r.value,
            })
            .collect(),
    }
}

pub fn box_plots(table: &YearMonthTable, settings: &ChartSettings) -> BoxPlotPair {
    let by_year = table
        .by_year()
        .into_iter()
        .map(|(year, values)| BoxCategory {
            label: year.to_string(),
            values,
        })
        .collect();

    let by_month = table
        .by_month()
        .into_iter()
        .map(|(month, values)| BoxCategory {
            label: calendar::abbrev(month).to_string(),
            values,
        })
        .collect();

    BoxPlotPair {
        size: settings.box_size,
        by_year: BoxPlotPanel {
            title: settings.box_year_title.clone(),
            x_label: settings.box_year_x_label.clone(),
            y_label: settings.box_y_label.clone(),
            categories: by_year,
        },
        by_month: BoxPlotPanel {
            title: settings.box_month_title.clone(),
            x_label: settings.box_month_x_label.clone(),
            y_label: settings.box_y_label.clone(),
            categories: by_month,
        },
    }
}

// ── Draw entry points ─────────────────────────────────────────────────────────

/// Daily page views over the whole range.
pub fn draw_line_plot<R: ChartRenderer>(
    series: &CleanedSeries,
    settings: &ChartSettings,
    renderer: &R,
) -> Result<R::Output> {
    let figure = Figure::Line(line_chart(series, settings));
    info!("Drawing {} ({} points)", LINE_PLOT, series.len());
    renderer.render(LINE_PLOT, &figure)
}

/// Average page views per month, grouped by year.
pub fn draw_bar_plot<R: ChartRenderer>(
    table: &MonthlyAverageTable,
    settings: &ChartSettings,
    renderer: &R,
) -> Result<R::Output> {
    let figure = Figure::Bar(bar_chart(table, settings));
    info!("Drawing {} ({} monthly averages)", BAR_PLOT, table.len());
    renderer.render(BAR_PLOT, &figure)
}

/// Year-wise and month-wise distribution box plots.
pub fn draw_box_plot<R: ChartRenderer>(
    table: &YearMonthTable,
    settings: &ChartSettings,
    renderer: &R,
) -> Result<R::Output> {
    let figure = Figure::BoxPair(box_plots(table, settings));
    info!("Drawing {} ({} observations)", BOX_PLOT, table.len());
    renderer.render(BOX_PLOT, &figure)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use pageview_core::calendar::MONTHS;
    use pageview_core::models::{Metric, Observation};
    use pageview_data::{clean, MonthlyAggregator, YearMonthDecomposer};
    use std::cell::RefCell;

    /// Keeps every figure it is asked to render.
    #[derive(Default)]
    struct RecordingRenderer {
        figures: RefCell<Vec<(String, Figure)>>,
    }

    impl ChartRenderer for RecordingRenderer {
        type Output = usize;

        fn render(&self, name: &str, figure: &Figure) -> Result<usize> {
            let mut figures = self.figures.borrow_mut();
            figures.push((name.to_string(), figure.clone()));
            Ok(figures.len())
        }
    }

    /// Two and a half years of daily data starting mid-year.
    fn cleaned() -> CleanedSeries {
        let start = NaiveDate::from_ymd_opt(2016, 5, 9).unwrap();
        let raw: Vec<Observation> = (0..900i64)
            .map(|i| {
                let value = 2_000 + (i as u64 * 613) % 4_000;
                Observation::new(start + Duration::days(i), value)
            })
            .collect();
        clean(raw).unwrap()
    }

    // ── draw_line_plot ────────────────────────────────────────────────────────

    #[test]
    fn test_draw_line_plot_projects_series() {
        let series = cleaned();
        let renderer = RecordingRenderer::default();
        draw_line_plot(&series, &ChartSettings::default(), &renderer).unwrap();

        let figures = renderer.figures.borrow();
        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].0, LINE_PLOT);
        match &figures[0].1 {
            Figure::Line(chart) => {
                assert_eq!(chart.points.len(), series.len());
                assert_eq!(chart.points[0].date, series.observations()[0].date);
                assert_eq!(
                    chart.title,
                    "Daily freeCodeCamp Forum Page Views 5/2016-12/2019"
                );
                assert_eq!(chart.x_label, "Date");
                assert_eq!(chart.y_label, "Page Views");
            }
            other => panic!("unexpected figure: {other:?}"),
        }
    }

    // ── draw_bar_plot ─────────────────────────────────────────────────────────

    #[test]
    fn test_draw_bar_plot_legend_and_axes() {
        let series = cleaned();
        let table = MonthlyAggregator::aggregate(&series);
        let renderer = RecordingRenderer::default();
        draw_bar_plot(&table, &ChartSettings::default(), &renderer).unwrap();

        let figures = renderer.figures.borrow();
        let Figure::Bar(chart) = &figures[0].1 else {
            panic!("expected a bar chart");
        };
        assert_eq!(figures[0].0, BAR_PLOT);
        assert_eq!(chart.x_label, "Years");
        assert_eq!(chart.y_label, "Average Page Views");
        assert_eq!(chart.legend_title, "Months");
        assert_eq!(chart.legend.first().map(String::as_str), Some("January"));
        assert_eq!(chart.legend.last().map(String::as_str), Some("December"));
        assert_eq!(chart.years, vec![2016, 2017, 2018]);
        assert_eq!(chart.bars.len(), table.len());
        assert_eq!(chart.bars[0].month, "May");
        assert!(chart.bars.iter().all(|b| b.metric == Metric::Avg));
    }

    // ── draw_box_plot ─────────────────────────────────────────────────────────

    #[test]
    fn test_draw_box_plot_panels() {
        let series = cleaned();
        let table = YearMonthDecomposer::decompose(&series);
        let renderer = RecordingRenderer::default();
        draw_box_plot(&table, &ChartSettings::default(), &renderer).unwrap();

        let figures = renderer.figures.borrow();
        let Figure::BoxPair(pair) = &figures[0].1 else {
            panic!("expected box plots");
        };
        assert_eq!(pair.by_year.x_label, "Year");
        assert_eq!(pair.by_month.x_label, "Month");
        assert_eq!(pair.by_year.y_label, "Page Views");
        assert_eq!(pair.by_month.y_label, "Page Views");

        let year_labels: Vec<&str> = pair
            .by_year
            .categories
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(year_labels, vec!["2016", "2017", "2018"]);

        // Data starts in May, but the month axis still opens with January.
        let month_labels: Vec<&str> = pair
            .by_month
            .categories
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(month_labels, MONTHS.map(calendar::abbrev).to_vec());

        let total: usize = pair.by_month.categories.iter().map(|c| c.values.len()).sum();
        assert_eq!(total, series.len());
    }

    #[test]
    fn test_draw_functions_leave_inputs_untouched() {
        let series = cleaned();
        let before = series.clone();
        let monthly = MonthlyAggregator::aggregate(&series);
        let decomposed = YearMonthDecomposer::decompose(&series);
        let renderer = RecordingRenderer::default();
        let settings = ChartSettings::default();

        assert_eq!(draw_line_plot(&series, &settings, &renderer).unwrap(), 1);
        assert_eq!(draw_bar_plot(&monthly, &settings, &renderer).unwrap(), 2);
        assert_eq!(draw_box_plot(&decomposed, &settings, &renderer).unwrap(), 3);
        assert_eq!(series, before);
    }
}
