//! Monthly averages over the cleaned series, in long form.

use std::collections::BTreeMap;

use chrono::{Datelike, Month};
use pageview_core::calendar::MONTHS;
use pageview_core::models::{Metric, MonthlyAverageRow, Observation};

use crate::cleaner::CleanedSeries;

// ── MonthAccumulator ──────────────────────────────────────────────────────────

/// Running sum and count for one calendar month.
///
/// The sum is widened to `u128` so a month of counts near `u64::MAX` cannot
/// overflow.
#[derive(Debug, Clone, Copy, Default)]
struct MonthAccumulator {
    sum: u128,
    count: u64,
}

impl MonthAccumulator {
    fn add(&mut self, obs: &Observation) {
        self.sum += u128::from(obs.value);
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}

// ── MonthlyAverageTable ───────────────────────────────────────────────────────

/// Long-form table of `(year, month, "avg", value)` rows, chronologically
/// ordered, plus the January→December legend the bar chart groups by.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAverageTable {
    rows: Vec<MonthlyAverageRow>,
}

impl MonthlyAverageTable {
    pub fn rows(&self) -> &[MonthlyAverageRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.rows.iter().map(|r| r.year).collect();
        years.dedup();
        years
    }

    /// Legend order for the month hue: always January→December.
    pub fn legend(&self) -> [Month; 12] {
        MONTHS
    }
}

// ── MonthlyAggregator ─────────────────────────────────────────────────────────

/// Stateless helper that averages a cleaned series per calendar month.
pub struct MonthlyAggregator;

impl MonthlyAggregator {
    /// One row per `(year, month)` with at least one observation; months
    /// without data are absent rather than zero-filled.
    pub fn aggregate(series: &CleanedSeries) -> MonthlyAverageTable {
        // BTreeMap keeps (year, month0) keys in chronological order.
        let mut map: BTreeMap<(i32, u32), MonthAccumulator> = BTreeMap::new();

        for obs in series {
            map.entry((obs.date.year(), obs.date.month0()))
                .or_default()
                .add(obs);
        }

        let rows = map
            .into_iter()
            .map(|((year, month0), acc)| MonthlyAverageRow {
                year,
                month: MONTHS[month0 as usize],
                metric: Metric::Avg,
                value: acc.mean(),
            })
            .collect();

        MonthlyAverageTable { rows }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
