//! Year/month annotation of the cleaned series for distribution plots.

use std::collections::BTreeMap;

use chrono::Month;
use pageview_core::calendar::{self, MONTHS};
use pageview_core::models::YearMonthRow;

use crate::cleaner::CleanedSeries;

/// One [`YearMonthRow`] per cleaned observation, in series order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearMonthTable {
    rows: Vec<YearMonthRow>,
}

impl YearMonthTable {
    pub fn rows(&self) -> &[YearMonthRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Category order of the month axis: `Jan`→`Dec`, independent of row order.
    pub fn month_order(&self) -> [Month; 12] {
        MONTHS
    }

    /// Values grouped by calendar year, ascending.
    pub fn by_year(&self) -> BTreeMap<i32, Vec<u64>> {
        let mut groups: BTreeMap<i32, Vec<u64>> = BTreeMap::new();
        for row in &self.rows {
            groups.entry(row.year).or_default().push(row.value);
        }
        groups
    }

    /// Values grouped by month across all years, always twelve groups in
    /// `Jan`→`Dec` order; a month without data has an empty group.
    pub fn by_month(&self) -> Vec<(Month, Vec<u64>)> {
        let mut groups: Vec<(Month, Vec<u64>)> =
            self.month_order().iter().map(|&m| (m, Vec::new())).collect();
        for row in &self.rows {
            groups[calendar::position(row.month)].1.push(row.value);
        }
        groups
    }
}

/// Stateless helper that annotates each observation with year and month.
pub struct YearMonthDecomposer;

impl YearMonthDecomposer {
    /// No aggregation and no filtering beyond what `series` already encodes.
    pub fn decompose(series: &CleanedSeries) -> YearMonthTable {
        let rows = series.iter().map(YearMonthRow::from_observation).collect();
        YearMonthTable { rows }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
