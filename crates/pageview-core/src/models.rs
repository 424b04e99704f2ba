use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar;

/// One day's page-view count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar day the views were counted on.
    pub date: NaiveDate,
    /// Number of page views recorded that day.
    pub value: u64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: u64) -> Self {
        Self { date, value }
    }
}

/// Label attached to each row of the long-form monthly table.
///
/// There is only one metric; the tag exists so the reshaped table carries
/// an explicit name for its value column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Avg,
}

/// Mean page views for one `(year, month)` that has at least one observation.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAverageRow {
    pub year: i32,
    pub month: Month,
    pub metric: Metric,
    pub value: f64,
}

impl MonthlyAverageRow {
    /// Full month name, e.g. `"May"` or `"September"`.
    pub fn month_name(&self) -> &'static str {
        calendar::full_name(self.month)
    }
}

/// An observation annotated with its calendar year and month.
#[derive(Debug, Clone, PartialEq)]
pub struct YearMonthRow {
    pub date: NaiveDate,
    pub value: u64,
    pub year: i32,
    pub month: Month,
}

impl YearMonthRow {
    pub fn from_observation(obs: &Observation) -> Self {
        Self {
            date: obs.date,
            value: obs.value,
            year: obs.date.year(),
            month: calendar::month_of(obs.date),
        }
    }

    /// Three-letter month token, e.g. `"Jan"`.
    pub fn month_abbrev(&self) -> &'static str {
        calendar::abbrev(self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_serialises_lowercase() {
        let json = serde_json::to_string(&Metric::Avg).unwrap();
        assert_eq!(json, "\"avg\"");
    }

    #[test]
    fn test_year_month_row_from_observation() {
        let obs = Observation::new(NaiveDate::from_ymd_opt(2017, 9, 30).unwrap(), 1234);
        let row = YearMonthRow::from_observation(&obs);
        assert_eq!(row.year, 2017);
        assert_eq!(row.month, Month::September);
        assert_eq!(row.month_abbrev(), "Sep");
        assert_eq!(row.value, 1234);
        assert_eq!(row.date, obs.date);
    }

    #[test]
    fn test_monthly_row_month_name() {
        let row = MonthlyAverageRow {
            year: 2016,
            month: Month::June,
            metric: Metric::Avg,
            value: 200.0,
        };
        assert_eq!(row.month_name(), "June");
    }
}
