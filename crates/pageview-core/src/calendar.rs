//! Canonical month vocabulary.
//!
//! Chart axes and legends must list months January→December no matter in
//! which order the data arrives, so the ordering lives here as an explicit
//! sequence rather than being recovered by sorting strings.

use chrono::{Datelike, Month, NaiveDate};

/// The twelve calendar months in chronological order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Calendar month of `date`.
pub fn month_of(date: NaiveDate) -> Month {
    MONTHS[date.month0() as usize]
}

/// Full English month name, e.g. `"January"`.
pub fn full_name(month: Month) -> &'static str {
    month.name()
}

/// Three-letter abbreviation, e.g. `"Jan"`.
pub fn abbrev(month: Month) -> &'static str {
    &month.name()[..3]
}

/// Zero-based position of `month` in [`MONTHS`].
pub fn position(month: Month) -> usize {
    month.number_from_month() as usize - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_are_chronological() {
        for (i, month) in MONTHS.iter().enumerate() {
            assert_eq!(month.number_from_month() as usize, i + 1);
            assert_eq!(position(*month), i);
        }
    }

    #[test]
    fn test_abbrevs_order() {
        assert_eq!(
            MONTHS.map(abbrev),
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
    }

    #[test]
    fn test_full_names_not_alphabetical() {
        let names = MONTHS.map(full_name);
        assert_eq!(names[0], "January");
        assert_eq!(names[11], "December");

        let mut sorted = names;
        sorted.sort_unstable();
        assert_ne!(names, sorted);
    }

    #[test]
    fn test_month_of() {
        let date = NaiveDate::from_ymd_opt(2019, 12, 3).unwrap();
        assert_eq!(month_of(date), Month::December);
        assert_eq!(abbrev(month_of(date)), "Dec");
        assert_eq!(full_name(month_of(date)), "December");
    }
}
