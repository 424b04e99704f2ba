//! Outlier removal by global quantile bounds.
//!
//! Bounds are computed once over the full raw value set and then applied
//! to every observation; they are never recomputed on the filtered subset.

use std::path::Path;

use pageview_core::error::{ReportError, Result};
use pageview_core::models::Observation;
use pageview_core::quantile::{QuantileBounds, DEFAULT_LOWER_QUANTILE, DEFAULT_UPPER_QUANTILE};
use tracing::info;

use crate::reader::read_observations;

// ── CleanedSeries ─────────────────────────────────────────────────────────────

/// The canonical series every chart is drawn from.
///
/// Only [`clean`] builds one, so every value is known to
/// lie inside `bounds` and the observations keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedSeries {
    observations: Vec<Observation>,
    bounds: QuantileBounds,
    raw_len: usize,
}

impl CleanedSeries {
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// The `[lo, hi]` window that was applied.
    pub fn bounds(&self) -> QuantileBounds {
        self.bounds
    }

    /// Number of observations before filtering.
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Number of observations dropped as outliers.
    pub fn removed(&self) -> usize {
        self.raw_len - self.observations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }
}

impl<'a> IntoIterator for &'a CleanedSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Keep the observations inside the central 95% of the raw distribution.
pub fn clean(raw: Vec<Observation>) -> Result<CleanedSeries> {
    clean_with(raw, DEFAULT_LOWER_QUANTILE, DEFAULT_UPPER_QUANTILE)
}

/// Keep the observations whose value lies in `[Q(lower_q), Q(upper_q)]`
/// of the raw values, inclusive on both ends.
fn clean_with(raw: Vec<Observation>, lower_q: f64, upper_q: f64) -> Result<CleanedSeries> {
    if raw.is_empty() {
        return Err(ReportError::EmptyInput(
            "no observations to clean".to_string(),
        ));
    }

    let values: Vec<u64> = raw.iter().map(|o| o.value).collect();
    let bounds = QuantileBounds::from_values(&values, lower_q, upper_q)?;

    let raw_len = raw.len();
    let observations: Vec<Observation> =
        raw.into_iter().filter(|o| bounds.contains(o.value)).collect();

    if observations.is_empty() {
        return Err(ReportError::EmptyInput(format!(
            "all {} observations fall outside [{}, {}]",
            raw_len, bounds.lo, bounds.hi
        )));
    }

    info!(
        "Quantile bounds [{:.3}, {:.3}]: kept {} of {} observations",
        bounds.lo,
        bounds.hi,
        observations.len(),
        raw_len
    );

    Ok(CleanedSeries {
        observations,
        bounds,
        raw_len,
    })
}

/// Read `path` and clean it.
pub fn load_cleaned(path: &Path) -> Result<CleanedSeries> {
    clean(read_observations(path)?)
}

#[cfg(test)]
pub(crate) fn series_for_test(observations: Vec<Observation>) -> CleanedSeries {
    let raw_len = observations.len();
    CleanedSeries {
        observations,
        bounds: QuantileBounds {
            lo: f64::NEG_INFINITY,
            hi: f64::INFINITY,
        },
        raw_len,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
