use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

// ── Quantile helper ───────────────────────────────────────────────────────────

/// Compute the `q`-quantile (`0.0..=1.0`) of a **sorted** slice using linear
/// interpolation between the closest ranks (`rank = q * (n - 1)`).
///
/// Fails with [`ReportError::EmptyInput`] on an empty slice rather than
/// inventing a bound.
pub fn quantile_sorted(sorted_data: &[f64], q: f64) -> Result<f64> {
    check_cut_point(q)?;
    if sorted_data.is_empty() {
        return Err(ReportError::EmptyInput(
            "quantile of an empty set is undefined".to_string(),
        ));
    }
    let len = sorted_data.len();
    if len == 1 {
        return Ok(sorted_data[0]);
    }
    let rank = q * (len as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Ok(sorted_data[lo]);
    }
    let frac = rank - lo as f64;
    Ok(sorted_data[lo] + frac * (sorted_data[hi] - sorted_data[lo]))
}

/// Same as [`quantile_sorted`] for unsorted integer counts.
pub fn quantile(values: &[u64], q: f64) -> Result<f64> {
    quantile_sorted(&sorted_f64(values), q)
}

fn sorted_f64(values: &[u64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn check_cut_point(q: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&q) {
        return Err(ReportError::InvalidQuantile(format!(
            "{q} is outside [0, 1]"
        )));
    }
    Ok(())
}

// ── QuantileBounds ────────────────────────────────────────────────────────────

/// Lower cut point used by the outlier filter.
pub const DEFAULT_LOWER_QUANTILE: f64 = 0.025;
/// Upper cut point used by the outlier filter.
pub const DEFAULT_UPPER_QUANTILE: f64 = 0.975;

/// Inclusive `[lo, hi]` value window derived once from a full value set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileBounds {
    pub lo: f64,
    pub hi: f64,
}

impl QuantileBounds {
    /// Compute `[Q(lower_q), Q(upper_q)]` over `values`.
    pub fn from_values(values: &[u64], lower_q: f64, upper_q: f64) -> Result<Self> {
        check_cut_point(lower_q)?;
        check_cut_point(upper_q)?;
        if lower_q > upper_q {
            return Err(ReportError::InvalidQuantile(format!(
                "lower cut point {lower_q} exceeds upper cut point {upper_q}"
            )));
        }
        let sorted = sorted_f64(values);
        Ok(Self {
            lo: quantile_sorted(&sorted, lower_q)?,
            hi: quantile_sorted(&sorted, upper_q)?,
        })
    }

    /// `true` when `lo <= value <= hi`.
    pub fn contains(&self, value: u64) -> bool {
        let v = value as f64;
        self.lo <= v && v <= self.hi
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
