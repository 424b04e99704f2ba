//! Core types for the page-view report.
//!
//! Holds the error type, the domain models shared by every stage of the
//! pipeline, the canonical month vocabulary, quantile math and the report
//! settings.

pub mod calendar;
pub mod error;
pub mod models;
pub mod quantile;
pub mod settings;

pub use error::{ReportError, Result};
