//! Invest Compare - Return projection and comparison engine for fixed-income bank certificates
//!
//! This library provides:
//! - Parsing of free-form interest-rate schedules (flat or staged)
//! - Return projection across six payout frequencies for a principal and term
//! - Rounding of target amounts to a certificate's permitted multiple
//! - Per-metric winning values across a user-selected set of certificates

pub mod catalog;
pub mod comparison;
pub mod error;
pub mod projection;
pub mod rates;

// Re-export commonly used types
pub use catalog::{Bank, Catalog, Certificate};
pub use comparison::{compare, CompareSession, Metric, Selection, WinningValues, MIN_COMPARABLE};
pub use error::EngineError;
pub use projection::{project_returns, round_to_multiple, ReturnProjection};
pub use rates::{average_rate, extract_rates, is_staged, PayoutFrequency, RateSchedule, RateText};
