//! Projected absolute returns per payout frequency

use serde::{Deserialize, Serialize};

use crate::rates::{average_rate, is_staged, PayoutFrequency};

/// Projected absolute return amounts for one certificate and principal.
///
/// Every figure is derived from the same average annual rate; which field is
/// meaningful for a given certificate depends on which schedule slots the
/// certificate actually offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnProjection {
    pub daily: f64,
    pub monthly: f64,
    pub quarterly: f64,
    pub semi_annual: f64,
    pub annual: f64,
    pub at_maturity: f64,

    /// True when the underlying schedule is staged (time-varying)
    pub is_staged: bool,
}

impl ReturnProjection {
    /// Figure for a single payout frequency
    pub fn amount(&self, frequency: PayoutFrequency) -> f64 {
        match frequency {
            PayoutFrequency::Daily => self.daily,
            PayoutFrequency::Monthly => self.monthly,
            PayoutFrequency::Quarterly => self.quarterly,
            PayoutFrequency::SemiAnnual => self.semi_annual,
            PayoutFrequency::Annual => self.annual,
            PayoutFrequency::AtMaturity => self.at_maturity,
        }
    }
}

/// Project returns for `principal` at the schedule's average annual rate.
///
/// `principal` is expected to be non-negative (it comes from the rounder)
/// and `duration_years` positive (it comes from static certificate data);
/// neither is validated here.
pub fn project_returns(principal: f64, rate_text: &str, duration_years: u32) -> ReturnProjection {
    let avg = average_rate(rate_text) / 100.0;

    ReturnProjection {
        daily: principal * avg / 365.0,
        monthly: principal * avg / 12.0,
        quarterly: principal * avg / 4.0,
        semi_annual: principal * avg / 2.0,
        annual: principal * avg,
        at_maturity: principal * avg * duration_years as f64,
        is_staged: is_staged(rate_text),
    }
}
