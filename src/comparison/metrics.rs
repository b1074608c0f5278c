//! Comparison metric table and the winning-value accumulator
//!
//! Every comparable column declares its own tie-break direction here, so the
//! engine is a plain fold over (metric, value) pairs and no comparison logic
//! lives in control flow.

use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::rates::{parse_numeric, PayoutFrequency};

/// Tie-break direction for a comparison metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smaller figures win (terms, entry thresholds)
    LowerIsBetter,
    /// Larger figures win (rates, returns, realizable investment)
    HigherIsBetter,
}

/// A comparable column in the side-by-side view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Certificate term in years
    Duration,
    /// Smallest accepted investment
    MinInvestment,
    /// Permitted investment increment
    Multiple,
    /// Target principal after rounding to the certificate's multiple
    YourInvestment,
    /// Average interest rate for one payout frequency
    Rate(PayoutFrequency),
    /// Projected absolute return for one payout frequency
    Return(PayoutFrequency),
}

impl Metric {
    /// Declared tie-break direction. Comparisons are strict, so the first
    /// certificate to post a figure keeps the record on ties.
    pub fn direction(&self) -> Direction {
        match self {
            Metric::Duration | Metric::MinInvestment | Metric::Multiple => {
                Direction::LowerIsBetter
            }
            Metric::YourInvestment | Metric::Rate(_) | Metric::Return(_) => {
                Direction::HigherIsBetter
            }
        }
    }

    /// Stable column key used by the view layer
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Duration => "duration",
            Metric::MinInvestment => "minInvestment",
            Metric::Multiple => "multiple",
            Metric::YourInvestment => "yourInvestment",
            Metric::Rate(frequency) => match frequency {
                PayoutFrequency::Daily => "dailyInterest",
                PayoutFrequency::Monthly => "monthlyInterest",
                PayoutFrequency::Quarterly => "quarterlyInterest",
                PayoutFrequency::SemiAnnual => "semiAnnualInterest",
                PayoutFrequency::Annual => "annualInterest",
                PayoutFrequency::AtMaturity => "atMaturityInterest",
            },
            Metric::Return(frequency) => match frequency {
                PayoutFrequency::Daily => "dailyReturn",
                PayoutFrequency::Monthly => "monthlyReturn",
                PayoutFrequency::Quarterly => "quarterlyReturn",
                PayoutFrequency::SemiAnnual => "semiAnnualReturn",
                PayoutFrequency::Annual => "annualReturn",
                PayoutFrequency::AtMaturity => "atMaturityReturn",
            },
        }
    }

    /// The full metric table: four structural metrics plus a rate and a
    /// return column per payout frequency.
    pub fn all() -> Vec<Metric> {
        let mut metrics = vec![
            Metric::Duration,
            Metric::MinInvestment,
            Metric::Multiple,
            Metric::YourInvestment,
        ];
        metrics.extend(PayoutFrequency::ALL.map(Metric::Rate));
        metrics.extend(PayoutFrequency::ALL.map(Metric::Return));
        metrics
    }
}

/// Best observed value per metric across the current selection.
///
/// Recomputed in full by `compare` every time the selection changes; never
/// partially updated. Metrics no certificate contributed to are simply
/// absent. Keys iterate in stable order, so repeated runs over an unchanged
/// selection are bit-identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WinningValues {
    values: BTreeMap<&'static str, f64>,
}

impl WinningValues {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Winner for a metric key, if any certificate contributed to it
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// (key, winner) pairs in stable order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().map(|(&key, &value)| (key, value))
    }

    /// Fold one observed figure into the running best for `metric`
    pub(crate) fn observe(&mut self, metric: Metric, value: f64) {
        match self.values.entry(metric.key()) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => {
                let current = *slot.get();
                let better = match metric.direction() {
                    Direction::LowerIsBetter => value < current,
                    Direction::HigherIsBetter => value > current,
                };
                if better {
                    slot.insert(value);
                }
            }
        }
    }

    /// True when `value` equals the recorded winner for `key`.
    ///
    /// A metric that was never computed answers false.
    pub fn is_winning(&self, key: &str, value: f64) -> bool {
        self.get(key) == Some(value)
    }

    /// Decorated variant: strips `%` and currency text from `value` before
    /// comparing, so `"20%"` behaves exactly like `20.0`.
    pub fn is_winning_text(&self, key: &str, value: &str) -> bool {
        parse_numeric(value).is_some_and(|v| self.is_winning(key, v))
    }
}
