//! Rate schedule types: payout frequencies and their optional descriptions

use serde::{Deserialize, Serialize};
use std::fmt;

use super::parser::{average_rate, extract_rates, is_staged};

/// Interest payout frequency offered by a certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayoutFrequency {
    Daily,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
    AtMaturity,
}

impl PayoutFrequency {
    /// All payout frequencies in canonical order
    pub const ALL: [PayoutFrequency; 6] = [
        PayoutFrequency::Daily,
        PayoutFrequency::Monthly,
        PayoutFrequency::Quarterly,
        PayoutFrequency::SemiAnnual,
        PayoutFrequency::Annual,
        PayoutFrequency::AtMaturity,
    ];

    /// Human-readable label for table headers
    pub fn label(&self) -> &'static str {
        match self {
            PayoutFrequency::Daily => "Daily",
            PayoutFrequency::Monthly => "Monthly",
            PayoutFrequency::Quarterly => "Quarterly",
            PayoutFrequency::SemiAnnual => "Semi-annual",
            PayoutFrequency::Annual => "Annual",
            PayoutFrequency::AtMaturity => "At maturity",
        }
    }
}

/// Free-form rate description for a single payout frequency.
///
/// May encode a flat rate (`"15%"`) or a staged, year-indexed schedule
/// (`"26% (Y1), 22.5% (Y2), 19% (Y3)"`). Parsed lazily on access; a
/// description with no recognizable rate behaves as a zero rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateText(String);

impl RateText {
    pub fn new(text: impl Into<String>) -> Self {
        RateText(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percentage figures in order of appearance
    pub fn rates(&self) -> Vec<f64> {
        extract_rates(&self.0)
    }

    /// Arithmetic mean of the figures; `0.0` when none parse
    pub fn average(&self) -> f64 {
        average_rate(&self.0)
    }

    /// True when the schedule carries more than one figure
    pub fn is_staged(&self) -> bool {
        is_staged(&self.0)
    }
}

impl fmt::Display for RateText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RateText {
    fn from(text: &str) -> Self {
        RateText::new(text)
    }
}

/// Per-certificate rate schedule: one optional description per payout
/// frequency.
///
/// An absent slot means the payout option is not offered by the product; it
/// is not a zero rate and contributes nothing to comparisons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<RateText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<RateText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarterly: Option<RateText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semi_annual: Option<RateText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual: Option<RateText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_maturity: Option<RateText>,
}

impl RateSchedule {
    /// Description for one payout frequency, if offered
    pub fn slot(&self, frequency: PayoutFrequency) -> Option<&RateText> {
        match frequency {
            PayoutFrequency::Daily => self.daily.as_ref(),
            PayoutFrequency::Monthly => self.monthly.as_ref(),
            PayoutFrequency::Quarterly => self.quarterly.as_ref(),
            PayoutFrequency::SemiAnnual => self.semi_annual.as_ref(),
            PayoutFrequency::Annual => self.annual.as_ref(),
            PayoutFrequency::AtMaturity => self.at_maturity.as_ref(),
        }
    }

    /// Whether the product pays out at this frequency
    pub fn offers(&self, frequency: PayoutFrequency) -> bool {
        self.slot(frequency).is_some()
    }

    /// Offered frequencies with their descriptions, in canonical order
    pub fn offered(&self) -> impl Iterator<Item = (PayoutFrequency, &RateText)> {
        PayoutFrequency::ALL
            .into_iter()
            .filter_map(move |frequency| self.slot(frequency).map(|text| (frequency, text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_text_parsing() {
        let flat = RateText::new("15%");
        assert_eq!(flat.rates(), vec![15.0]);
        assert_eq!(flat.average(), 15.0);
        assert!(!flat.is_staged());

        let staged = RateText::new("26% (Y1), 22.5% (Y2), 19% (Y3)");
        assert_eq!(staged.rates(), vec![26.0, 22.5, 19.0]);
        assert_eq!(staged.average(), 22.5);
        assert!(staged.is_staged());
    }

    #[test]
    fn test_empty_schedule_offers_nothing() {
        let schedule = RateSchedule::default();
        for frequency in PayoutFrequency::ALL {
            assert!(!schedule.offers(frequency));
        }
        assert_eq!(schedule.offered().count(), 0);
    }

    #[test]
    fn test_slot_lookup() {
        let schedule = RateSchedule {
            monthly: Some(RateText::new("21.5%")),
            at_maturity: Some(RateText::new("26% (Y1), 22.5% (Y2), 19% (Y3)")),
            ..Default::default()
        };

        assert!(schedule.offers(PayoutFrequency::Monthly));
        assert!(!schedule.offers(PayoutFrequency::Daily));
        assert_eq!(
            schedule.slot(PayoutFrequency::Monthly).unwrap().as_str(),
            "21.5%"
        );

        let offered: Vec<PayoutFrequency> = schedule.offered().map(|(f, _)| f).collect();
        assert_eq!(
            offered,
            vec![PayoutFrequency::Monthly, PayoutFrequency::AtMaturity]
        );
    }
}
