//! Side-by-side comparison: per-metric winning values across a selection

use serde::{Deserialize, Serialize};

use super::metrics::{Metric, WinningValues};
use crate::catalog::Certificate;
use crate::error::EngineError;
use crate::projection::{project_returns, round_to_multiple};
use crate::rates::PayoutFrequency;

/// Minimum number of selected certificates for a meaningful comparison
pub const MIN_COMPARABLE: usize = 2;

/// One entry in a comparison selection.
///
/// Identity is the full (bank, certificate) pair: the same product held at
/// two banks counts as two distinct selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCertificate {
    pub bank: String,
    pub certificate: Certificate,
}

/// Ordered, duplicate-free set of certificates chosen for comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    entries: Vec<SelectedCertificate>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedCertificate> {
        self.entries.iter()
    }

    pub fn contains(&self, bank: &str, certificate: &Certificate) -> bool {
        self.entries
            .iter()
            .any(|e| e.bank == bank && e.certificate == *certificate)
    }

    /// Add unless already present; returns whether the entry was added
    pub fn select(&mut self, bank: &str, certificate: &Certificate) -> bool {
        if self.contains(bank, certificate) {
            return false;
        }
        self.entries.push(SelectedCertificate {
            bank: bank.to_string(),
            certificate: certificate.clone(),
        });
        true
    }

    /// Remove if present; returns whether the entry was removed
    pub fn deselect(&mut self, bank: &str, certificate: &Certificate) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|e| !(e.bank == bank && e.certificate == *certificate));
        self.entries.len() < before
    }

    /// The original selection gesture: add when absent, remove when present.
    /// Returns whether the certificate is now selected.
    pub fn toggle(&mut self, bank: &str, certificate: &Certificate) -> bool {
        if self.deselect(bank, certificate) {
            false
        } else {
            self.select(bank, certificate)
        }
    }

    /// True iff no selected certificate offers `frequency`; the view layer
    /// uses this to suppress all-dash columns.
    pub fn all_dashes(&self, frequency: PayoutFrequency) -> bool {
        self.entries
            .iter()
            .all(|e| !e.certificate.rates.offers(frequency))
    }
}

/// Compute per-metric winning values for a selection and target principal.
///
/// Fewer than [`MIN_COMPARABLE`] entries yield an empty result without
/// computing anything. Per certificate: the target principal is rounded to
/// the certificate's multiple (an invalid multiple aborts the whole
/// comparison), structural metrics and the adjusted principal are folded in,
/// and each *offered* rate slot contributes its average rate and the
/// matching projected return figure. Absent slots contribute nothing.
///
/// Pure and idempotent: repeated calls with an unchanged selection and
/// principal produce identical results.
pub fn compare(
    selection: &Selection,
    target_principal: f64,
) -> Result<WinningValues, EngineError> {
    let mut winning = WinningValues::default();
    if selection.len() < MIN_COMPARABLE {
        return Ok(winning);
    }

    for entry in selection.iter() {
        let cert = &entry.certificate;
        let adjusted_principal = round_to_multiple(target_principal, cert.multiple)?;

        winning.observe(Metric::Duration, cert.duration_years as f64);
        winning.observe(Metric::MinInvestment, cert.min_investment);
        winning.observe(Metric::Multiple, cert.multiple);
        winning.observe(Metric::YourInvestment, adjusted_principal);

        for frequency in PayoutFrequency::ALL {
            if let Some(text) = cert.rates.slot(frequency) {
                winning.observe(Metric::Rate(frequency), text.average());

                let projection =
                    project_returns(adjusted_principal, text.as_str(), cert.duration_years);
                winning.observe(Metric::Return(frequency), projection.amount(frequency));
            }
        }
    }

    Ok(winning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::{RateSchedule, RateText};

    fn certificate(
        kind: &str,
        duration_years: u32,
        min_investment: f64,
        multiple: f64,
        monthly: Option<&str>,
    ) -> Certificate {
        Certificate {
            kind: kind.to_string(),
            description: String::new(),
            duration_years,
            min_investment,
            multiple,
            rates: RateSchedule {
                monthly: monthly.map(RateText::new),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_selection_is_duplicate_free_and_ordered() {
        let cert_a = certificate("A", 3, 1000.0, 1000.0, Some("20%"));
        let cert_b = certificate("B", 1, 1000.0, 1000.0, Some("15%"));

        let mut selection = Selection::new();
        assert!(selection.select("Bank 1", &cert_a));
        assert!(!selection.select("Bank 1", &cert_a));
        assert!(selection.select("Bank 2", &cert_b));
        assert_eq!(selection.len(), 2);

        let order: Vec<&str> = selection.iter().map(|e| e.bank.as_str()).collect();
        assert_eq!(order, vec!["Bank 1", "Bank 2"]);
    }

    #[test]
    fn test_same_certificate_at_two_banks_is_two_selections() {
        let cert = certificate("A", 3, 1000.0, 1000.0, Some("20%"));

        let mut selection = Selection::new();
        selection.select("Bank 1", &cert);
        selection.select("Bank 2", &cert);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_toggle() {
        let cert = certificate("A", 3, 1000.0, 1000.0, Some("20%"));

        let mut selection = Selection::new();
        assert!(selection.toggle("Bank 1", &cert));
        assert!(selection.contains("Bank 1", &cert));
        assert!(!selection.toggle("Bank 1", &cert));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_all_dashes() {
        let cert_a = certificate("A", 3, 1000.0, 1000.0, Some("20%"));
        let cert_b = certificate("B", 1, 1000.0, 1000.0, None);

        let mut selection = Selection::new();
        selection.select("Bank 1", &cert_a);
        selection.select("Bank 2", &cert_b);

        assert!(!selection.all_dashes(PayoutFrequency::Monthly));
        assert!(selection.all_dashes(PayoutFrequency::Daily));
    }

    #[test]
    fn test_short_selection_yields_empty_result() {
        let cert = certificate("A", 3, 1000.0, 1000.0, Some("20%"));

        let mut selection = Selection::new();
        assert!(compare(&selection, 10_000.0).unwrap().is_empty());

        selection.select("Bank 1", &cert);
        assert!(compare(&selection, 10_000.0).unwrap().is_empty());
    }

    #[test]
    fn test_shorter_duration_wins() {
        let mut selection = Selection::new();
        selection.select("Bank 1", &certificate("A", 3, 1000.0, 1000.0, Some("20%")));
        selection.select("Bank 2", &certificate("B", 5, 1000.0, 1000.0, Some("20%")));

        let winning = compare(&selection, 10_000.0).unwrap();
        assert_eq!(winning.get("duration"), Some(3.0));
    }

    #[test]
    fn test_higher_rate_wins() {
        let mut selection = Selection::new();
        selection.select("Bank 1", &certificate("A", 3, 1000.0, 1000.0, Some("20%")));
        selection.select("Bank 2", &certificate("B", 3, 1000.0, 1000.0, Some("15%")));

        let winning = compare(&selection, 10_000.0).unwrap();
        assert_eq!(winning.get("monthlyInterest"), Some(20.0));
        // 10000 * 0.20 / 12
        assert_eq!(winning.get("monthlyReturn"), Some(10_000.0 * 0.20 / 12.0));
    }

    #[test]
    fn test_larger_realizable_investment_wins() {
        let mut selection = Selection::new();
        selection.select("Bank 1", &certificate("A", 1, 1000.0, 1000.0, Some("20%")));
        selection.select("Bank 2", &certificate("B", 1, 10_000.0, 10_000.0, Some("20%")));

        // 15000 rounds to 15000 with multiple 1000, but only 10000 with 10000
        let winning = compare(&selection, 15_000.0).unwrap();
        assert_eq!(winning.get("yourInvestment"), Some(15_000.0));
    }

    #[test]
    fn test_returns_use_adjusted_principal() {
        let mut selection = Selection::new();
        selection.select("Bank 1", &certificate("A", 1, 1000.0, 1000.0, Some("10%")));
        selection.select("Bank 2", &certificate("B", 1, 1000.0, 1000.0, Some("10%")));

        // 1750 rounds down to 1000 for both certificates
        let winning = compare(&selection, 1750.0).unwrap();
        assert_eq!(winning.get("monthlyReturn"), Some(1000.0 * 0.10 / 12.0));
    }

    #[test]
    fn test_absent_slot_contributes_nothing() {
        let mut selection = Selection::new();
        selection.select("Bank 1", &certificate("A", 3, 1000.0, 1000.0, Some("5%")));
        selection.select("Bank 2", &certificate("B", 3, 1000.0, 1000.0, None));

        let winning = compare(&selection, 10_000.0).unwrap();
        // Only one certificate offers monthly; its rate wins even unopposed,
        // and the certificate without the slot never counts as a 0
        assert_eq!(winning.get("monthlyInterest"), Some(5.0));
        assert_eq!(winning.get("dailyInterest"), None);
    }

    #[test]
    fn test_invalid_multiple_propagates() {
        let mut selection = Selection::new();
        selection.select("Bank 1", &certificate("A", 3, 1000.0, 1000.0, Some("20%")));
        selection.select("Bank 2", &certificate("B", 3, 1000.0, 0.0, Some("15%")));

        assert_eq!(
            compare(&selection, 10_000.0),
            Err(EngineError::InvalidMultiple { multiple: 0.0 })
        );
    }

    #[test]
    fn test_compare_is_idempotent() {
        let mut selection = Selection::new();
        selection.select("Bank 1", &certificate("A", 3, 1000.0, 1000.0, Some("20%")));
        selection.select(
            "Bank 2",
            &certificate("B", 5, 2000.0, 500.0, Some("22.5% (Y1), 18% (Y2)")),
        );

        let first = compare(&selection, 10_000.0).unwrap();
        let second = compare(&selection, 10_000.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_offered_metric_has_a_winner() {
        let mut selection = Selection::new();
        selection.select("Bank 1", &certificate("A", 3, 1000.0, 1000.0, Some("20%")));
        selection.select("Bank 2", &certificate("B", 5, 2000.0, 500.0, Some("15%")));

        let winning = compare(&selection, 10_000.0).unwrap();
        // Four structural metrics plus monthly rate and return
        assert_eq!(winning.len(), 6);
        for key in [
            "duration",
            "minInvestment",
            "multiple",
            "yourInvestment",
            "monthlyInterest",
            "monthlyReturn",
        ] {
            assert!(winning.get(key).is_some(), "missing winner for {}", key);
        }
    }
}
