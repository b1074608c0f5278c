//! Certificate and bank data structures

use serde::{Deserialize, Serialize};

use crate::rates::RateSchedule;

/// A fixed-income certificate of deposit offered by a bank.
///
/// Immutable reference data; the engine never mutates a certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Product name, e.g. "Platinum Certificate"
    pub kind: String,

    /// Short product description
    pub description: String,

    /// Term in whole years
    pub duration_years: u32,

    /// Smallest amount the bank accepts
    pub min_investment: f64,

    /// Permitted investment amounts are exact multiples of this value
    pub multiple: f64,

    /// Offered payout frequencies with their rate descriptions
    pub rates: RateSchedule,
}

/// A bank grouping one or more certificates.
///
/// Carries no computational weight beyond pairing with a certificate for
/// identity: the same product held at two banks is two distinct selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub name: String,
    pub description: String,
    pub certificates: Vec<Certificate>,
}

impl Bank {
    /// Find a certificate by product name
    pub fn certificate(&self, kind: &str) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::RateText;

    #[test]
    fn test_certificate_lookup() {
        let bank = Bank {
            name: "Test Bank".to_string(),
            description: "A bank".to_string(),
            certificates: vec![Certificate {
                kind: "Fixed Income Certificate".to_string(),
                description: "Steady growth".to_string(),
                duration_years: 3,
                min_investment: 1000.0,
                multiple: 1000.0,
                rates: RateSchedule {
                    monthly: Some(RateText::new("20%")),
                    ..Default::default()
                },
            }],
        };

        assert!(bank.certificate("Fixed Income Certificate").is_some());
        assert!(bank.certificate("Missing").is_none());
    }
}
