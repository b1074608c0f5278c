//! Static certificate catalog: author-maintained reference data
//!
//! The catalog is loaded once at process start and treated as read-only for
//! the lifetime of the process. It is never persisted or mutated by the
//! engine.

mod data;
pub mod loader;

pub use data::{Bank, Certificate};
pub use loader::{load_catalog, load_catalog_from_reader};

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

use crate::rates::{RateSchedule, RateText};

/// The full set of banks and certificates available for comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub banks: Vec<Bank>,
}

impl Catalog {
    /// Built-in catalog matching data/certificates.csv
    pub fn default_catalog() -> Self {
        Catalog {
            banks: builtin_banks(),
        }
    }

    /// Load the catalog from the default CSV location
    pub fn from_csv() -> Result<Self, Box<dyn Error>> {
        load_catalog(loader::DEFAULT_CATALOG_PATH)
    }

    /// Load the catalog from a specific CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        load_catalog(path)
    }

    /// Find a bank by name
    pub fn bank(&self, name: &str) -> Option<&Bank> {
        self.banks.iter().find(|b| b.name == name)
    }

    /// Find a certificate by bank name and product name
    pub fn certificate(&self, bank: &str, kind: &str) -> Option<&Certificate> {
        self.bank(bank).and_then(|b| b.certificate(kind))
    }

    /// Total number of certificates across all banks
    pub fn certificate_count(&self) -> usize {
        self.banks.iter().map(|b| b.certificates.len()).sum()
    }
}

fn certificate(
    kind: &str,
    description: &str,
    duration_years: u32,
    min_investment: f64,
    multiple: f64,
    rates: RateSchedule,
) -> Certificate {
    Certificate {
        kind: kind.to_string(),
        description: description.to_string(),
        duration_years,
        min_investment,
        multiple,
        rates,
    }
}

fn rate(text: &str) -> Option<RateText> {
    Some(RateText::new(text))
}

fn builtin_banks() -> Vec<Bank> {
    vec![
        Bank {
            name: "QNB Alahli".to_string(),
            description: "Part of the Qatar National Bank Group, providing a range of banking services in Egypt.".to_string(),
            certificates: vec![
                certificate(
                    "Fixed Income Certificate",
                    "A fixed-income option for steady growth over a moderate duration.",
                    3,
                    1000.0,
                    1000.0,
                    RateSchedule {
                        monthly: rate("20%"),
                        quarterly: rate("20.25%"),
                        annual: rate("21%"),
                        ..Default::default()
                    },
                ),
                certificate(
                    "Savings Certificate",
                    "A low-risk investment option with a stable return.",
                    1,
                    1500.0,
                    500.0,
                    RateSchedule {
                        monthly: rate("19.5%"),
                        ..Default::default()
                    },
                ),
            ],
        },
        Bank {
            name: "Arab African International Bank (AAIB)".to_string(),
            description: "A regional bank offering a variety of financial services across the Middle East and North Africa.".to_string(),
            certificates: vec![
                certificate(
                    "Fixed Deposit Certificate",
                    "A secure fixed deposit certificate with a steady return.",
                    1,
                    1000.0,
                    1000.0,
                    RateSchedule {
                        at_maturity: rate("22%"),
                        ..Default::default()
                    },
                ),
                certificate(
                    "Renewable Certificate",
                    "A renewable certificate for long-term investors.",
                    2,
                    3000.0,
                    1000.0,
                    RateSchedule {
                        monthly: rate("18.75%"),
                        semi_annual: rate("19.25%"),
                        ..Default::default()
                    },
                ),
            ],
        },
        Bank {
            name: "HSBC Egypt".to_string(),
            description: "A subsidiary of HSBC Holdings, providing comprehensive banking services in Egypt.".to_string(),
            certificates: vec![
                certificate(
                    "Fixed Income Certificate",
                    "A stable and low-risk fixed-income certificate.",
                    1,
                    1500.0,
                    500.0,
                    RateSchedule {
                        monthly: rate("17.5%"),
                        quarterly: rate("17.75%"),
                        ..Default::default()
                    },
                ),
                certificate(
                    "Premium Certificate",
                    "A premium certificate with higher returns for larger investments.",
                    3,
                    5000.0,
                    1000.0,
                    RateSchedule {
                        monthly: rate("19%"),
                        annual: rate("20%"),
                        ..Default::default()
                    },
                ),
            ],
        },
        Bank {
            name: "National Bank of Egypt (NBE)".to_string(),
            description: "One of the largest banks in Egypt, offering a variety of fixed deposit and savings products.".to_string(),
            certificates: vec![
                certificate(
                    "Platinum Certificate",
                    "A three-year certificate with a declining staged payout.",
                    3,
                    1000.0,
                    1000.0,
                    RateSchedule {
                        monthly: rate("21.5%"),
                        at_maturity: rate("26% (Y1), 22.5% (Y2), 19% (Y3)"),
                        ..Default::default()
                    },
                ),
                certificate(
                    "Five-Year Certificate",
                    "A long-horizon certificate with a flat monthly payout.",
                    5,
                    1000.0,
                    1000.0,
                    RateSchedule {
                        monthly: rate("14.25%"),
                        ..Default::default()
                    },
                ),
            ],
        },
        Bank {
            name: "Banque Misr".to_string(),
            description: "A major Egyptian bank offering a wide range of investment and savings products.".to_string(),
            certificates: vec![
                certificate(
                    "Talaat Harb Certificate",
                    "A one-year certificate paying the full return at maturity.",
                    1,
                    1000.0,
                    1000.0,
                    RateSchedule {
                        at_maturity: rate("23.5%"),
                        ..Default::default()
                    },
                ),
                certificate(
                    "Ibn Misr Certificate",
                    "A three-year certificate with staged monthly payouts.",
                    3,
                    1000.0,
                    1000.0,
                    RateSchedule {
                        monthly: rate("24% (Y1), 19% (Y2), 14% (Y3)"),
                        ..Default::default()
                    },
                ),
            ],
        },
        Bank {
            name: "Commercial International Bank (CIB)".to_string(),
            description: "CIB offers competitive interest rates for various types of certificates with flexible terms.".to_string(),
            certificates: vec![
                certificate(
                    "Prime Certificate",
                    "A high-entry certificate with daily interest accrual.",
                    3,
                    100_000.0,
                    10_000.0,
                    RateSchedule {
                        daily: rate("18%"),
                        monthly: rate("18.25%"),
                        ..Default::default()
                    },
                ),
                certificate(
                    "High Yield Certificate",
                    "A high-yield certificate with a longer lock-in period.",
                    2,
                    5000.0,
                    5000.0,
                    RateSchedule {
                        quarterly: rate("20.5%"),
                        semi_annual: rate("21%"),
                        ..Default::default()
                    },
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::PayoutFrequency;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = Catalog::default_catalog();
        assert_eq!(catalog.banks.len(), 6);
        assert_eq!(catalog.certificate_count(), 12);
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::default_catalog();

        let bank = catalog.bank("National Bank of Egypt (NBE)").unwrap();
        assert_eq!(bank.certificates.len(), 2);

        let cert = catalog
            .certificate("National Bank of Egypt (NBE)", "Platinum Certificate")
            .unwrap();
        assert_eq!(cert.duration_years, 3);
        assert!(cert.rates.offers(PayoutFrequency::AtMaturity));
        assert!(cert
            .rates
            .slot(PayoutFrequency::AtMaturity)
            .unwrap()
            .is_staged());

        assert!(catalog.bank("Unknown Bank").is_none());
    }
}
