//! Load the certificate catalog from certificates.csv

use super::{Bank, Catalog, Certificate};
use crate::rates::{RateSchedule, RateText};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Default catalog location relative to the crate root
pub const DEFAULT_CATALOG_PATH: &str = "data/certificates.csv";

/// Raw CSV row matching certificates.csv columns.
///
/// One row per certificate; consecutive rows with the same bank name are
/// grouped under one bank. Empty rate cells mean the payout option is not
/// offered.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Bank")]
    bank: String,
    #[serde(rename = "BankDescription")]
    bank_description: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "DurationYears")]
    duration_years: u32,
    #[serde(rename = "MinInvestment")]
    min_investment: f64,
    #[serde(rename = "Multiple")]
    multiple: f64,
    #[serde(rename = "DailyRate")]
    daily: String,
    #[serde(rename = "MonthlyRate")]
    monthly: String,
    #[serde(rename = "QuarterlyRate")]
    quarterly: String,
    #[serde(rename = "SemiAnnualRate")]
    semi_annual: String,
    #[serde(rename = "AnnualRate")]
    annual: String,
    #[serde(rename = "AtMaturityRate")]
    at_maturity: String,
}

impl CsvRow {
    fn to_certificate(&self) -> Result<Certificate, Box<dyn Error>> {
        if self.duration_years == 0 {
            return Err(format!("{}: DurationYears must be positive", self.kind).into());
        }
        if self.min_investment <= 0.0 {
            return Err(format!("{}: MinInvestment must be positive", self.kind).into());
        }
        if self.multiple <= 0.0 {
            return Err(format!("{}: Multiple must be positive", self.kind).into());
        }

        Ok(Certificate {
            kind: self.kind.clone(),
            description: self.description.clone(),
            duration_years: self.duration_years,
            min_investment: self.min_investment,
            multiple: self.multiple,
            rates: RateSchedule {
                daily: rate_slot(&self.daily),
                monthly: rate_slot(&self.monthly),
                quarterly: rate_slot(&self.quarterly),
                semi_annual: rate_slot(&self.semi_annual),
                annual: rate_slot(&self.annual),
                at_maturity: rate_slot(&self.at_maturity),
            },
        })
    }
}

/// An empty cell or a bare dash means "not offered"
fn rate_slot(raw: &str) -> Option<RateText> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        None
    } else {
        Some(RateText::new(trimmed))
    }
}

/// Load the catalog from a CSV file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    collect_catalog(reader)
}

/// Load the catalog from any reader (e.g. string buffer, network stream)
pub fn load_catalog_from_reader<R: std::io::Read>(reader: R) -> Result<Catalog, Box<dyn Error>> {
    collect_catalog(Reader::from_reader(reader))
}

fn collect_catalog<R: std::io::Read>(mut reader: Reader<R>) -> Result<Catalog, Box<dyn Error>> {
    let mut banks: Vec<Bank> = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let cert = row.to_certificate()?;

        if let Some(bank) = banks.last_mut() {
            if bank.name == row.bank {
                bank.certificates.push(cert);
                continue;
            }
        }
        banks.push(Bank {
            name: row.bank,
            description: row.bank_description,
            certificates: vec![cert],
        });
    }

    let catalog = Catalog { banks };
    log::info!(
        "loaded {} certificates across {} banks",
        catalog.certificate_count(),
        catalog.banks.len()
    );
    Ok(catalog)
}
