//! Estimate projected returns for a single certificate
//!
//! Usage: cargo run --bin estimate_returns -- [AMOUNT] ["Bank::Type"]
//!
//! The single-certificate counterpart to compare_certificates: rounds the
//! target amount to the certificate's multiple and prints the projected
//! return at every offered payout frequency.

use invest_compare::{project_returns, round_to_multiple, Catalog};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let mut amount = 50_000.0_f64;
    let mut pick: Option<(String, String)> = None;

    for arg in env::args().skip(1) {
        if let Some((bank, kind)) = arg.split_once("::") {
            pick = Some((bank.to_string(), kind.to_string()));
            continue;
        }
        match arg.parse() {
            Ok(a) => amount = a,
            Err(_) => {
                eprintln!(
                    "Unrecognized argument: {} (expected an amount or \"Bank::Type\")",
                    arg
                );
                process::exit(2);
            }
        }
    }

    let catalog = match env::var("CATALOG_CSV") {
        Ok(path) => Catalog::from_csv_path(&path),
        Err(_) => Ok(Catalog::default_catalog()),
    }
    .unwrap_or_else(|e| {
        log::error!("failed to load catalog: {}", e);
        process::exit(1);
    });

    let (bank_name, cert) = match &pick {
        Some((bank_name, kind)) => match catalog.certificate(bank_name, kind) {
            Some(cert) => (bank_name.clone(), cert),
            None => {
                eprintln!("No certificate \"{}\" at \"{}\"", kind, bank_name);
                process::exit(2);
            }
        },
        None => {
            // Default to the first certificate in the catalog
            match catalog
                .banks
                .first()
                .and_then(|b| b.certificates.first().map(|c| (b.name.clone(), c)))
            {
                Some(found) => found,
                None => {
                    eprintln!("Catalog is empty");
                    process::exit(1);
                }
            }
        }
    };

    let adjusted = round_to_multiple(amount, cert.multiple).unwrap_or_else(|e| {
        log::error!("{}", e);
        process::exit(1);
    });

    println!("{} - {}", bank_name, cert.kind);
    println!("{}", cert.description);
    println!();
    println!("  Duration:       {} years", cert.duration_years);
    println!("  Min investment: {:.2}", cert.min_investment);
    println!("  Multiple:       {:.2}", cert.multiple);
    println!("  Target amount:  {:.2}", amount);
    println!("  Realizable:     {:.2}", adjusted);
    if adjusted < cert.min_investment {
        println!("  Note: realizable amount is below the minimum investment");
    }
    println!();

    let mut any = false;
    for (frequency, text) in cert.rates.offered() {
        any = true;
        let projection = project_returns(adjusted, text.as_str(), cert.duration_years);
        println!(
            "  {:<12} {:>8.2}%  -> {:>12.2}{}",
            frequency.label(),
            text.average(),
            projection.amount(frequency),
            if projection.is_staged {
                "  (staged)"
            } else {
                ""
            },
        );
        if projection.is_staged {
            println!("  {:<12} {}", "", text);
        }
    }
    if !any {
        println!("  No rate schedule on file for this certificate");
    }
}
