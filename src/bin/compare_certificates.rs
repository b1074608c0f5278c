//! Compare selected certificates side by side and mark winning values
//!
//! Usage: cargo run --bin compare_certificates -- [--json] [AMOUNT] ["Bank::Type" ...]
//!
//! With no selections given, the first certificate of every bank in the
//! catalog is compared. Set CATALOG_CSV to load a catalog file instead of
//! the built-in data.

use invest_compare::{
    compare, project_returns, round_to_multiple, Catalog, Metric, PayoutFrequency, Selection,
};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let mut json_output = false;
    let mut amount = 50_000.0_f64;
    let mut picks: Vec<(String, String)> = Vec::new();

    for arg in env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
            continue;
        }
        if let Some((bank, kind)) = arg.split_once("::") {
            picks.push((bank.to_string(), kind.to_string()));
            continue;
        }
        match arg.parse() {
            Ok(a) => amount = a,
            Err(_) => {
                eprintln!(
                    "Unrecognized argument: {} (expected --json, an amount, or \"Bank::Type\")",
                    arg
                );
                process::exit(2);
            }
        }
    }

    let catalog = load_catalog();

    let mut selection = Selection::new();
    if picks.is_empty() {
        for bank in &catalog.banks {
            if let Some(cert) = bank.certificates.first() {
                selection.select(&bank.name, cert);
            }
        }
    } else {
        for (bank_name, kind) in &picks {
            match catalog.certificate(bank_name, kind) {
                Some(cert) => {
                    selection.select(bank_name, cert);
                }
                None => {
                    eprintln!("No certificate \"{}\" at \"{}\"", kind, bank_name);
                    process::exit(2);
                }
            }
        }
    }

    let winning = match compare(&selection, amount) {
        Ok(winning) => winning,
        Err(e) => {
            log::error!("comparison failed: {}", e);
            process::exit(1);
        }
    };

    if json_output {
        let out = serde_json::json!({
            "targetAmount": amount,
            "selection": selection,
            "winningValues": winning,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).expect("serialize comparison")
        );
        return;
    }

    println!("Comparing {} certificates at {:.2}", selection.len(), amount);

    for (i, entry) in selection.iter().enumerate() {
        let cert = &entry.certificate;
        // Already validated by compare above
        let adjusted = round_to_multiple(amount, cert.multiple).expect("validated multiple");

        println!("\n{}", "=".repeat(60));
        println!("[{}] {} - {}", i + 1, entry.bank, cert.kind);
        println!("{}", "=".repeat(60));

        print_line(
            "Duration (years)",
            cert.duration_years as f64,
            winning.is_winning(Metric::Duration.key(), cert.duration_years as f64),
        );
        print_line(
            "Min investment",
            cert.min_investment,
            winning.is_winning(Metric::MinInvestment.key(), cert.min_investment),
        );
        print_line(
            "Multiple",
            cert.multiple,
            winning.is_winning(Metric::Multiple.key(), cert.multiple),
        );
        print_line(
            "Your investment",
            adjusted,
            winning.is_winning(Metric::YourInvestment.key(), adjusted),
        );

        for frequency in PayoutFrequency::ALL {
            if let Some(text) = cert.rates.slot(frequency) {
                let rate = text.average();
                let projection = project_returns(adjusted, text.as_str(), cert.duration_years);
                let figure = projection.amount(frequency);

                print_line(
                    &format!("{} rate (%)", frequency.label()),
                    rate,
                    winning.is_winning(Metric::Rate(frequency).key(), rate),
                );
                print_line(
                    &format!("{} return", frequency.label()),
                    figure,
                    winning.is_winning(Metric::Return(frequency).key(), figure),
                );
                if projection.is_staged {
                    println!("  {:<22} ({})", "", text);
                }
            }
        }
    }

    println!("\n* = best value across the selection");
}

fn load_catalog() -> Catalog {
    let result = match env::var("CATALOG_CSV") {
        Ok(path) => Catalog::from_csv_path(&path),
        Err(_) => Ok(Catalog::default_catalog()),
    };

    result.unwrap_or_else(|e| {
        log::error!("failed to load catalog: {}", e);
        process::exit(1);
    })
}

fn print_line(label: &str, value: f64, is_best: bool) {
    println!(
        "  {:<22} {:>14.2}{}",
        label,
        value,
        if is_best { "  *" } else { "" }
    );
}
