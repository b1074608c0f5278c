//! Invest Compare CLI
//!
//! Demo driver: load the certificate catalog, compare a selection of
//! certificates, and estimate returns for a single one.

use anyhow::anyhow;
use invest_compare::{
    project_returns, round_to_multiple, Catalog, CompareSession, Metric, PayoutFrequency,
    WinningValues,
};
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Invest Compare v0.1.0");
    println!("=====================\n");

    // Optional CSV path as first argument; built-in catalog otherwise
    let catalog = match env::args().nth(1) {
        Some(path) => Catalog::from_csv_path(&path).map_err(|e| anyhow!("{e}"))?,
        None => Catalog::default_catalog(),
    };

    let target: f64 = env::var("TARGET_AMOUNT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(50_000.0);

    println!(
        "Catalog: {} banks, {} certificates",
        catalog.banks.len(),
        catalog.certificate_count()
    );
    println!("Target amount: {:.2}\n", target);

    // Compare the first certificate of each of the first three banks
    let mut session = CompareSession::new(target);
    for bank in catalog.banks.iter().take(3) {
        if let Some(cert) = bank.certificates.first() {
            session.toggle(&bank.name, cert)?;
        }
    }
    if session.selection().len() < 2 {
        return Err(anyhow!("catalog has too few certificates to compare"));
    }
    session.open()?;

    println!("Comparing:");
    for (i, entry) in session.selection().iter().enumerate() {
        println!("  [{}] {} - {}", i + 1, entry.bank, entry.certificate.kind);
    }
    println!();

    print_comparison(&session);
    print_estimate(&session, target)?;

    Ok(())
}

fn cell(winning: &WinningValues, key: &str, value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) => {
            if winning.is_winning(key, v) {
                format!("{:.2} *", v)
            } else {
                format!("{:.2}", v)
            }
        }
    }
}

fn print_comparison(session: &CompareSession) {
    let winning = session.winning_values();
    let entries: Vec<_> = session.selection().iter().collect();
    let target = session.target_principal();

    print!("{:<24}", "Metric (* = best)");
    for i in 1..=entries.len() {
        print!(" {:>16}", format!("[{}]", i));
    }
    println!();
    println!("{}", "-".repeat(24 + 17 * entries.len()));

    let mut rows: Vec<(String, &'static str, Vec<Option<f64>>)> = vec![
        (
            "Duration (years)".to_string(),
            Metric::Duration.key(),
            entries
                .iter()
                .map(|e| Some(e.certificate.duration_years as f64))
                .collect(),
        ),
        (
            "Min investment".to_string(),
            Metric::MinInvestment.key(),
            entries
                .iter()
                .map(|e| Some(e.certificate.min_investment))
                .collect(),
        ),
        (
            "Multiple".to_string(),
            Metric::Multiple.key(),
            entries
                .iter()
                .map(|e| Some(e.certificate.multiple))
                .collect(),
        ),
        (
            "Your investment".to_string(),
            Metric::YourInvestment.key(),
            entries
                .iter()
                .map(|e| round_to_multiple(target, e.certificate.multiple).ok())
                .collect(),
        ),
    ];

    for frequency in PayoutFrequency::ALL {
        if session.selection().all_dashes(frequency) {
            continue;
        }

        rows.push((
            format!("{} rate (%)", frequency.label()),
            Metric::Rate(frequency).key(),
            entries
                .iter()
                .map(|e| e.certificate.rates.slot(frequency).map(|t| t.average()))
                .collect(),
        ));
        rows.push((
            format!("{} return", frequency.label()),
            Metric::Return(frequency).key(),
            entries
                .iter()
                .map(|e| {
                    let cert = &e.certificate;
                    let adjusted = round_to_multiple(target, cert.multiple).ok()?;
                    let text = cert.rates.slot(frequency)?;
                    Some(
                        project_returns(adjusted, text.as_str(), cert.duration_years)
                            .amount(frequency),
                    )
                })
                .collect(),
        ));
    }

    for (label, key, values) in rows {
        print!("{:<24}", label);
        for value in values {
            print!(" {:>16}", cell(winning, key, value));
        }
        println!();
    }
}

fn print_estimate(session: &CompareSession, target: f64) -> anyhow::Result<()> {
    let entry = session
        .selection()
        .iter()
        .next()
        .ok_or_else(|| anyhow!("empty selection"))?;
    let cert = &entry.certificate;

    let adjusted = round_to_multiple(target, cert.multiple)?;
    println!("\nEstimate for {} - {}:", entry.bank, cert.kind);
    println!("  Realizable investment: {:.2} (target {:.2})", adjusted, target);

    for (frequency, text) in cert.rates.offered() {
        let projection = project_returns(adjusted, text.as_str(), cert.duration_years);
        println!(
            "  {:<12} {:>8.2}% -> {:>12.2}{}",
            frequency.label(),
            text.average(),
            projection.amount(frequency),
            if projection.is_staged { "  (staged)" } else { "" },
        );
    }

    Ok(())
}
