use colored::*;
use ledgerview::{DashboardView, FetchState, ReportsView, TransactionKind};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn dashboard(view: &DashboardView) {
    println!("{}", "Dashboard".bold().cyan());
    println!();
    for stat in view.stats() {
        println!("{:<16} {}", stat.label, stat.value.bold());
    }
    println!();

    let Some(transactions) = settled(view.transactions()) else {
        return;
    };
    println!("{:<6} {:<12} {:>10} TYPE", "ID", "DATE", "AMOUNT");
    for tx in transactions {
        let kind = match tx.kind {
            TransactionKind::Income => "income".green(),
            TransactionKind::Expense => "expense".red(),
        };
        println!(
            "{:<6} {:<12} {:>10} {}",
            tx.id,
            tx.date.to_string(),
            tx.amount,
            kind
        );
    }
}

pub fn reports(view: &ReportsView) {
    println!("{}", "Reports".bold().cyan());
    println!();

    let Some(reports) = settled(view.reports()) else {
        return;
    };
    println!("{:<6} {:<24} {:>10}", "ID", "NAME", "VALUE");
    for report in reports {
        println!("{:<6} {:<24} {:>10}", report.id, report.name, report.value);
    }
}

/// Print the loading or error line and return the data if there is any.
fn settled<T>(state: &FetchState<Vec<T>>) -> Option<&Vec<T>> {
    if state.is_loading() {
        println!("{}", "Loading...".dimmed());
        return None;
    }
    if let Some(message) = state.error() {
        println!("{}", message.red());
        return None;
    }
    match state.data() {
        Some(items) if !items.is_empty() => Some(items),
        _ => {
            println!("{}", "No data".dimmed());
            None
        }
    }
}
