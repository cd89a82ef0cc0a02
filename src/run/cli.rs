use anyhow::Result;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::ledger::Ledger;
use crate::models::{current_month_label, today};
use crate::store::Store;
use crate::ui::commands::{parse_expense_args, shellexpand};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], store: &mut Store, mut ledger: Ledger) -> Result<()> {
    match args[1].as_str() {
        "budget" => cli_budget(&args[2..], store, &mut ledger),
        "expense" => cli_expense(&args[2..], store, &mut ledger),
        "summary" | "s" => cli_summary(&ledger),
        "history" => cli_history(&ledger),
        "save" => cli_save(store, &mut ledger),
        "export" => cli_export(&args[2..], &ledger),
        "clear" => cli_clear(store, &mut ledger),
        "theme" => cli_theme(store, &mut ledger),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("monthdash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("monthdash — local-only monthly budget tracker");
    println!();
    println!("Usage: monthdash [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  budget <amount>               Set or top up this month's budget");
    println!("  expense <title> <amt> <cat>   Log an expense (cat: Food, Transport,");
    println!("                                Bills, Entertainment, Other)");
    println!("  summary                       Print this month's budget summary");
    println!("  history                       Print the month archive");
    println!("  save                          Archive this month to history");
    println!("  export [path]                 Export history to CSV");
    println!("  clear                         Clear ALL data (asks first)");
    println!("  theme                         Toggle dark/light theme");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_budget(args: &[String], store: &mut Store, ledger: &mut Ledger) -> Result<()> {
    let amount = args
        .first()
        .and_then(|a| Decimal::from_str(a).ok())
        .ok_or_else(|| anyhow::anyhow!("Usage: monthdash budget <amount>"))?;

    let month = current_month_label();
    ledger.set_budget(amount, &month)?;
    store.commit(ledger)?;
    println!(
        "Budget for {month}: {}",
        format_amount(ledger.budget_amount())
    );
    Ok(())
}

fn cli_expense(args: &[String], store: &mut Store, ledger: &mut Ledger) -> Result<()> {
    let (title, amount, category) =
        parse_expense_args(&args.join(" ")).map_err(|msg| anyhow::anyhow!(msg))?;

    ledger.add_expense(&title, amount, category, today())?;
    store.commit(ledger)?;
    println!(
        "Added: {title} ({}, {category}). Remaining: {}",
        format_amount(amount),
        format_amount(ledger.remaining())
    );
    Ok(())
}

fn cli_summary(ledger: &Ledger) -> Result<()> {
    let month = current_month_label();
    println!("monthdash — {month}");
    println!("{}", "─".repeat(40));
    println!("  Budget:     {}", format_amount(ledger.budget_amount()));
    println!("  Spent:      {}", format_amount(ledger.spent()));
    println!("  Remaining:  {}", format_amount(ledger.remaining()));
    println!("  Expenses:   {}", ledger.expenses().len());

    let totals = ledger.category_totals();
    if !totals.is_empty() {
        println!();
        println!("Spending by Category:");
        for (category, total) in &totals {
            println!("  {:<16} {}", category.as_str(), format_amount(*total));
        }
    }

    Ok(())
}

fn cli_history(ledger: &Ledger) -> Result<()> {
    if ledger.history.is_empty() {
        println!("No history available");
        return Ok(());
    }

    println!("{:<20} {:>14} {:>14}", "Month", "Budget", "Spent");
    println!("{}", "─".repeat(50));
    for entry in &ledger.history {
        println!(
            "{:<20} {:>14} {:>14}",
            entry.month,
            format_amount(entry.budget),
            format_amount(entry.spent),
        );
    }
    Ok(())
}

fn cli_save(store: &mut Store, ledger: &mut Ledger) -> Result<()> {
    let entry = ledger.save_to_history()?;
    store.commit(ledger)?;
    println!(
        "Saved {} to history (budget {}, spent {})",
        entry.month,
        format_amount(entry.budget),
        format_amount(entry.spent),
    );
    Ok(())
}

fn cli_export(args: &[String], ledger: &Ledger) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/{}", crate::export::DEFAULT_EXPORT_NAME)
        });

    let count =
        crate::export::export_history(std::path::Path::new(&output_path), &ledger.history)?;
    if count == 0 {
        println!("No history to export (wrote header only) to {output_path}");
    } else {
        println!("Exported {count} months to {output_path}");
    }
    Ok(())
}

fn cli_clear(store: &mut Store, ledger: &mut Ledger) -> Result<()> {
    print!("Clear ALL data? [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    if !matches!(answer.trim(), "y" | "Y") {
        println!("Cancelled");
        return Ok(());
    }

    ledger.clear_all();
    store.commit(ledger)?;
    println!("Cleared all data");
    Ok(())
}

fn cli_theme(store: &mut Store, ledger: &mut Ledger) -> Result<()> {
    let theme = ledger.toggle_theme();
    store.save_theme(theme)?;
    println!("Theme: {theme}");
    Ok(())
}
