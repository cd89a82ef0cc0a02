#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, InputMode, PendingAction, Screen};
use super::commands::{handle_command, parse_expense_args};
use crate::ledger::Ledger;
use crate::models::{Category, Theme};
use crate::store::Store;

fn setup() -> (App, Store) {
    (App::new(Ledger::default()), Store::open_in_memory().unwrap())
}

// ── Argument parsing ──────────────────────────────────────────

#[test]
fn test_parse_expense_args() {
    let (title, amount, category) = parse_expense_args("Lunch 200 Food").unwrap();
    assert_eq!(title, "Lunch");
    assert_eq!(amount, dec!(200));
    assert_eq!(category, Category::Food);
}

#[test]
fn test_parse_expense_args_multiword_title() {
    let (title, amount, category) = parse_expense_args("Bus ticket home 12.50 transport").unwrap();
    assert_eq!(title, "Bus ticket home");
    assert_eq!(amount, dec!(12.50));
    assert_eq!(category, Category::Transport);
}

#[test]
fn test_parse_expense_args_rejects_bad_input() {
    assert!(parse_expense_args("").is_err());
    assert!(parse_expense_args("Lunch Food").is_err());
    assert!(parse_expense_args("Lunch abc Food").is_err());
    assert!(parse_expense_args("Lunch 200 Groceries").is_err());
}

// ── Command flows ─────────────────────────────────────────────

#[test]
fn test_budget_command_creates_and_commits() {
    let (mut app, mut store) = setup();
    handle_command("budget 5000", &mut app, &mut store).unwrap();
    assert_eq!(app.ledger.budget_amount(), dec!(5000));

    // Committed at the mutation point
    let persisted = store.load_ledger().unwrap();
    assert_eq!(persisted.budget_amount(), dec!(5000));
}

#[test]
fn test_budget_command_rejects_garbage() {
    let (mut app, mut store) = setup();
    handle_command("budget lots", &mut app, &mut store).unwrap();
    assert!(app.ledger.budget.is_none());
    assert_eq!(app.status_message, "Enter a valid positive budget amount");
}

#[test]
fn test_expense_command_requires_budget() {
    let (mut app, mut store) = setup();
    handle_command("expense Lunch 200 Food", &mut app, &mut store).unwrap();
    assert!(app.ledger.expenses().is_empty());
    assert_eq!(app.status_message, "No open budget. Set a budget first");
}

#[test]
fn test_expense_command_appends_and_commits() {
    let (mut app, mut store) = setup();
    handle_command("budget 5000", &mut app, &mut store).unwrap();
    handle_command("expense Lunch 200 Food", &mut app, &mut store).unwrap();
    handle_command("e Bus 50 Transport", &mut app, &mut store).unwrap();

    assert_eq!(app.ledger.spent(), dec!(250));
    assert_eq!(app.ledger.remaining(), dec!(4750));
    assert_eq!(store.load_ledger().unwrap().expenses().len(), 2);
}

#[test]
fn test_save_command_archives_and_switches_screen() {
    let (mut app, mut store) = setup();
    handle_command("budget 1000", &mut app, &mut store).unwrap();
    handle_command("expense Rent 1200 Bills", &mut app, &mut store).unwrap();
    handle_command("save", &mut app, &mut store).unwrap();

    assert!(app.ledger.budget.is_none());
    assert_eq!(app.ledger.history.len(), 1);
    assert_eq!(app.ledger.history[0].spent, dec!(1200));
    assert_eq!(app.screen, Screen::History);
}

#[test]
fn test_delete_expense_no_confirmation() {
    let (mut app, mut store) = setup();
    handle_command("budget 1000", &mut app, &mut store).unwrap();
    handle_command("expense Lunch 200 Food", &mut app, &mut store).unwrap();

    app.expense_cursor.index = 0;
    handle_command("delete", &mut app, &mut store).unwrap();
    assert!(app.ledger.expenses().is_empty());
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_delete_month_requires_confirmation() {
    let (mut app, mut store) = setup();
    handle_command("budget 1000", &mut app, &mut store).unwrap();
    handle_command("save", &mut app, &mut store).unwrap();

    app.history_cursor.index = 0;
    handle_command("delete", &mut app, &mut store).unwrap();

    // Nothing deleted yet, confirmation is pending
    assert_eq!(app.ledger.history.len(), 1);
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert!(matches!(
        app.pending_action,
        Some(PendingAction::DeleteMonth { index: 0, .. })
    ));
}

#[test]
fn test_clear_command_requires_confirmation() {
    let (mut app, mut store) = setup();
    handle_command("budget 1000", &mut app, &mut store).unwrap();
    handle_command("clear", &mut app, &mut store).unwrap();

    assert!(app.ledger.budget.is_some());
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert!(matches!(app.pending_action, Some(PendingAction::ClearAll)));
}

#[test]
fn test_theme_command_toggles_and_persists() {
    let (mut app, mut store) = setup();
    handle_command("theme", &mut app, &mut store).unwrap();
    assert_eq!(app.ledger.theme, Theme::Dark);
    assert_eq!(store.load_ledger().unwrap().theme, Theme::Dark);

    handle_command("theme", &mut app, &mut store).unwrap();
    assert_eq!(app.ledger.theme, Theme::Light);
}

#[test]
fn test_unknown_command_suggests_closest() {
    let (mut app, mut store) = setup();
    handle_command("budgte 100", &mut app, &mut store).unwrap();
    assert!(app.status_message.contains("Unknown command"));
    assert!(app.status_message.contains(":budget"));
}

#[test]
fn test_export_command_writes_file() {
    let (mut app, mut store) = setup();
    handle_command("budget 1000", &mut app, &mut store).unwrap();
    handle_command("save", &mut app, &mut store).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    handle_command(&format!("export {}", path.display()), &mut app, &mut store).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Month,Budget,Spent\n"));
    assert_eq!(text.lines().count(), 2);
}
