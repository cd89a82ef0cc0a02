#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

const NOW: &str = "January 2024";

fn ledger_with_budget(amount: Decimal) -> Ledger {
    let mut ledger = Ledger::default();
    ledger.set_budget(amount, NOW).unwrap();
    ledger
}

// ── set_budget ────────────────────────────────────────────────

#[test]
fn test_set_budget_creates_record() {
    let ledger = ledger_with_budget(dec!(5000));
    let budget = ledger.budget.as_ref().unwrap();
    assert_eq!(budget.month, NOW);
    assert_eq!(budget.amount, dec!(5000));
    assert!(budget.expenses.is_empty());
}

#[test]
fn test_set_budget_tops_up_same_month() {
    let mut ledger = ledger_with_budget(dec!(1000));
    ledger.set_budget(dec!(500), NOW).unwrap();
    assert_eq!(ledger.budget_amount(), dec!(1500));
}

#[test]
fn test_set_budget_replaces_stale_month() {
    let mut ledger = ledger_with_budget(dec!(1000));
    ledger
        .add_expense("Lunch", dec!(100), Category::Food, "2024-01-02".into())
        .unwrap();
    ledger.set_budget(dec!(2000), "February 2024").unwrap();
    let budget = ledger.budget.as_ref().unwrap();
    assert_eq!(budget.month, "February 2024");
    assert_eq!(budget.amount, dec!(2000));
    assert!(budget.expenses.is_empty());
}

#[test]
fn test_set_budget_rejects_non_positive() {
    let mut ledger = Ledger::default();
    assert_eq!(
        ledger.set_budget(Decimal::ZERO, NOW),
        Err(LedgerError::InvalidBudgetAmount)
    );
    assert_eq!(
        ledger.set_budget(dec!(-10), NOW),
        Err(LedgerError::InvalidBudgetAmount)
    );
    assert!(ledger.budget.is_none());
}

// ── add_expense / delete_expense ──────────────────────────────

#[test]
fn test_add_expense_appends_in_order() {
    let mut ledger = ledger_with_budget(dec!(5000));
    ledger
        .add_expense("Lunch", dec!(200), Category::Food, "2024-01-02".into())
        .unwrap();
    ledger
        .add_expense("Bus", dec!(50), Category::Transport, "2024-01-03".into())
        .unwrap();

    assert_eq!(ledger.expenses().len(), 2);
    assert_eq!(ledger.spent(), dec!(250));
    assert_eq!(ledger.remaining(), dec!(4750));
    assert_eq!(
        ledger.category_totals(),
        vec![
            (Category::Food, dec!(200)),
            (Category::Transport, dec!(50)),
        ]
    );
}

#[test]
fn test_add_expense_without_budget_fails() {
    let mut ledger = Ledger::default();
    assert_eq!(
        ledger.add_expense("Lunch", dec!(10), Category::Food, "2024-01-02".into()),
        Err(LedgerError::NoOpenBudget)
    );
}

#[test]
fn test_add_expense_validates_fields() {
    let mut ledger = ledger_with_budget(dec!(100));
    assert_eq!(
        ledger.add_expense("  ", dec!(10), Category::Food, "2024-01-02".into()),
        Err(LedgerError::MissingExpenseFields)
    );
    assert_eq!(
        ledger.add_expense("Lunch", Decimal::ZERO, Category::Food, "2024-01-02".into()),
        Err(LedgerError::InvalidExpenseAmount)
    );
    assert_eq!(
        ledger.add_expense("Lunch", dec!(-5), Category::Food, "2024-01-02".into()),
        Err(LedgerError::InvalidExpenseAmount)
    );
    assert!(ledger.expenses().is_empty());
}

#[test]
fn test_add_expense_trims_title() {
    let mut ledger = ledger_with_budget(dec!(100));
    ledger
        .add_expense("  Coffee  ", dec!(4), Category::Food, "2024-01-02".into())
        .unwrap();
    assert_eq!(ledger.expenses()[0].title, "Coffee");
}

#[test]
fn test_delete_expense_preserves_order_of_rest() {
    let mut ledger = ledger_with_budget(dec!(1000));
    for (title, amount) in [("a", dec!(1)), ("b", dec!(2)), ("c", dec!(3))] {
        ledger
            .add_expense(title, amount, Category::Other, "2024-01-02".into())
            .unwrap();
    }

    let removed = ledger.delete_expense(1).unwrap();
    assert_eq!(removed.title, "b");
    let titles: Vec<&str> = ledger.expenses().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c"]);
    assert_eq!(ledger.spent(), dec!(4));
}

#[test]
fn test_delete_expense_out_of_range_is_noop() {
    let mut ledger = ledger_with_budget(dec!(1000));
    ledger
        .add_expense("a", dec!(1), Category::Other, "2024-01-02".into())
        .unwrap();
    assert!(ledger.delete_expense(5).is_none());
    assert_eq!(ledger.expenses().len(), 1);

    let mut empty = Ledger::default();
    assert!(empty.delete_expense(0).is_none());
}

// ── Archival ──────────────────────────────────────────────────

#[test]
fn test_save_to_history_snapshots_spent() {
    let mut ledger = ledger_with_budget(dec!(1000));
    ledger
        .add_expense("Rent", dec!(1200), Category::Bills, "2024-01-02".into())
        .unwrap();
    assert_eq!(ledger.remaining(), dec!(-200));

    let entry = ledger.save_to_history().unwrap();
    assert_eq!(entry.month, NOW);
    assert_eq!(entry.budget, dec!(1000));
    assert_eq!(entry.spent, dec!(1200));
    assert!(ledger.budget.is_none());
    assert_eq!(ledger.history.len(), 1);
}

#[test]
fn test_save_to_history_without_budget_fails() {
    let mut ledger = Ledger::default();
    assert_eq!(ledger.save_to_history(), Err(LedgerError::NoOpenBudget));
    assert!(ledger.history.is_empty());
}

#[test]
fn test_archived_entry_unaffected_by_new_budget() {
    let mut ledger = ledger_with_budget(dec!(500));
    ledger
        .add_expense("a", dec!(100), Category::Food, "2024-01-02".into())
        .unwrap();
    ledger.save_to_history().unwrap();

    ledger.set_budget(dec!(9000), "February 2024").unwrap();
    ledger
        .add_expense("b", dec!(700), Category::Bills, "2024-02-01".into())
        .unwrap();

    assert_eq!(ledger.history[0].budget, dec!(500));
    assert_eq!(ledger.history[0].spent, dec!(100));
}

#[test]
fn test_rollover_archives_stale_budget() {
    let mut ledger = ledger_with_budget(dec!(1000));
    ledger
        .add_expense("a", dec!(300), Category::Food, "2024-01-02".into())
        .unwrap();

    let entry = ledger.rollover_if_needed("February 2024").unwrap();
    assert_eq!(entry.month, NOW);
    assert_eq!(entry.spent, dec!(300));
    assert!(ledger.budget.is_none());
    assert_eq!(ledger.history.len(), 1);
}

#[test]
fn test_rollover_same_month_is_noop() {
    let mut ledger = ledger_with_budget(dec!(1000));
    assert!(ledger.rollover_if_needed(NOW).is_none());
    assert!(ledger.budget.is_some());
    assert!(ledger.history.is_empty());
}

#[test]
fn test_rollover_without_budget_is_noop() {
    let mut ledger = Ledger::default();
    assert!(ledger.rollover_if_needed(NOW).is_none());
}

// ── History / clear / theme ───────────────────────────────────

#[test]
fn test_delete_month() {
    let mut ledger = Ledger::default();
    for month in ["January 2024", "February 2024", "March 2024"] {
        ledger.set_budget(dec!(100), month).unwrap();
        ledger.save_to_history().unwrap();
    }

    let removed = ledger.delete_month(1).unwrap();
    assert_eq!(removed.month, "February 2024");
    let months: Vec<&str> = ledger.history.iter().map(|h| h.month.as_str()).collect();
    assert_eq!(months, vec!["January 2024", "March 2024"]);

    assert!(ledger.delete_month(10).is_none());
    assert_eq!(ledger.history.len(), 2);
}

#[test]
fn test_clear_all_keeps_theme() {
    let mut ledger = ledger_with_budget(dec!(100));
    ledger.save_to_history().unwrap();
    ledger.toggle_theme();

    ledger.clear_all();
    assert!(ledger.budget.is_none());
    assert!(ledger.history.is_empty());
    assert_eq!(ledger.theme, crate::models::Theme::Dark);
}

#[test]
fn test_toggle_theme_roundtrip() {
    let mut ledger = Ledger::default();
    assert_eq!(ledger.toggle_theme(), crate::models::Theme::Dark);
    assert_eq!(ledger.toggle_theme(), crate::models::Theme::Light);
}

// ── Derived values with no budget ─────────────────────────────

#[test]
fn test_derived_values_default_to_zero() {
    let ledger = Ledger::default();
    assert_eq!(ledger.budget_amount(), Decimal::ZERO);
    assert_eq!(ledger.spent(), Decimal::ZERO);
    assert_eq!(ledger.remaining(), Decimal::ZERO);
    assert!(ledger.category_totals().is_empty());
    assert!(ledger.expenses().is_empty());
}
