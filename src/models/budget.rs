use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// The open ledger for the current calendar month. At most one exists
/// at a time; it is created when a budget is first set and destroyed
/// when the month is archived or all data is cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// Human-readable label, e.g. "January 2024". Also the rollover key.
    pub month: String,
    pub amount: Decimal,
    pub expenses: Vec<Expense>,
}

/// A single dated, categorized outflow against the open budget.
/// Appended on creation, removed by index, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub title: String,
    pub amount: Decimal,
    pub category: Category,
    /// Format: "YYYY-MM-DD"
    pub date: String,
}

impl BudgetRecord {
    pub fn new(month: String, amount: Decimal) -> Self {
        Self {
            month,
            amount,
            expenses: Vec::new(),
        }
    }

    /// Sum of all expense amounts. Recomputed on demand, never stored.
    pub fn spent(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget minus spend. Negative when overspent.
    pub fn remaining(&self) -> Decimal {
        self.amount - self.spent()
    }

    /// Per-category totals, in order of each category's first occurrence
    /// in the expense list.
    pub fn category_totals(&self) -> Vec<(Category, Decimal)> {
        let mut totals: Vec<(Category, Decimal)> = Vec::new();
        for expense in &self.expenses {
            match totals.iter_mut().find(|(c, _)| *c == expense.category) {
                Some((_, total)) => *total += expense.amount,
                None => totals.push((expense.category, expense.amount)),
            }
        }
        totals
    }
}

/// Month label for a point in time, e.g. "January 2024". `%B` renders
/// fixed English month names, so labels are stable across sessions and
/// machines and string equality is a sound rollover key.
pub fn month_label(at: DateTime<Local>) -> String {
    at.format("%B %Y").to_string()
}

pub fn current_month_label() -> String {
    month_label(Local::now())
}

/// Today's date in "YYYY-MM-DD" form, used as the default expense date.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
