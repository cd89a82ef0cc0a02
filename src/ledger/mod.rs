mod error;

pub(crate) use error::LedgerError;

use rust_decimal::Decimal;

use crate::models::{BudgetRecord, Category, Expense, HistoryEntry, Theme};

/// The application state container: the open budget (if any), the history
/// archive, and the theme preference. Every mutation goes through a method
/// here; none of them touch storage. Callers persist at commit points
/// after a successful mutation.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ledger {
    pub(crate) budget: Option<BudgetRecord>,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) theme: Theme,
}

impl Ledger {
    pub(crate) fn new(
        budget: Option<BudgetRecord>,
        history: Vec<HistoryEntry>,
        theme: Theme,
    ) -> Self {
        Self {
            budget,
            history,
            theme,
        }
    }

    /// Archive the stored budget when its month label no longer matches
    /// `now_label`. Invoked once at application start, not per view.
    /// Returns the entry appended to history, if any.
    pub(crate) fn rollover_if_needed(&mut self, now_label: &str) -> Option<HistoryEntry> {
        match &self.budget {
            Some(open) if open.month != now_label => self.archive_open_budget(),
            _ => None,
        }
    }

    /// Set the budget for the current month, or top up an existing one.
    /// A record for a different month is replaced outright; rollover at
    /// startup normally archives it first.
    pub(crate) fn set_budget(
        &mut self,
        amount: Decimal,
        now_label: &str,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidBudgetAmount);
        }
        match &mut self.budget {
            Some(open) if open.month == now_label => open.amount += amount,
            _ => self.budget = Some(BudgetRecord::new(now_label.to_string(), amount)),
        }
        Ok(())
    }

    pub(crate) fn add_expense(
        &mut self,
        title: &str,
        amount: Decimal,
        category: Category,
        date: String,
    ) -> Result<(), LedgerError> {
        let open = self.budget.as_mut().ok_or(LedgerError::NoOpenBudget)?;
        let title = title.trim();
        if title.is_empty() {
            return Err(LedgerError::MissingExpenseFields);
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidExpenseAmount);
        }
        open.expenses.push(Expense {
            title: title.to_string(),
            amount,
            category,
            date,
        });
        Ok(())
    }

    /// Remove the expense at `index`. Out-of-range indices are a no-op.
    pub(crate) fn delete_expense(&mut self, index: usize) -> Option<Expense> {
        let open = self.budget.as_mut()?;
        if index < open.expenses.len() {
            Some(open.expenses.remove(index))
        } else {
            None
        }
    }

    /// Archive the open budget into history and clear it. `spent` is a
    /// snapshot of the expense sum at this moment; later mutations of a
    /// new budget never alter the entry.
    pub(crate) fn save_to_history(&mut self) -> Result<HistoryEntry, LedgerError> {
        self.archive_open_budget().ok_or(LedgerError::NoOpenBudget)
    }

    fn archive_open_budget(&mut self) -> Option<HistoryEntry> {
        let open = self.budget.take()?;
        let spent = open.spent();
        let entry = HistoryEntry::new(open.month, open.amount, spent);
        self.history.push(entry.clone());
        Some(entry)
    }

    /// Remove the history entry at `index`. Out-of-range indices are a no-op.
    pub(crate) fn delete_month(&mut self, index: usize) -> Option<HistoryEntry> {
        if index < self.history.len() {
            Some(self.history.remove(index))
        } else {
            None
        }
    }

    /// Discard the open budget and the entire archive. Theme is kept.
    pub(crate) fn clear_all(&mut self) {
        self.budget = None;
        self.history.clear();
    }

    pub(crate) fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    // ── Derived values ───────────────────────────────────────

    pub(crate) fn budget_amount(&self) -> Decimal {
        self.budget.as_ref().map_or(Decimal::ZERO, |b| b.amount)
    }

    pub(crate) fn spent(&self) -> Decimal {
        self.budget.as_ref().map_or(Decimal::ZERO, |b| b.spent())
    }

    pub(crate) fn remaining(&self) -> Decimal {
        self.budget.as_ref().map_or(Decimal::ZERO, |b| b.remaining())
    }

    pub(crate) fn category_totals(&self) -> Vec<(Category, Decimal)> {
        self.budget
            .as_ref()
            .map_or_else(Vec::new, |b| b.category_totals())
    }

    pub(crate) fn expenses(&self) -> &[Expense] {
        self.budget.as_ref().map_or(&[], |b| b.expenses.as_slice())
    }
}

#[cfg(test)]
mod tests;
