/// Validation failures for ledger operations. Display strings are shown
/// to the user verbatim (status bar in the TUI, stderr in the CLI) and
/// the operation leaves the ledger unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum LedgerError {
    #[error("Enter a valid positive budget amount")]
    InvalidBudgetAmount,
    #[error("No open budget. Set a budget first")]
    NoOpenBudget,
    #[error("Expense needs a description, an amount, and a category")]
    MissingExpenseFields,
    #[error("Expense amount must be a positive number")]
    InvalidExpenseAmount,
}
