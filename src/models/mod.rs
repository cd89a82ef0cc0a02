mod budget;
mod category;
mod history;
mod theme;

pub use budget::{current_month_label, month_label, today, BudgetRecord, Expense};
pub use category::Category;
pub use history::HistoryEntry;
pub use theme::Theme;
