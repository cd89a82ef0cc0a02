use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An immutable snapshot of a past month's budget vs. actual spend.
/// `spent` is captured at archival time and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub month: String,
    pub budget: Decimal,
    pub spent: Decimal,
}

impl HistoryEntry {
    pub fn new(month: String, budget: Decimal, spent: Decimal) -> Self {
        Self {
            month,
            budget,
            spent,
        }
    }
}
