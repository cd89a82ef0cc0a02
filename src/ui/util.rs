use rust_decimal::Decimal;

/// Rupee rendering as the dashboard shows it: Indian digit grouping,
/// no forced paise. e.g. `1234567.5` → `"₹12,34,567.5"`, `200` → `"₹200"`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = val.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::from("₹");
    if rounded < Decimal::ZERO {
        out.push('-');
    }
    out.push_str(&group_lakhs(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// en-IN grouping: the last three digits form one group, the rest pairs.
fn group_lakhs(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Selection plus scroll offset over one scrollable table. The dashboard
/// keeps one for the expense list and one for the history archive.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ListCursor {
    pub(crate) index: usize,
    pub(crate) scroll: usize,
}

impl ListCursor {
    pub(crate) fn down(&mut self, len: usize, page: usize) {
        if self.index + 1 < len {
            self.index += 1;
            if self.index >= self.scroll + page {
                self.scroll = self.index.saturating_sub(page.saturating_sub(1));
            }
        }
    }

    pub(crate) fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
        if self.index < self.scroll {
            self.scroll = self.index;
        }
    }

    pub(crate) fn top(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn bottom(&mut self, len: usize, page: usize) {
        if len > 0 {
            self.index = len - 1;
            self.scroll = self.index.saturating_sub(page.saturating_sub(1));
        }
    }

    /// Pull the selection back inside the list after a deletion or archive.
    pub(crate) fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
        if self.scroll > self.index {
            self.scroll = self.index;
        }
    }
}
