use serde::{Deserialize, Serialize};

/// Fixed set of expense categories offered in the add-expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Bills,
            Self::Entertainment,
            Self::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive parse of a category name.
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "bills" => Some(Self::Bills),
            "entertainment" => Some(Self::Entertainment),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
