use crate::ledger::Ledger;
use crate::models::current_month_label;
use crate::ui::theme::{self, Palette};
use crate::ui::util::ListCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    History,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::History]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::History => write!(f, "History"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Destructive action awaiting user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    ClearAll,
    DeleteMonth { index: usize, month: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) current_month: String,

    pub(crate) ledger: Ledger,

    // Cursors
    pub(crate) expense_cursor: ListCursor,
    pub(crate) history_cursor: ListCursor,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(ledger: Ledger) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            current_month: current_month_label(),

            ledger,

            expense_cursor: ListCursor::default(),
            history_cursor: ListCursor::default(),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn palette(&self) -> &'static Palette {
        theme::palette(self.ledger.theme)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Keep cursors inside their lists after a deletion or archive.
    pub(crate) fn clamp_cursors(&mut self) {
        let expenses = self.ledger.expenses().len();
        self.expense_cursor.clamp(expenses);
        let history = self.ledger.history.len();
        self.history_cursor.clamp(history);
    }

    /// Queue a destructive action behind a y/N confirmation.
    pub(crate) fn request_confirm(&mut self, message: impl Into<String>, action: PendingAction) {
        self.confirm_message = message.into();
        self.pending_action = Some(action);
        self.input_mode = InputMode::Confirm;
    }
}
