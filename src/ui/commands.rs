use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use std::str::FromStr;

use super::app::{App, PendingAction, Screen};
use crate::models::{today, Category};
use crate::store::Store;
use crate::ui::util::format_amount;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit monthdash", cmd_quit, r);
    register_command!("quit", "Quit monthdash", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("hist", "Go to History", cmd_history, r);
    register_command!("history", "Go to History", cmd_history, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "budget",
        "Set or top up this month's budget (e.g. :budget 5000)",
        cmd_budget,
        r
    );
    register_command!(
        "b",
        "Set or top up this month's budget (e.g. :b 5000)",
        cmd_budget,
        r
    );
    register_command!(
        "expense",
        "Add an expense (e.g. :expense Lunch 200 Food)",
        cmd_expense,
        r
    );
    register_command!("e", "Add an expense (e.g. :e Lunch 200 Food)", cmd_expense, r);
    register_command!(
        "delete",
        "Delete the selected expense or history month",
        cmd_delete,
        r
    );
    register_command!(
        "save",
        "Archive this month to history and clear the budget",
        cmd_save,
        r
    );
    register_command!("clear", "Clear ALL data (budget and history)", cmd_clear, r);
    register_command!(
        "export",
        "Export history to CSV (e.g. :export ~/months.csv)",
        cmd_export,
        r
    );
    register_command!("theme", "Toggle dark/light theme", cmd_theme, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Split `:expense` arguments into (title, amount, category). The last
/// token is the category, the one before it the amount, everything
/// preceding is the title (which may contain spaces).
pub(crate) fn parse_expense_args(args: &str) -> Result<(String, Decimal, Category), String> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err("Usage: :expense <title> <amount> <category>".into());
    }
    let category_token = tokens[tokens.len() - 1];
    let amount_token = tokens[tokens.len() - 2];
    let title = tokens[..tokens.len() - 2].join(" ");

    let amount = Decimal::from_str(amount_token)
        .map_err(|_| "Expense amount must be a positive number".to_string())?;
    let category = Category::parse(category_token).ok_or_else(|| {
        format!(
            "Unknown category '{category_token}' (Food, Transport, Bills, Entertainment, Other)"
        )
    })?;
    Ok((title, amount, category))
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_history(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::History;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let Ok(amount) = Decimal::from_str(args.trim()) else {
        app.set_status("Enter a valid positive budget amount");
        return Ok(());
    };
    let month = app.current_month.clone();
    match app.ledger.set_budget(amount, &month) {
        Ok(()) => {
            store.commit(&app.ledger)?;
            let total = app.ledger.budget_amount();
            app.set_status(format!("Budget for {month}: {}", format_amount(total)));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_expense(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let (title, amount, category) = match parse_expense_args(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };
    match app.ledger.add_expense(&title, amount, category, today()) {
        Ok(()) => {
            store.commit(&app.ledger)?;
            app.set_status(format!(
                "Added: {title} ({}, {category})",
                format_amount(amount)
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    match app.screen {
        Screen::Dashboard => {
            // Expense deletion needs no confirmation
            match app.ledger.delete_expense(app.expense_cursor.index) {
                Some(expense) => {
                    store.commit(&app.ledger)?;
                    app.clamp_cursors();
                    app.set_status(format!("Deleted: {}", expense.title));
                }
                None => app.set_status("No expense selected"),
            }
        }
        Screen::History => match app.ledger.history.get(app.history_cursor.index) {
            Some(entry) => {
                let month = entry.month.clone();
                app.request_confirm(
                    format!("Delete {month} from history?"),
                    PendingAction::DeleteMonth {
                        index: app.history_cursor.index,
                        month,
                    },
                );
            }
            None => app.set_status("No history entry selected"),
        },
    }
    Ok(())
}

fn cmd_save(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    match app.ledger.save_to_history() {
        Ok(entry) => {
            store.commit(&app.ledger)?;
            app.clamp_cursors();
            app.screen = Screen::History;
            app.set_status(format!("Saved {} to history", entry.month));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.request_confirm("Clear ALL data?", PendingAction::ClearAll);
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{}", crate::export::DEFAULT_EXPORT_NAME)
    } else {
        shellexpand(args)
    };

    match crate::export::export_history(std::path::Path::new(&path), &app.ledger.history) {
        Ok(count) => app.set_status(format!("Exported {count} months to {path}")),
        Err(e) => app.set_status(format!("Export failed: {e}")),
    }
    Ok(())
}

fn cmd_theme(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let theme = app.ledger.toggle_theme();
    store.save_theme(theme)?;
    app.set_status(format!("Theme: {theme}"));
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
