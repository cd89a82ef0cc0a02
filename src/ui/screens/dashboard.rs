use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme::CHART_COLORS;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Expenses + breakdown
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_expense_table(f, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(9)])
        .split(columns[1]);

    render_breakdown_chart(f, right[0], app);
    render_recent_history(f, right[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let remaining = app.ledger.remaining();

    render_card(f, cards[0], app, "Budget", app.ledger.budget_amount(), p.accent);
    render_card(f, cards[1], app, "Spent", app.ledger.spent(), p.yellow);
    // Overspending renders in the alert colour
    render_card(
        f,
        cards[2],
        app,
        "Remaining",
        remaining,
        if remaining < Decimal::ZERO {
            p.red
        } else {
            p.green
        },
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    app: &App,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
) {
    let p = app.palette();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.overlay))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(p.text_dim).add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(app.current_month.clone(), p.dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_expense_table(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let expenses = app.ledger.expenses();

    if expenses.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses yet", p.dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Set a budget with :budget, add expenses with :expense",
                p.dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.overlay))
            .title(Span::styled(
                " Expenses (0) ",
                Style::default().fg(p.text_dim).add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Description", "Amount", "Category", "Date"]
        .iter()
        .map(|h| Cell::from(*h).style(p.header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = expenses
        .iter()
        .enumerate()
        .skip(app.expense_cursor.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let style = if i == app.expense_cursor.index {
                p.selected_style()
            } else if i % 2 == 1 {
                p.alt_row_style()
            } else {
                p.normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(&expense.title, 30)),
                Cell::from(format_amount(expense.amount)),
                Cell::from(expense.category.as_str()),
                Cell::from(expense.date.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.overlay))
            .title(Span::styled(
                format!(" Expenses ({}) ", expenses.len()),
                Style::default().fg(p.text_dim).add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}

fn render_breakdown_chart(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let totals = app.ledger.category_totals();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.overlay))
        .title(Span::styled(
            " Spending Breakdown ",
            Style::default().fg(p.text_dim).add_modifier(Modifier::BOLD),
        ));

    // No slices, no chart
    if totals.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing to chart yet",
            p.dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);

    let bars: Vec<Bar> = totals
        .iter()
        .enumerate()
        .map(|(i, (category, total))| {
            let color = CHART_COLORS[i % CHART_COLORS.len()];
            Bar::default()
                .value(total.abs().to_u64().unwrap_or(0))
                .label(Line::from(truncate(category.as_str(), 9)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(p.text).add_modifier(Modifier::BOLD))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1);

    f.render_widget(chart, parts[0]);

    // Legend below the chart, one swatch per slice
    let mut legend_spans: Vec<Span> = Vec::new();
    for (i, (category, total)) in totals.iter().enumerate() {
        let color = CHART_COLORS[i % CHART_COLORS.len()];
        legend_spans.push(Span::styled("■ ", Style::default().fg(color)));
        legend_spans.push(Span::styled(
            format!("{category} {}  ", format_amount(*total)),
            p.dim_style(),
        ));
    }
    let legend = Paragraph::new(Line::from(legend_spans))
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(legend, parts[1]);
}

fn render_recent_history(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.overlay))
        .title(Span::styled(
            " Monthly Summary ",
            Style::default().fg(p.text_dim).add_modifier(Modifier::BOLD),
        ));

    if app.ledger.history.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled("No archive yet", p.dim_style())))
            .centered()
            .block(block);
        f.render_widget(msg, area);
        return;
    }

    let header_cells = ["Month", "Budget", "Spent"]
        .iter()
        .map(|h| Cell::from(*h).style(p.header_style()));
    let header = Row::new(header_cells).height(1);

    // Most recent six entries, newest first
    let rows: Vec<Row> = app
        .ledger
        .history
        .iter()
        .rev()
        .take(6)
        .map(|entry| {
            Row::new(vec![
                Cell::from(truncate(&entry.month, 18)),
                Cell::from(format_amount(entry.budget)),
                Cell::from(format_amount(entry.spent)),
            ])
            .style(p.normal_style())
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
