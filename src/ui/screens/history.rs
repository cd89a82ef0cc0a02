use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let p = app.palette();
    let history = &app.ledger.history;

    if history.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No history available", p.dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Archive a month with :save, or wait for rollover",
                p.dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.overlay))
            .title(Span::styled(
                " Monthly History (0) ",
                Style::default().fg(p.text_dim).add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Month", "Budget", "Spent", "Balance"]
        .iter()
        .map(|h| Cell::from(*h).style(p.header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = history
        .iter()
        .enumerate()
        .skip(app.history_cursor.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, entry)| {
            let balance = entry.budget - entry.spent;
            let balance_style = if balance < Decimal::ZERO {
                p.alert_style()
            } else {
                p.ok_style()
            };

            let style = if i == app.history_cursor.index {
                p.selected_style()
            } else if i % 2 == 1 {
                p.alt_row_style()
            } else {
                p.normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(&entry.month, 24)),
                Cell::from(format_amount(entry.budget)),
                Cell::from(format_amount(entry.spent)),
                Cell::from(Span::styled(format_amount(balance), balance_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.overlay))
            .title(Span::styled(
                format!(" Monthly History ({}) ", history.len()),
                Style::default().fg(p.text_dim).add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
