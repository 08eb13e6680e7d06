//! 交换机列表页面

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::model::App;

/// 渲染交换机列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.exchanges.loading {
        frame.render_widget(Paragraph::new("Loading exchanges..."), area);
        return;
    }
    if let Some(error) = &app.exchanges.error {
        let paragraph =
            Paragraph::new(format!("Failed to load exchanges: {error}\n\nPress 'r' to retry."))
                .style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
        return;
    }
    if app.exchanges.exchanges.is_empty() {
        frame.render_widget(
            Paragraph::new("No exchanges").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let header = Row::new(vec![Cell::from("Exchange"), Cell::from("Type")])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .exchanges
        .exchanges
        .iter()
        .enumerate()
        .map(|(i, exchange)| {
            let name = if exchange.name.is_empty() {
                "(default)".to_string()
            } else {
                exchange.name.clone()
            };
            let style = if i == app.exchanges.selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(name),
                Cell::from(exchange.exchange_type.clone()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(70), Constraint::Percentage(30)])
        .header(header);
    frame.render_widget(table, area);
}
