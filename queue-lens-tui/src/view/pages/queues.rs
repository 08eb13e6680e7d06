//! 队列列表页面

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::model::App;

/// 渲染队列列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.queues.loading {
        frame.render_widget(Paragraph::new("Loading queues..."), area);
        return;
    }
    if let Some(error) = &app.queues.error {
        let paragraph =
            Paragraph::new(format!("Failed to load queues: {error}\n\nPress 'r' to retry."))
                .style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
        return;
    }
    if app.queues.queues.is_empty() {
        frame.render_widget(
            Paragraph::new("No queues in this vhost").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let header = Row::new(vec![Cell::from("Queue"), Cell::from("Messages")])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .queues
        .queues
        .iter()
        .enumerate()
        .map(|(i, queue)| {
            let depth = queue
                .messages
                .map_or_else(|| "-".to_string(), |n| n.to_string());
            let style = if i == app.queues.selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new(vec![Cell::from(queue.name.clone()), Cell::from(depth)]).style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(70), Constraint::Percentage(30)])
        .header(header);
    frame.render_widget(table, area);
}
