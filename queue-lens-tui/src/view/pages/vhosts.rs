//! vhost 列表页面

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::model::App;

/// 渲染 vhost 列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.vhosts.loading {
        frame.render_widget(Paragraph::new("Loading vhosts..."), area);
        return;
    }
    if let Some(error) = &app.vhosts.error {
        let paragraph =
            Paragraph::new(format!("Failed to load vhosts: {error}\n\nPress 'r' to retry."))
                .style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
        return;
    }
    if app.vhosts.vhosts.is_empty() {
        frame.render_widget(
            Paragraph::new("No vhosts").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .vhosts
        .vhosts
        .iter()
        .enumerate()
        .map(|(i, vhost)| {
            let style = if i == app.vhosts.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {} ", vhost.name)).style(style)
        })
        .collect();

    frame.render_widget(List::new(items), area);
}
