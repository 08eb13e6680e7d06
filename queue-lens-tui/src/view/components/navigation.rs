//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::model::{App, FocusPanel};

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.focus == FocusPanel::Navigation;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == app.navigation.selected;
            let style = if selected && is_focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {} ", item.icon)),
                Span::styled(item.label, style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Browse ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(list, area);
}
