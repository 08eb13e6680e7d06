//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, Page};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    // 状态消息显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push(("Esc", "Close"));
        hints.push(("e", "Export"));
        return hints;
    }

    hints.push(("Tab", "Panels"));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Vhosts => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Queues"));
                hints.push(("r", "Refresh"));
            }
            Page::Queues { .. } => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Inspect"));
                hints.push(("Esc", "Back"));
            }
            Page::QueueDetail { .. } => {
                hints.push(("←→", "Bucket"));
                hints.push(("0-9", "Count"));
                hints.push(("Enter", "Fetch"));
                hints.push(("d", "Decode"));
                hints.push(("e", "Export"));
            }
            Page::Exchanges => {
                hints.push(("↑↓", "Select"));
                hints.push(("Esc", "Back"));
            }
        },
    }

    hints.push(("q", "Quit"));
    hints
}
