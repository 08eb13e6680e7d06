//! 居中弹窗组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::state::ModalKind;
use crate::model::App;

/// 渲染弹窗（如有）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(kind) = &app.modal.kind else {
        return;
    };

    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);

    match kind {
        ModalKind::Decoded { result } => render_decoded(frame, area, result),
        ModalKind::Help => render_help(frame, area),
    }
}

/// 解码结果弹窗：成功显示明文，失败显示错误（不静默降级）
fn render_decoded(frame: &mut Frame, area: Rect, result: &Result<String, String>) {
    let (title, body, style) = match result {
        Ok(text) => (
            " Decoded message ",
            text.clone(),
            Style::default(),
        ),
        Err(error) => (
            " Decode failed ",
            error.clone(),
            Style::default().fg(Color::Red),
        ),
    };

    let paragraph = Paragraph::new(body)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(paragraph, area);
}

/// 帮助弹窗
fn render_help(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::raw("Tab        switch focus panel")),
        Line::from(Span::raw("↑↓ / jk    move selection")),
        Line::from(Span::raw("Enter      open / fetch sample")),
        Line::from(Span::raw("←→ / hl    switch message bucket")),
        Line::from(Span::raw("0-9, ⌫     edit fetch count")),
        Line::from(Span::raw("d          decode base64 message")),
        Line::from(Span::raw("e          export bucket to messages.json")),
        Line::from(Span::raw("r          refresh current page")),
        Line::from(Span::raw("Esc        back / close")),
        Line::from(Span::raw("q          quit")),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

/// 计算居中矩形
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
