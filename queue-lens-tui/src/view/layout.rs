//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(content_area);

    let nav_area = columns[0];
    let page_area = columns[1];

    // 渲染左侧导航
    components::navigation::render(app, frame, nav_area);

    // 渲染右侧内容
    render_page_content(app, frame, page_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(" Queue Lens v0.1.0")
        .style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.focus.is_content();
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let page_title = match &app.current_page {
        Page::Vhosts => " Vhosts ".to_string(),
        Page::Queues { vhost } => format!(" Queues · {vhost} "),
        Page::QueueDetail { vhost, queue } => format!(" {vhost}/queues/{queue} "),
        Page::Exchanges => " Exchanges ".to_string(),
    };

    let block = Block::default()
        .title(page_title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.current_page {
        Page::Vhosts => pages::vhosts::render(app, frame, inner),
        Page::Queues { .. } => pages::queues::render(app, frame, inner),
        Page::QueueDetail { .. } => pages::queue_detail::render(app, frame, inner),
        Page::Exchanges => pages::exchanges::render(app, frame, inner),
    }
}
