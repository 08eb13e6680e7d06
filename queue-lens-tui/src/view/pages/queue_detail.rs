//! 队列详情页面（消息样本）

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Tabs},
    Frame,
};

use queue_lens_broker::PayloadEncoding;
use queue_lens_core::{truncate, ClassifiedBatch};

use crate::model::state::BucketKind;
use crate::model::App;

/// 预览截断长度（字符数）
const PREVIEW_LEN: usize = 60;

/// 渲染队列详情
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 抓取条数输入
            Constraint::Length(2), // 桶标签页
            Constraint::Min(1),    // 消息列表
        ])
        .split(area);

    render_count_input(app, frame, chunks[0]);
    render_bucket_tabs(app, frame, chunks[1]);
    render_bucket_list(app, frame, chunks[2]);
}

/// 抓取条数输入行
fn render_count_input(app: &App, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Count: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}▏", app.messages.count_input),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            "  (Enter fetches a fresh sample)",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 桶标签页（带各桶条数）
fn render_bucket_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let empty = ClassifiedBatch::default();
    let batch = app.messages.batch.as_ref().unwrap_or(&empty);

    let buckets = [
        (BucketKind::Json, batch.json_messages.len()),
        (BucketKind::Strings, batch.string_messages.len()),
        (BucketKind::Base64, batch.base64_messages.len()),
        (BucketKind::Unclassified, batch.unclassified.len()),
    ];
    let titles: Vec<String> = buckets
        .iter()
        .map(|(kind, len)| format!("{} ({len})", kind.label()))
        .collect();
    let selected = buckets
        .iter()
        .position(|(kind, _)| *kind == app.messages.bucket)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    frame.render_widget(tabs, area);
}

/// 当前桶的消息列表
fn render_bucket_list(app: &App, frame: &mut Frame, area: Rect) {
    if app.messages.loading {
        frame.render_widget(Paragraph::new("Fetching messages..."), area);
        return;
    }
    if let Some(error) = &app.messages.error {
        let paragraph = Paragraph::new(format!(
            "Failed to fetch messages: {error}\n\nPress Enter to retry."
        ))
        .style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
        return;
    }
    let Some(batch) = &app.messages.batch else {
        frame.render_widget(
            Paragraph::new("No sample fetched yet").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    };

    let previews: Vec<String> = match app.messages.bucket {
        BucketKind::Json => batch
            .json_messages
            .iter()
            .map(|value| truncate(&value.to_string(), PREVIEW_LEN))
            .collect(),
        BucketKind::Strings => batch
            .string_messages
            .iter()
            .map(|text| truncate(text, PREVIEW_LEN))
            .collect(),
        BucketKind::Base64 => batch
            .base64_messages
            .iter()
            .map(|message| truncate(&message.payload, PREVIEW_LEN))
            .collect(),
        BucketKind::Unclassified => batch
            .unclassified
            .iter()
            .map(|message| {
                let tag = match &message.payload_encoding {
                    PayloadEncoding::Other(tag) => tag.as_str(),
                    _ => "?",
                };
                format!("[{tag}] {}", truncate(&message.payload, PREVIEW_LEN))
            })
            .collect(),
    };

    if previews.is_empty() {
        frame.render_widget(
            Paragraph::new("No messages in this bucket")
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = previews
        .into_iter()
        .enumerate()
        .map(|(i, preview)| {
            let style = if i == app.messages.selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {preview} ")).style(style)
        })
        .collect();

    frame.render_widget(List::new(items), area);
}
