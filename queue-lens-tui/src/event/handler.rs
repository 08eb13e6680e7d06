//! 按键到消息的翻译

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, FocusPanel, Page};

/// 轮询输入事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 把原始事件翻译成应用消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(key, app),
        _ => AppMessage::Noop,
    }
}

fn handle_key(key: KeyEvent, app: &App) -> AppMessage {
    // 弹窗打开时按键归弹窗
    if app.modal.is_open() {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') => AppMessage::Modal(ModalMessage::Close),
            KeyCode::Char('e') => AppMessage::Modal(ModalMessage::Export),
            _ => AppMessage::Noop,
        };
    }

    // 全局按键
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return AppMessage::Quit;
        }
        KeyCode::Char('q') => return AppMessage::Quit,
        KeyCode::Tab => return AppMessage::ToggleFocus,
        KeyCode::Esc => return AppMessage::GoBack,
        KeyCode::Char('r') => return AppMessage::Refresh,
        KeyCode::Char('?') => return AppMessage::ShowHelp,
        KeyCode::Delete => return AppMessage::ClearStatus,
        _ => {}
    }

    match app.focus {
        FocusPanel::Navigation => handle_navigation_key(key),
        FocusPanel::Content => handle_content_key(key, app),
    }
}

fn handle_navigation_key(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

fn handle_content_key(key: KeyEvent, app: &App) -> AppMessage {
    // 详情页专用按键（计数输入、桶切换、解码、导出）
    if matches!(app.current_page, Page::QueueDetail { .. }) {
        match key.code {
            KeyCode::Char(c @ '0'..='9') => {
                return AppMessage::Content(ContentMessage::CountDigit(c));
            }
            KeyCode::Backspace => return AppMessage::Content(ContentMessage::CountBackspace),
            KeyCode::Left | KeyCode::Char('h') => {
                return AppMessage::Content(ContentMessage::PrevBucket);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                return AppMessage::Content(ContentMessage::NextBucket);
            }
            KeyCode::Char('d') => return AppMessage::Content(ContentMessage::Decode),
            KeyCode::Char('e') => return AppMessage::Content(ContentMessage::Export),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}
