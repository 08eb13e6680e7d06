//! Update 层：状态更新
//!
//! 消费 Message 层的消息并修改 Model。需要取数时不直接发请求，而是返回
//! [`Command`] 交给 Backend 层；取数完成事件经 [`broker::apply`] 应用，
//! 其中的序列号校验保证过期响应不会覆盖较新的状态。

pub mod broker;
mod content;
mod modal;
mod navigation;


use crate::message::{AppMessage, Command};
use crate::model::{App, Page};

/// 处理主消息，返回需要执行的取数指令（如有）
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }
        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggled();
            None
        }
        AppMessage::GoBack => {
            handle_go_back(app);
            None
        }
        AppMessage::Refresh => handle_refresh(app),
        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }
        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }
        AppMessage::Navigation(msg) => navigation::update(app, msg),
        AppMessage::Content(msg) => content::update(app, msg),
        AppMessage::Modal(msg) => {
            modal::update(app, msg);
            None
        }
        AppMessage::Noop => None,
    }
}

/// 返回上一页
fn handle_go_back(app: &mut App) {
    match &app.current_page {
        Page::QueueDetail { vhost, .. } => {
            app.current_page = Page::Queues {
                vhost: vhost.clone(),
            };
            app.clear_status();
        }
        Page::Queues { .. } | Page::Exchanges => {
            app.current_page = Page::Vhosts;
            app.clear_status();
        }
        Page::Vhosts => {}
    }
}

/// 重新加载当前页面的数据
fn handle_refresh(app: &mut App) -> Option<Command> {
    match app.current_page.clone() {
        Page::Vhosts => Some(Command::LoadVhosts {
            seq: app.vhosts.begin_fetch(),
        }),
        Page::Queues { vhost } => Some(Command::LoadQueues {
            seq: app.queues.begin_fetch(),
            vhost,
        }),
        Page::QueueDetail { .. } => content::request_messages(app),
        Page::Exchanges => {
            let vhost = app.exchanges.vhost.clone()?;
            Some(Command::LoadExchanges {
                seq: app.exchanges.begin_fetch(),
                vhost,
            })
        }
    }
}
