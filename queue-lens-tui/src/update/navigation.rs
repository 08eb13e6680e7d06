//! 导航面板更新逻辑

use crate::message::{Command, NavigationMessage};
use crate::model::{App, FocusPanel, NavItemId, Page};

/// 处理导航面板消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Command> {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
            None
        }
        NavigationMessage::SelectNext => {
            app.navigation.select_next();
            None
        }
        NavigationMessage::Confirm => handle_confirm(app),
    }
}

/// 确认导航选择，切换页面
fn handle_confirm(app: &mut App) -> Option<Command> {
    let item = app.navigation.current_item()?;
    match item.id {
        NavItemId::Vhosts => {
            app.current_page = Page::Vhosts;
            app.focus = FocusPanel::Content;
            app.clear_status();
            None
        }
        NavItemId::Exchanges => {
            // 交换机列表依赖选中的 vhost
            let Some(vhost) = app.queues.vhost.clone() else {
                app.set_status("Select a vhost first");
                return None;
            };
            app.exchanges.set_vhost(vhost.clone());
            app.current_page = Page::Exchanges;
            app.focus = FocusPanel::Content;
            app.clear_status();
            Some(Command::LoadExchanges {
                seq: app.exchanges.begin_fetch(),
                vhost,
            })
        }
    }
}
