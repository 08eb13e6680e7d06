//! 应用主状态结构

use super::state::{ExchangesState, MessagesState, ModalState, QueuesState, VhostsState};
use super::{FocusPanel, NavigationState, Page};

/// 应用主状态
///
/// 整个会话只有一个 `App` 实例，所有变更都经由 update 层的转换函数；
/// view 层只拿到只读引用。
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// vhost 页面状态
    pub vhosts: VhostsState,
    /// 队列页面状态
    pub queues: QueuesState,
    /// 队列详情页面状态
    pub messages: MessagesState,
    /// 交换机页面状态
    pub exchanges: ExchangesState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(default_count: i64) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Content,
            navigation: NavigationState::new(),
            current_page: Page::Vhosts,
            status_message: None,
            vhosts: VhostsState::new(),
            queues: QueuesState::new(),
            messages: MessagesState::new(default_count),
            exchanges: ExchangesState::new(),
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
