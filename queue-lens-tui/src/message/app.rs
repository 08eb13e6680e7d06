//! 主消息定义

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 切换焦点面板
    ToggleFocus,
    /// 返回上一页
    GoBack,
    /// 刷新当前页面数据
    Refresh,
    /// 显示帮助
    ShowHelp,
    /// 清除状态栏消息
    ClearStatus,
    /// 导航面板子消息
    Navigation(NavigationMessage),
    /// 内容面板子消息
    Content(ContentMessage),
    /// 弹窗子消息
    Modal(ModalMessage),
    /// 无操作，用于代替 `Option::None`
    Noop,
}
