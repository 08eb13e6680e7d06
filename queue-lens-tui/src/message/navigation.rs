//! 导航面板消息

/// 导航面板消息
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 确认选择（切换页面）
    Confirm,
}
