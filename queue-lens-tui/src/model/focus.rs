//! 焦点面板定义

/// 当前焦点所在面板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    /// 左侧导航面板
    Navigation,
    /// 右侧内容面板
    Content,
}

impl FocusPanel {
    /// 切换焦点
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }

    /// 焦点是否在内容面板
    pub fn is_content(self) -> bool {
        matches!(self, Self::Content)
    }
}
