//! 弹窗状态

/// 弹窗种类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKind {
    /// 解码后的 base64 消息（解码失败时为 Err，错误展示给用户）
    Decoded { result: Result<String, String> },
    /// 按键帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前弹窗，None 表示没有弹窗
    pub kind: Option<ModalKind>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.kind.is_some()
    }

    /// 显示解码结果弹窗
    pub fn show_decoded(&mut self, result: Result<String, String>) {
        self.kind = Some(ModalKind::Decoded { result });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.kind = Some(ModalKind::Help);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.kind = None;
    }

    /// 当前解码成功的文本（供导出）
    pub fn decoded_text(&self) -> Option<&str> {
        match &self.kind {
            Some(ModalKind::Decoded { result: Ok(text) }) => Some(text),
            _ => None,
        }
    }
}
