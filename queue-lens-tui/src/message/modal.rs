//! 弹窗消息

/// 弹窗消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 导出弹窗中的解码结果
    Export,
}
