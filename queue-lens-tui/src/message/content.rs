//! 内容面板消息

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（进入详情或发起抓取）
    Confirm,

    // ========== 详情页专用 ==========
    /// 切换到上一个消息桶
    PrevBucket,
    /// 切换到下一个消息桶
    NextBucket,
    /// 解码选中的 base64 消息
    Decode,
    /// 导出当前桶
    Export,
    /// 抓取条数输入：追加一位数字
    CountDigit(char),
    /// 抓取条数输入：删除一位
    CountBackspace,
}
