//! 页面定义

/// 当前页面
///
/// `QueueDetail { vhost, queue }` 与导航路径 `/{vhost}/queues/{queue}`
/// 一一对应。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// vhost 列表
    Vhosts,
    /// 指定 vhost 下的队列列表
    Queues { vhost: String },
    /// 队列详情（消息样本）
    QueueDetail { vhost: String, queue: String },
    /// 指定 vhost 下的交换机列表（发布路径，仅列出）
    Exchanges,
}
