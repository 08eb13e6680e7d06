//! 取数指令定义
//!
//! Update 层不直接发起网络请求，而是返回 `Command` 交给 Backend 层执行。
//! 每条指令都带着发起时分配的序列号，结果回来时据此丢弃过期响应。

/// 取数指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 加载 vhost 列表
    LoadVhosts { seq: u64 },
    /// 加载指定 vhost 下的队列列表
    LoadQueues { seq: u64, vhost: String },
    /// 抓取并分类一个消息样本
    LoadMessages {
        seq: u64,
        vhost: String,
        queue: String,
        count: i64,
    },
    /// 加载指定 vhost 下的交换机列表
    LoadExchanges { seq: u64, vhost: String },
}
