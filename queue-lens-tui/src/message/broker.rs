//! 取数完成事件

use queue_lens_broker::{Exchange, Queue, Vhost};
use queue_lens_core::{ClassifiedBatch, CoreResult};

/// 取数完成事件
///
/// 由 Backend 层的后台任务经通道送回主循环。`seq` 是发起取数时分配的
/// 序列号：只有与最近一次发起的序列号相等的完成事件才会被应用，
/// 其余一律丢弃（last-request-wins）。
#[derive(Debug)]
pub enum BrokerEvent {
    /// vhost 列表加载完成
    VhostsLoaded {
        seq: u64,
        result: CoreResult<Vec<Vhost>>,
    },
    /// 队列列表加载完成
    QueuesLoaded {
        seq: u64,
        result: CoreResult<Vec<Queue>>,
    },
    /// 消息样本抓取并分类完成
    MessagesLoaded {
        seq: u64,
        result: CoreResult<ClassifiedBatch>,
    },
    /// 交换机列表加载完成
    ExchangesLoaded {
        seq: u64,
        result: CoreResult<Vec<Exchange>>,
    },
}
