use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Exchange, Message, Queue, Vhost};

/// 消息取数 Trait
///
/// 管理 API 的抓取契约：每个操作都是单次请求，失败即上报，不在内部重试、
/// 不缓存、除远程调用外无任何副作用。`count` 由调用方保证至少为 1。
#[async_trait]
pub trait MessageFetcher: Send + Sync {
    /// 获取 vhost 列表
    async fn fetch_vhosts(&self) -> Result<Vec<Vhost>>;

    /// 获取指定 vhost 下的队列列表
    async fn fetch_queues(&self, vhost: &str) -> Result<Vec<Queue>>;

    /// 抓取指定队列的消息样本（最多 `count` 条，按入队顺序返回）
    async fn fetch_messages(&self, vhost: &str, queue: &str, count: u32) -> Result<Vec<Message>>;

    /// 获取指定 vhost 下的交换机列表（发布路径，仅列出）
    async fn fetch_exchanges(&self, vhost: &str) -> Result<Vec<Exchange>>;
}
