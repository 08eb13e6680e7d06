//! 后台取数服务
//!
//! Update 层产出 [`Command`]，这里为每条指令起一个 tokio 任务执行取数，
//! 结果带着原始序列号经无界通道送回主循环。任务之间互不等待，
//! 响应乱序由 update 层的序列号校验兜底。

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use queue_lens_core::{BrowseService, CoreResult};

use crate::message::{BrokerEvent, Command};

/// 后台取数服务
pub struct BrokerService {
    browse: Arc<BrowseService>,
    tx: UnboundedSender<BrokerEvent>,
}

impl BrokerService {
    /// 创建后台取数服务
    pub fn new(browse: Arc<BrowseService>, tx: UnboundedSender<BrokerEvent>) -> Self {
        Self { browse, tx }
    }

    /// 执行一条取数指令（结果异步回报）
    pub fn run(&self, command: Command) {
        match command {
            Command::LoadVhosts { seq } => self.spawn_vhosts(seq),
            Command::LoadQueues { seq, vhost } => self.spawn_queues(seq, vhost),
            Command::LoadMessages {
                seq,
                vhost,
                queue,
                count,
            } => self.spawn_messages(seq, vhost, queue, count),
            Command::LoadExchanges { seq, vhost } => self.spawn_exchanges(seq, vhost),
        }
    }

    fn spawn_vhosts(&self, seq: u64) {
        let browse = self.browse.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = browse.vhosts().await;
            log_result("vhost list", &result);
            let _ = tx.send(BrokerEvent::VhostsLoaded { seq, result });
        });
    }

    fn spawn_queues(&self, seq: u64, vhost: String) {
        let browse = self.browse.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = browse.queues(&vhost).await;
            log_result("queue list", &result);
            let _ = tx.send(BrokerEvent::QueuesLoaded { seq, result });
        });
    }

    fn spawn_messages(&self, seq: u64, vhost: String, queue: String, count: i64) {
        let browse = self.browse.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = browse.sample(&vhost, &queue, count).await;
            log_result("message sample", &result);
            let _ = tx.send(BrokerEvent::MessagesLoaded { seq, result });
        });
    }

    fn spawn_exchanges(&self, seq: u64, vhost: String) {
        let browse = self.browse.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = browse.exchanges(&vhost).await;
            log_result("exchange list", &result);
            let _ = tx.send(BrokerEvent::ExchangesLoaded { seq, result });
        });
    }
}

/// 按预期与否选择日志级别
fn log_result<T>(what: &str, result: &CoreResult<T>) {
    match result {
        Ok(_) => log::debug!("{what} fetch completed"),
        Err(e) if e.is_expected() => log::warn!("{what} fetch failed: {e}"),
        Err(e) => log::error!("{what} fetch failed: {e}"),
    }
}
