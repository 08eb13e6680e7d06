//! 浏览服务

use std::sync::Arc;

use queue_lens_broker::{Exchange, MessageFetcher, Queue, Vhost};

use crate::classify::{classify, ClassifiedBatch};
use crate::error::{CoreError, CoreResult};

/// 浏览服务
///
/// Thin façade over the management client: the one seam the UI layer calls.
/// Validates sample requests before any remote call and classifies message
/// batches before handing them back.
pub struct BrowseService {
    fetcher: Arc<dyn MessageFetcher>,
}

impl BrowseService {
    /// 创建浏览服务实例
    #[must_use]
    pub fn new(fetcher: Arc<dyn MessageFetcher>) -> Self {
        Self { fetcher }
    }

    /// 列出所有 vhost
    pub async fn vhosts(&self) -> CoreResult<Vec<Vhost>> {
        Ok(self.fetcher.fetch_vhosts().await?)
    }

    /// 列出指定 vhost 下的队列
    pub async fn queues(&self, vhost: &str) -> CoreResult<Vec<Queue>> {
        Ok(self.fetcher.fetch_queues(vhost).await?)
    }

    /// 抓取一个有界消息样本并分类。
    ///
    /// 非正数的 `count` 在任何远程调用之前即被拒绝。
    pub async fn sample(
        &self,
        vhost: &str,
        queue: &str,
        count: i64,
    ) -> CoreResult<ClassifiedBatch> {
        let count = u32::try_from(count).ok().filter(|c| *c >= 1).ok_or_else(|| {
            CoreError::Validation(format!("message count must be positive, got {count}"))
        })?;

        let messages = self.fetcher.fetch_messages(vhost, queue, count).await?;
        log::debug!(
            "sampled {} message(s) from {vhost}/{queue}",
            messages.len()
        );
        Ok(classify(messages))
    }

    /// 列出指定 vhost 下的交换机（发布路径，仅列出）
    pub async fn exchanges(&self, vhost: &str) -> CoreResult<Vec<Exchange>> {
        Ok(self.fetcher.fetch_exchanges(vhost).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use queue_lens_broker::{BrokerError, Message, PayloadEncoding};

    /// 记录调用次数的测试桩
    #[derive(Default)]
    struct StubFetcher {
        fetch_calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl MessageFetcher for StubFetcher {
        async fn fetch_vhosts(&self) -> queue_lens_broker::Result<Vec<Vhost>> {
            Ok(vec![Vhost {
                name: "/".to_string(),
            }])
        }

        async fn fetch_queues(&self, vhost: &str) -> queue_lens_broker::Result<Vec<Queue>> {
            Ok(vec![Queue {
                name: "orders".to_string(),
                vhost: vhost.to_string(),
                messages: Some(3),
            }])
        }

        async fn fetch_messages(
            &self,
            _vhost: &str,
            _queue: &str,
            count: u32,
        ) -> queue_lens_broker::Result<Vec<Message>> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(BrokerError::NetworkError {
                    detail: "connection refused".to_string(),
                });
            }
            assert!(count >= 1, "fetcher must never see a non-positive count");
            Ok(vec![
                Message {
                    payload: r#"{"id":1}"#.to_string(),
                    payload_encoding: PayloadEncoding::String,
                    properties: serde_json::Map::new(),
                },
                Message {
                    payload: "SGVsbG8=".to_string(),
                    payload_encoding: PayloadEncoding::Base64,
                    properties: serde_json::Map::new(),
                },
            ])
        }

        async fn fetch_exchanges(&self, _vhost: &str) -> queue_lens_broker::Result<Vec<Exchange>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn sample_classifies_fetched_batch() {
        let service = BrowseService::new(Arc::new(StubFetcher::default()));
        let batch = service.sample("/", "orders", 5).await.unwrap();
        assert_eq!(batch.total(), 2);
        assert_eq!(batch.json_messages.len(), 1);
        assert_eq!(batch.base64_messages.len(), 1);
    }

    #[tokio::test]
    async fn non_positive_count_never_reaches_fetcher() {
        let fetcher = Arc::new(StubFetcher::default());
        let service = BrowseService::new(fetcher.clone());

        for count in [0, -1, -100] {
            let result = service.sample("/", "orders", count).await;
            assert!(matches!(result, Err(CoreError::Validation(_))));
        }
        assert_eq!(fetcher.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetch_failure_surfaces_as_broker_error() {
        let service = BrowseService::new(Arc::new(StubFetcher {
            fail: true,
            ..StubFetcher::default()
        }));
        let result = service.sample("/", "orders", 5).await;
        assert!(matches!(result, Err(CoreError::Broker(_))));
    }

    #[tokio::test]
    async fn vhosts_and_queues_pass_through() {
        let service = BrowseService::new(Arc::new(StubFetcher::default()));
        let vhosts = service.vhosts().await.unwrap();
        assert_eq!(vhosts.len(), 1);
        let queues = service.queues("/").await.unwrap();
        assert_eq!(queues[0].vhost, "/");
    }
}
