//! Management API client

use std::time::Duration;

use async_trait::async_trait;
use base64::prelude::*;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http::HttpUtils;
use crate::traits::MessageFetcher;
use crate::types::{Exchange, Message, Queue, Vhost};

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Client for the broker's management API.
///
/// Holds the endpoint root and optional Basic credentials; every fetch is a
/// single GET with no retry and no caching.
pub struct ManagementClient {
    client: Client,
    base_url: String,
    auth_header: Option<String>,
}

impl ManagementClient {
    /// 创建客户端实例
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: create_http_client(),
            base_url,
            auth_header: None,
        }
    }

    /// 附加 Basic 认证凭证（管理 API 使用 `Basic base64(user:pass)`）
    #[must_use]
    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Self {
        self.auth_header = Some(format!(
            "Basic {}",
            BASE64_STANDARD.encode(format!("{username}:{password}"))
        ));
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// 执行 GET 请求并解析 JSON 响应
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let mut request = self.client.get(&url);
        if let Some(auth) = &self.auth_header {
            request = request.header("Authorization", auth.as_str());
        }
        let (_, body) = HttpUtils::execute_request(request, "GET", &url).await?;
        HttpUtils::parse_json(&body)
    }
}

#[async_trait]
impl MessageFetcher for ManagementClient {
    async fn fetch_vhosts(&self) -> Result<Vec<Vhost>> {
        self.get("/vhosts").await
    }

    async fn fetch_queues(&self, vhost: &str) -> Result<Vec<Queue>> {
        let path = format!("/queues/{}", urlencoding::encode(vhost));
        let mut queues: Vec<Queue> = self.get(&path).await?;
        // 队列只在 vhost 上下文中存在，回填所属 vhost
        for queue in &mut queues {
            queue.vhost = vhost.to_string();
        }
        Ok(queues)
    }

    async fn fetch_messages(&self, vhost: &str, queue: &str, count: u32) -> Result<Vec<Message>> {
        let path = format!(
            "/queues/{}/{}?count={count}",
            urlencoding::encode(vhost),
            urlencoding::encode(queue)
        );
        self.get(&path).await
    }

    async fn fetch_exchanges(&self, vhost: &str) -> Result<Vec<Exchange>> {
        let path = format!("/exchanges/{}", urlencoding::encode(vhost));
        self.get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_stripped() {
        let client = ManagementClient::new("http://localhost:8080/");
        assert_eq!(client.url("/vhosts"), "http://localhost:8080/vhosts");
    }

    #[test]
    fn basic_auth_header_encoded() {
        let client = ManagementClient::new("http://localhost:8080")
            .with_basic_auth("guest", "guest");
        // base64("guest:guest")
        assert_eq!(
            client.auth_header.as_deref(),
            Some("Basic Z3Vlc3Q6Z3Vlc3Q=")
        );
    }

    #[test]
    fn no_auth_header_by_default() {
        let client = ManagementClient::new("http://localhost:8080");
        assert!(client.auth_header.is_none());
    }

    #[test]
    fn default_vhost_is_percent_encoded() {
        // RabbitMQ 默认 vhost 是 "/"，必须编码成 %2F
        assert_eq!(urlencoding::encode("/"), "%2F");
        assert_eq!(urlencoding::encode("dev/staging"), "dev%2Fstaging");
    }
}
