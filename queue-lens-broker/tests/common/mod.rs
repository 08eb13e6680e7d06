//! 共享测试工具和辅助函数

#![allow(dead_code)]

use queue_lens_broker::ManagementClient;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_broker {
    () => {
        if std::env::var("QUEUE_LENS_TEST_BROKER_URL").is_err() {
            eprintln!("跳过测试: 缺少环境变量 QUEUE_LENS_TEST_BROKER_URL");
            return;
        }
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 从环境变量构造客户端（调用前先用 `skip_if_no_broker!` 保护）
pub fn client_from_env() -> ManagementClient {
    let base_url = std::env::var("QUEUE_LENS_TEST_BROKER_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    let client = ManagementClient::new(base_url);
    match (
        std::env::var("QUEUE_LENS_TEST_BROKER_USERNAME"),
        std::env::var("QUEUE_LENS_TEST_BROKER_PASSWORD"),
    ) {
        (Ok(username), Ok(password)) => client.with_basic_auth(&username, &password),
        _ => client,
    }
}
