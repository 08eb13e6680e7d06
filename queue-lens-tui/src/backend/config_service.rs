//! 配置服务

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 管理 API 根地址
    pub broker_url: String,
    /// Basic 认证用户名
    pub username: Option<String>,
    /// Basic 认证密码
    pub password: Option<String>,
    /// 默认抓取条数
    pub default_count: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            broker_url: "http://localhost:8080".to_string(),
            username: None,
            password: None,
            default_count: 10,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
///
/// 配置文件在用户配置目录下，环境变量优先于文件内容。
pub struct LocalConfigService;

impl LocalConfigService {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("queue-lens").join("config.json"))
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)?;
                serde_json::from_str(&raw)?
            }
            _ => AppConfig::default(),
        };
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(config)?)?;
        Ok(())
    }
}

/// 环境变量覆盖（优先于配置文件）
fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("QUEUE_LENS_BROKER_URL") {
        config.broker_url = url;
    }
    if let Some(username) = lookup("QUEUE_LENS_BROKER_USERNAME") {
        config.username = Some(username);
    }
    if let Some(password) = lookup("QUEUE_LENS_BROKER_PASSWORD") {
        config.password = Some(password);
    }
    if let Some(count) = lookup("QUEUE_LENS_DEFAULT_COUNT").and_then(|c| c.parse().ok()) {
        config.default_count = count;
    }
}
