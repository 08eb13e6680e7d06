//! Backend 层：业务服务
//!
//! 封装 queue-lens-core 的浏览服务与本地配置，提供给 UI 层使用的统一接口。

mod broker_service;
mod config_service;

pub use broker_service::BrokerService;
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
