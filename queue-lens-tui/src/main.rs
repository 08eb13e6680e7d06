//! Queue Lens TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! 取数走 Backend 层的 tokio 任务，结果带序列号经通道回到主循环；
//! update 层只应用序列号最新的完成事件，后发先至的选择永远赢。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use queue_lens_broker::ManagementClient;
use queue_lens_core::BrowseService;

use backend::{BrokerService, ConfigService, LocalConfigService};
use message::Command;
use util::{init_logging, init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 日志与配置
    let _log_guard = init_logging()?;
    let config = LocalConfigService.load()?;
    log::info!("connecting to {}", config.broker_url);

    // 2. 组装服务
    let mut client = ManagementClient::new(config.broker_url.clone());
    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        client = client.with_basic_auth(username, password);
    }
    let browse = Arc::new(BrowseService::new(Arc::new(client)));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let broker_service = BrokerService::new(browse, tx);

    // 3. 初始化终端与应用实例
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(config.default_count);

    // 4. 启动即加载 vhost 列表
    broker_service.run(Command::LoadVhosts {
        seq: app.vhosts.begin_fetch(),
    });

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &broker_service, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
