//! 应用主循环
//!
//! 单一逻辑控制流：
//!
//! ```text
//! loop {
//!     draw                    // 渲染 UI
//!     drain broker events     // 应用后台取数结果（带序列号校验）
//!     poll input (100ms)      // 轮询按键
//!     update                  // 状态转换，可能产出取数指令
//! }
//! ```
//!
//! `App` 是唯一的可变状态持有者，后台任务只通过通道送回结果，
//! 从不直接触碰状态。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::BrokerService;
use crate::event;
use crate::message::BrokerEvent;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &BrokerService,
    rx: &mut UnboundedReceiver<BrokerEvent>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用已完成的后台取数结果
        while let Ok(event) = rx.try_recv() {
            update::broker::apply(app, event);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息并更新状态
            let msg = event::handle_event(event, app);
            if let Some(command) = update::update(app, msg) {
                backend.run(command);
            }
        }
    }

    Ok(())
}
