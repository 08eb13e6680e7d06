//! 取数完成事件应用逻辑
//!
//! 这里是过期响应防护（sequence guard）的唯一闸口：完成事件的序列号
//! 必须等于对应取数类别最近一次发出的序列号，否则整个事件被丢弃。
//! 后发的选择先返回时，先前那次较慢的响应不会覆盖新状态。

use crate::message::BrokerEvent;
use crate::model::App;

/// 应用取数完成事件
pub fn apply(app: &mut App, event: BrokerEvent) {
    match event {
        BrokerEvent::VhostsLoaded { seq, result } => {
            if !app.vhosts.is_current(seq) {
                log::debug!("discarding stale vhost list response (seq {seq})");
                return;
            }
            match result {
                Ok(vhosts) => app.vhosts.set_vhosts(vhosts),
                Err(e) => {
                    app.vhosts.fail(e.to_string());
                    app.set_status(format!("Failed to load vhosts: {e}"));
                }
            }
        }

        BrokerEvent::QueuesLoaded { seq, result } => {
            if !app.queues.is_current(seq) {
                log::debug!("discarding stale queue list response (seq {seq})");
                return;
            }
            match result {
                Ok(queues) => app.queues.set_queues(queues),
                Err(e) => {
                    app.queues.fail(e.to_string());
                    app.set_status(format!("Failed to load queues: {e}"));
                }
            }
        }

        BrokerEvent::MessagesLoaded { seq, result } => {
            if !app.messages.is_current(seq) {
                log::debug!("discarding stale message batch response (seq {seq})");
                return;
            }
            match result {
                Ok(batch) => app.messages.set_batch(batch),
                Err(e) => {
                    app.messages.fail(e.to_string());
                    app.set_status(format!("Failed to fetch messages: {e}"));
                }
            }
        }

        BrokerEvent::ExchangesLoaded { seq, result } => {
            if !app.exchanges.is_current(seq) {
                log::debug!("discarding stale exchange list response (seq {seq})");
                return;
            }
            match result {
                Ok(exchanges) => app.exchanges.set_exchanges(exchanges),
                Err(e) => {
                    app.exchanges.fail(e.to_string());
                    app.set_status(format!("Failed to load exchanges: {e}"));
                }
            }
        }
    }
}
