//! 内容面板更新逻辑
//!
//! 导航控制器的核心转换都在这里：选择 vhost、选择队列、发起消息抓取。

use queue_lens_core::{decode_base64, export_json, ClassifiedBatch, ExportArtifact};

use crate::message::{Command, ContentMessage};
use crate::model::state::BucketKind;
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            handle_select_previous(app);
            None
        }
        ContentMessage::SelectNext => {
            handle_select_next(app);
            None
        }
        ContentMessage::SelectFirst => {
            handle_select_first(app);
            None
        }
        ContentMessage::SelectLast => {
            handle_select_last(app);
            None
        }
        ContentMessage::Confirm => handle_confirm(app),

        // ========== 详情页专用 ==========
        ContentMessage::PrevBucket => {
            if matches!(app.current_page, Page::QueueDetail { .. }) {
                app.messages.prev_bucket();
            }
            None
        }
        ContentMessage::NextBucket => {
            if matches!(app.current_page, Page::QueueDetail { .. }) {
                app.messages.next_bucket();
            }
            None
        }
        ContentMessage::Decode => {
            handle_decode(app);
            None
        }
        ContentMessage::Export => {
            handle_export(app);
            None
        }
        ContentMessage::CountDigit(digit) => {
            app.messages.push_digit(digit);
            None
        }
        ContentMessage::CountBackspace => {
            app.messages.pop_digit();
            None
        }
    }
}

// ========== 列表导航处理 ==========

fn handle_select_previous(app: &mut App) {
    match &app.current_page {
        Page::Vhosts => app.vhosts.select_previous(),
        Page::Queues { .. } => app.queues.select_previous(),
        Page::QueueDetail { .. } => app.messages.select_previous(),
        Page::Exchanges => app.exchanges.select_previous(),
    }
}

fn handle_select_next(app: &mut App) {
    match &app.current_page {
        Page::Vhosts => app.vhosts.select_next(),
        Page::Queues { .. } => app.queues.select_next(),
        Page::QueueDetail { .. } => app.messages.select_next(),
        Page::Exchanges => app.exchanges.select_next(),
    }
}

fn handle_select_first(app: &mut App) {
    match &app.current_page {
        Page::Vhosts => app.vhosts.select_first(),
        Page::Queues { .. } => app.queues.select_first(),
        Page::QueueDetail { .. } => app.messages.select_first(),
        Page::Exchanges => {}
    }
}

fn handle_select_last(app: &mut App) {
    match &app.current_page {
        Page::Vhosts => app.vhosts.select_last(),
        Page::Queues { .. } => app.queues.select_last(),
        Page::QueueDetail { .. } => app.messages.select_last(),
        Page::Exchanges => {}
    }
}

fn handle_confirm(app: &mut App) -> Option<Command> {
    match app.current_page.clone() {
        Page::Vhosts => select_vhost(app),
        Page::Queues { .. } => select_queue(app),
        // 详情页的 Enter 按当前条数重新抓取
        Page::QueueDetail { .. } => request_messages(app),
        Page::Exchanges => None,
    }
}

// ========== 导航控制器转换 ==========

/// 选中 vhost：清空依赖它的一切状态，发起队列列表取数
fn select_vhost(app: &mut App) -> Option<Command> {
    let vhost = app.vhosts.selected_vhost()?.name.clone();

    app.queues.set_vhost(vhost.clone());
    app.messages.reset();
    app.exchanges.reset();
    app.current_page = Page::Queues {
        vhost: vhost.clone(),
    };
    app.clear_status();

    Some(Command::LoadQueues {
        seq: app.queues.begin_fetch(),
        vhost,
    })
}

/// 选中队列：清空上一批结果，进入详情页并按当前条数抓取样本
fn select_queue(app: &mut App) -> Option<Command> {
    let queue = app.queues.selected_queue()?;
    let vhost = queue.vhost.clone();
    let name = queue.name.clone();

    app.messages.set_target(vhost.clone(), name.clone());
    app.current_page = Page::QueueDetail {
        vhost,
        queue: name,
    };
    app.clear_status();

    request_messages(app)
}

/// 发起消息抓取。
///
/// 非正数条数只在状态栏提示，既不发请求也不改变导航状态。
pub(super) fn request_messages(app: &mut App) -> Option<Command> {
    let count = app.messages.requested_count();
    if count <= 0 {
        app.set_status(format!(
            "Message count must be a positive number (got '{}')",
            app.messages.count_input
        ));
        return None;
    }

    Some(Command::LoadMessages {
        seq: app.messages.begin_fetch(),
        vhost: app.messages.vhost.clone(),
        queue: app.messages.queue.clone(),
        count,
    })
}

// ========== 解码与导出 ==========

/// 解码选中的 base64 消息并弹窗展示。
///
/// 解码失败只影响这一条消息：错误文本照样进弹窗，列表不受影响。
fn handle_decode(app: &mut App) {
    if !matches!(app.current_page, Page::QueueDetail { .. }) {
        return;
    }
    if app.messages.bucket != BucketKind::Base64 {
        app.set_status("Decode applies to the Base64 bucket");
        return;
    }
    let Some(message) = app.messages.selected_base64() else {
        app.set_status("No message selected");
        return;
    };

    let result = decode_base64(&message.payload).map_err(|e| e.to_string());
    app.modal.show_decoded(result);
}

/// 导出当前桶为 messages.json
fn handle_export(app: &mut App) {
    if !matches!(app.current_page, Page::QueueDetail { .. }) {
        return;
    }
    let Some(batch) = &app.messages.batch else {
        app.set_status("Nothing to export");
        return;
    };

    let artifact = serialize_bucket(batch, app.messages.bucket);
    match artifact {
        Ok(artifact) => write_artifact(app, &artifact),
        Err(e) => app.set_status(format!("Export failed: {e}")),
    }
}

fn serialize_bucket(
    batch: &ClassifiedBatch,
    bucket: BucketKind,
) -> queue_lens_core::CoreResult<ExportArtifact> {
    match bucket {
        BucketKind::Json => export_json(&batch.json_messages),
        BucketKind::Strings => export_json(&batch.string_messages),
        BucketKind::Base64 => export_json(&batch.base64_messages),
        BucketKind::Unclassified => export_json(&batch.unclassified),
    }
}

/// 把导出产物写入工作目录并在状态栏报告路径
pub(super) fn write_artifact(app: &mut App, artifact: &ExportArtifact) {
    match std::fs::write(&artifact.suggested_filename, &artifact.content) {
        Ok(()) => {
            let path = std::fs::canonicalize(&artifact.suggested_filename)
                .map_or_else(|_| artifact.suggested_filename.clone(), |p| p.display().to_string());
            log::info!("exported {path}");
            app.set_status(format!("Exported to {path}"));
        }
        Err(e) => {
            log::error!("export write failed: {e}");
            app.set_status(format!("Export failed: {e}"));
        }
    }
}
