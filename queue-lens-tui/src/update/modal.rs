//! 弹窗更新逻辑

use queue_lens_core::export_json;

use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }
        ModalMessage::Export => {
            handle_export(app);
        }
    }
}

/// 导出弹窗中的解码结果
fn handle_export(app: &mut App) {
    let Some(text) = app.modal.decoded_text().map(str::to_string) else {
        app.set_status("Nothing to export");
        return;
    };

    match export_json(&text) {
        Ok(artifact) => super::content::write_artifact(app, &artifact),
        Err(e) => app.set_status(format!("Export failed: {e}")),
    }
}
