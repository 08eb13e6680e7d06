//! Event 层：输入处理

mod handler;

pub use handler::{handle_event, poll_event};
