//! View 层：UI 渲染
//!
//! 只读取 Model，绝不修改状态。

pub mod components;
mod layout;
pub mod pages;

pub use layout::render;
