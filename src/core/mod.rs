//! 核心抽象：统一输入事件定义
//!
//! 标注状态机只消费这里的事件类型，不直接依赖 crossterm，
//! 因此可以在没有终端的测试环境里驱动。

pub mod event;

pub use event::{InputEvent, Key};
