//! 服务层模块
//!
//! - ConfigService 的角色由不可变 Config 承担（启动时解析一次）
//! - checkpoint: 标注进度的 JSON 检查点
//! - source: 语料来源解析（检查点优先，其次爬取数据，最后内置示例）

pub mod checkpoint;
pub mod config;
pub mod source;

pub use checkpoint::{CheckpointError, CheckpointRecord};
pub use config::Config;
