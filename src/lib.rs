//! zlabel - 终端字符级 BIO 序列标注工具
//!
//! 模块结构：
//! - core: 输入事件封装（InputEvent, Key）
//! - models: 数据模型（Corpus, Tag）
//! - annotator: 标注状态机（光标、模式、BIO 约束）
//! - services: 配置、语料来源与检查点
//! - app: 主题与渲染
//! - tui: 终端生命周期守护

pub mod annotator;
pub mod app;
pub mod core;
pub mod models;
pub mod services;
pub mod tui;
