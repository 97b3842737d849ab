//! 命令行配置
//!
//! 启动时解析一次，之后只读。

use std::path::PathBuf;

/// 未给出检查点路径时使用的默认保存位置
pub const DEFAULT_CHECKPOINT: &str = "testdump.json";

pub const USAGE: &str = "usage: zlabel <checkpoint> [source]\n\
  <checkpoint>  progress file; if it exists the session resumes from it\n\
  [source]      crawled-data JSON; omitted -> built-in sample corpus";

#[derive(Debug, Clone)]
pub struct Config {
    pub checkpoint: PathBuf,
    pub source: Option<PathBuf>,
}

impl Config {
    /// 从命令行参数构建。无参数时打印用法，退回默认检查点路径。
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        match args.next() {
            Some(checkpoint) => Self {
                checkpoint: PathBuf::from(checkpoint),
                source: args.next().map(PathBuf::from),
            },
            None => {
                eprintln!("{}", USAGE);
                Self {
                    checkpoint: PathBuf::from(DEFAULT_CHECKPOINT),
                    source: None,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
