//! 语料来源
//!
//! 解析顺序：配置的检查点文件存在则直接续标（source 整个被忽略）；
//! 否则读取爬取数据 JSON；两者都没有时退回内置示例语料。

use super::checkpoint::{self, CheckpointError};
use super::config::Config;
use crate::models::Corpus;
use serde::Deserialize;

/// 内置示例语料（开发用）
pub const SAMPLE_LINE: &str = "由于谐振，故所有电抗之和等于零：）";

/// 爬取数据中的一条问答记录。
/// answers 的每个元素是一个元组数组，首位是回答正文，其余字段与标注无关。
#[derive(Debug, Deserialize)]
struct CrawledEntry {
    question: String,
    #[serde(rename = "questionContent")]
    question_content: String,
    #[serde(default)]
    answers: Vec<serde_json::Value>,
}

pub fn load(config: &Config) -> Result<Corpus, CheckpointError> {
    let corpus = resolve(config)?;
    // 空语料没有任何可落光标的位置，退回内置示例
    if corpus.line_count() == 0 {
        tracing::warn!("source produced an empty corpus, using the built-in sample");
        return Ok(Corpus::from_lines([SAMPLE_LINE]));
    }
    Ok(corpus)
}

fn resolve(config: &Config) -> Result<Corpus, CheckpointError> {
    if config.checkpoint.exists() {
        tracing::info!(path = %config.checkpoint.display(), "resuming from checkpoint");
        return checkpoint::load(&config.checkpoint);
    }
    match &config.source {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading crawled source");
            let data = std::fs::read_to_string(path)?;
            Ok(Corpus::from_lines(crawled_lines(&data)?))
        }
        None => Ok(Corpus::from_lines([SAMPLE_LINE])),
    }
}

/// 把爬取 JSON 里的所有文本字段拍平成语料行。空串没有可标注的字，跳过。
fn crawled_lines(data: &str) -> Result<Vec<String>, CheckpointError> {
    let entries: Vec<CrawledEntry> = serde_json::from_str(data)?;
    let mut lines = Vec::new();
    for entry in entries {
        lines.push(entry.question);
        lines.push(entry.question_content);
        lines.extend(
            entry
                .answers
                .iter()
                .filter_map(|ans| ans.get(0).and_then(|v| v.as_str()))
                .map(str::to_string),
        );
    }
    lines.retain(|line| !line.is_empty());
    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/unit/services/source.rs"]
mod tests;
