//! 检查点持久化
//!
//! 文件格式：JSON 列表，每条 `{"raw": 原文, "lab": [null 或标签串]}`，
//! 与语料行一一对应、保序。保存总是整体覆写，没有增量写入。

use crate::models::{Corpus, CorpusError, Tag};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointRecord {
    pub raw: String,
    pub lab: Vec<Option<Tag>>,
}

#[derive(Debug)]
pub enum CheckpointError {
    Io(io::Error),
    Json(serde_json::Error),
    Shape(CorpusError),
}

impl std::fmt::Display for CheckpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckpointError::Io(err) => write!(f, "checkpoint I/O failed: {}", err),
            CheckpointError::Json(err) => write!(f, "checkpoint JSON invalid: {}", err),
            CheckpointError::Shape(err) => write!(f, "checkpoint shape invalid: {}", err),
        }
    }
}

impl std::error::Error for CheckpointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckpointError::Io(err) => Some(err),
            CheckpointError::Json(err) => Some(err),
            CheckpointError::Shape(err) => Some(err),
        }
    }
}

impl From<io::Error> for CheckpointError {
    fn from(err: io::Error) -> Self {
        CheckpointError::Io(err)
    }
}

impl From<serde_json::Error> for CheckpointError {
    fn from(err: serde_json::Error) -> Self {
        CheckpointError::Json(err)
    }
}

impl From<CorpusError> for CheckpointError {
    fn from(err: CorpusError) -> Self {
        CheckpointError::Shape(err)
    }
}

pub fn save(path: &Path, corpus: &Corpus) -> Result<(), CheckpointError> {
    let records: Vec<CheckpointRecord> = corpus
        .rows()
        .map(|(raw, labels)| CheckpointRecord {
            raw: raw.to_string(),
            lab: labels.to_vec(),
        })
        .collect();
    let data = serde_json::to_string(&records)?;
    std::fs::write(path, data)?;
    tracing::info!(path = %path.display(), lines = records.len(), "checkpoint saved");
    Ok(())
}

pub fn load(path: &Path) -> Result<Corpus, CheckpointError> {
    let data = std::fs::read_to_string(path)?;
    let records: Vec<CheckpointRecord> = serde_json::from_str(&data)?;
    let corpus = Corpus::from_rows(records.into_iter().map(|r| (r.raw, r.lab)))?;
    tracing::info!(path = %path.display(), "checkpoint loaded");
    Ok(corpus)
}

#[cfg(test)]
#[path = "../../tests/unit/services/checkpoint.rs"]
mod tests;
