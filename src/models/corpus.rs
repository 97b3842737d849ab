//! 语料存储
//!
//! 职责：
//! - 不可变的原始语料行（原文 + 字素簇切分）
//! - 平行的可变标签网格（每个标注单元一格）
//! - 光标相关的边界探测读取
//!
//! 这里不做 BIO 合法性校验——校验属于标注状态机；存储只是哑记录。

use super::label::Tag;
use compact_str::{CompactString, ToCompactString};
use unicode_segmentation::UnicodeSegmentation;

/// 一行语料。加载后不再变化。
#[derive(Debug, Clone)]
pub struct Line {
    raw: String,
    cells: Vec<CompactString>,
}

impl Line {
    fn new(raw: String) -> Self {
        let cells = raw
            .graphemes(true)
            .map(|g| g.to_compact_string())
            .collect();
        Self { raw, cells }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).map(CompactString::as_str)
    }
}

pub type LabelRow = Vec<Option<Tag>>;

#[derive(Debug)]
pub enum CorpusError {
    /// 标签行长度与该行标注单元数不一致
    ShapeMismatch {
        line: usize,
        expected: usize,
        got: usize,
    },
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::ShapeMismatch {
                line,
                expected,
                got,
            } => write!(
                f,
                "label row {} has {} entries, line has {} characters",
                line, got, expected
            ),
        }
    }
}

impl std::error::Error for CorpusError {}

pub struct Corpus {
    lines: Vec<Line>,
    labels: Vec<LabelRow>,
}

impl Corpus {
    /// 全新语料：所有标签未设置
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<Line> = lines.into_iter().map(|s| Line::new(s.into())).collect();
        let labels = lines.iter().map(|line| vec![None; line.len()]).collect();
        Self { lines, labels }
    }

    /// 从 (原文, 标签行) 对重建（检查点恢复路径）
    pub fn from_rows<I>(rows: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = (String, LabelRow)>,
    {
        let mut lines = Vec::new();
        let mut labels = Vec::new();
        for (idx, (raw, row)) in rows.into_iter().enumerate() {
            let line = Line::new(raw);
            if row.len() != line.len() {
                return Err(CorpusError::ShapeMismatch {
                    line: idx,
                    expected: line.len(),
                    got: row.len(),
                });
            }
            lines.push(line);
            labels.push(row);
        }
        Ok(Self { lines, labels })
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    pub fn line_len(&self, idx: usize) -> Option<usize> {
        self.lines.get(idx).map(Line::len)
    }

    /// 读取 (字符, 标签)。越界返回 None——渲染窗口会探测行边界以外的下标。
    pub fn char_label(&self, line: usize, ch: usize) -> Option<(&str, Option<&Tag>)> {
        let cell = self.lines.get(line)?.cell(ch)?;
        let label = self.labels[line][ch].as_ref();
        Some((cell, label))
    }

    /// 覆写标签格。越界属于调用方光标失步，直接 panic（致命契约违例）。
    pub fn set_label(&mut self, line: usize, ch: usize, tag: Tag) {
        let row = self
            .labels
            .get_mut(line)
            .unwrap_or_else(|| panic!("label write out of range: line {}", line));
        let slot = row
            .get_mut(ch)
            .unwrap_or_else(|| panic!("label write out of range: line {} char {}", line, ch));
        *slot = Some(tag);
    }

    /// 第一个未标注的 (行, 字) 位置；全部已标注时回到 (0, 0)
    pub fn first_unset(&self) -> (usize, usize) {
        for (line_idx, row) in self.labels.iter().enumerate() {
            for (char_idx, label) in row.iter().enumerate() {
                if label.is_none() {
                    return (line_idx, char_idx);
                }
            }
        }
        (0, 0)
    }

    /// 按序导出 (原文, 标签行)，供检查点序列化
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Option<Tag>])> {
        self.lines
            .iter()
            .map(|line| line.raw())
            .zip(self.labels.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/corpus.rs"]
mod tests;
