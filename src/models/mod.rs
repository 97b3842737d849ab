//! 数据模型层
//!
//! - Tag: BIO 标签（O / I / B-类别）
//! - Corpus: 原始语料行 + 平行的可变标签网格

pub mod corpus;
pub mod label;

pub use corpus::{Corpus, CorpusError};
pub use label::Tag;
