//! BIO 标签模型
//!
//! 线上格式（与检查点文件一致）：
//! - `"O"`：不属于任何实体
//! - `"I"`：实体内部，必须紧跟 `B-{xxx}` 或 `I`
//! - `"B-{category}"`：实体起始，类别由 {a-z, A-Z, `-`, `_`} 组成，可为空

use compact_str::{CompactString, ToCompactString};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Out,
    Inside,
    Begin(CompactString),
}

impl Tag {
    /// 合法的类别字符：a-z, A-Z, `-`, `_`
    pub fn is_category_char(ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '-' || ch == '_'
    }

    /// 当前标签后面是否允许出现 `I`
    pub fn opens_span(&self) -> bool {
        matches!(self, Tag::Begin(_) | Tag::Inside)
    }

    pub fn begin(category: impl AsRef<str>) -> Self {
        Tag::Begin(category.as_ref().to_compact_string())
    }

    pub fn encode(&self) -> CompactString {
        match self {
            Tag::Out => CompactString::const_new("O"),
            Tag::Inside => CompactString::const_new("I"),
            Tag::Begin(category) => {
                let mut s = CompactString::const_new("B-");
                s.push_str(category);
                s
            }
        }
    }

    pub fn decode(s: &str) -> Option<Tag> {
        match s {
            "O" => Some(Tag::Out),
            "I" => Some(Tag::Inside),
            _ => s.strip_prefix("B-").map(|category| {
                Tag::Begin(category.to_compact_string())
            }),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

struct TagVisitor;

impl<'de> Visitor<'de> for TagVisitor {
    type Value = Tag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"O\", \"I\" or \"B-<category>\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Tag, E> {
        Tag::decode(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Tag, D::Error> {
        deserializer.deserialize_str(TagVisitor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/label.rs"]
mod tests;
