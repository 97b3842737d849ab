//zlabel/src/annotator/command.rs
//! 命令系统：按键 → 语义命令
//!
//! 架构：
//! - Command: 语义命令枚举（不关心具体按键）
//! - Keybindings: 导航模式下按键 → 命令的映射
//! - 标签输入模式不走映射表：Enter 提交，类别字符追加，其余忽略

use super::Mode;
use crate::core::event::Key;
use crate::models::Tag;
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::HashMap;

/// 标注命令（语义层）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// 行内光标前移一个字
    PrevChar,
    /// 行内光标后移一个字
    NextChar,
    /// 上一句（字光标复位到 0）
    PrevLine,
    /// 下一句（字光标复位到 0）
    NextLine,
    /// 进入标签输入模式，开始录入 B- 类别
    EnterLabel,
    /// 当前字标 "I"
    TagWithin,
    /// 当前字标 "O"
    TagOut,
    /// 追加类别字符到待提交缓冲
    AppendCategory(char),
    /// 提交 B-{缓冲} 并回到导航模式
    CommitLabel,
    /// 立即保存检查点
    Save,
    /// 保存并退出
    Quit,
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::PrevChar => "prevChar",
            Command::NextChar => "nextChar",
            Command::PrevLine => "prevLine",
            Command::NextLine => "nextLine",
            Command::EnterLabel => "enterLabel",
            Command::TagWithin => "tagWithin",
            Command::TagOut => "tagOut",
            Command::AppendCategory(_) => "appendCategory",
            Command::CommitLabel => "commitLabel",
            Command::Save => "save",
            Command::Quit => "quit",
        }
    }
}

/// 键位绑定表（导航模式）
pub struct Keybindings {
    navigation: HashMap<Key, Command>,
}

impl Keybindings {
    /// 默认键位：方向键与字母键各绑一份
    pub fn default() -> Self {
        let mut nav = HashMap::new();

        nav.insert(Key::simple(KeyCode::Up), Command::PrevChar);
        nav.insert(Key::simple(KeyCode::Char('k')), Command::PrevChar);
        nav.insert(Key::simple(KeyCode::Down), Command::NextChar);
        nav.insert(Key::simple(KeyCode::Char('j')), Command::NextChar);

        nav.insert(Key::simple(KeyCode::Left), Command::PrevLine);
        nav.insert(Key::simple(KeyCode::Char('h')), Command::PrevLine);
        nav.insert(Key::simple(KeyCode::Right), Command::NextLine);
        nav.insert(Key::simple(KeyCode::Char('l')), Command::NextLine);

        // b 和 I 都进入标签输入
        nav.insert(Key::simple(KeyCode::Char('b')), Command::EnterLabel);
        nav.insert(Key::shift(KeyCode::Char('i')), Command::EnterLabel);

        nav.insert(Key::simple(KeyCode::Char('i')), Command::TagWithin);
        nav.insert(Key::simple(KeyCode::Char('o')), Command::TagOut);

        nav.insert(Key::simple(KeyCode::Char('w')), Command::Save);
        nav.insert(Key::simple(KeyCode::Char('q')), Command::Quit);
        nav.insert(Key::shift(KeyCode::Char('q')), Command::Quit);

        Self { navigation: nav }
    }

    pub fn empty() -> Self {
        Self {
            navigation: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.navigation.insert(key, command);
    }

    pub fn get(&self, key: &Key) -> Option<&Command> {
        self.navigation.get(key)
    }

    /// 按当前模式翻译按键；未绑定的键返回 None（no-op）
    pub fn translate(&self, mode: Mode, event: &KeyEvent) -> Option<Command> {
        match mode {
            Mode::Navigation => self.navigation.get(&Key::from(*event)).cloned(),
            Mode::LabelEntry => match event.code {
                KeyCode::Enter => Some(Command::CommitLabel),
                KeyCode::Char(ch) if Tag::is_category_char(ch) => {
                    Some(Command::AppendCategory(ch))
                }
                _ => None,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotator/command.rs"]
mod tests;
