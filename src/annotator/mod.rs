//! 标注状态机
//!
//! 两种交互模式：
//! - Navigation: 移动光标、直接打 O/I 标签
//! - LabelEntry: 录入 B- 标签的类别名
//!
//! 所有可恢复的用户侧状况（越界移动、非法的 I 标签）在这里化为一次性
//! 警告并拒绝变更，不会作为错误返回给调用方；警告由渲染方消费一次后
//! 即清空。存储越界与字符断言失配属于光标失步，是致命错误。

use crate::core::event::InputEvent;
use crate::models::{Corpus, Tag};
use crossterm::event::KeyEventKind;

pub mod command;

pub use command::{Command, Keybindings};

pub const WARN_FIRST_CHAR: &str = "First char in sentence!";
pub const WARN_LAST_CHAR: &str = "Last char in sentence!";
pub const WARN_FIRST_LINE: &str = "First sentence in corpus!";
pub const WARN_LAST_LINE: &str = "Last sentence in corpus!";
pub const WARN_WITHIN_FIRST: &str = "The 'within' tag cannot be the first tag!";
pub const WARN_WITHIN_CONTEXT: &str =
    "The 'within' tag must follow 'begin' or a previous 'within'!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Navigation,
    LabelEntry,
}

/// 事件处理结果：调用方据此决定是否保存、是否退出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Save,
    Quit,
}

impl Outcome {
    pub fn is_quit(&self) -> bool {
        matches!(self, Outcome::Quit)
    }
}

/// 成功写入标签后的光标行进结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// 行内前进一格
    Stepped,
    /// 跨到下一句的句首
    Wrapped,
    /// 语料已尽，光标原地不动
    Exhausted,
}

pub struct Annotator {
    corpus: Corpus,
    bindings: Keybindings,
    cursor: (usize, usize),
    mode: Mode,
    pending: String,
    warning: Option<String>,
}

impl Annotator {
    /// 初始光标落在第一个未标注的 (行, 字)；全部标完则回到 (0, 0)
    pub fn new(corpus: Corpus) -> Self {
        let cursor = corpus.first_unset();
        Self {
            corpus,
            bindings: Keybindings::default(),
            cursor,
            mode: Mode::Navigation,
            pending: String::new(),
            warning: None,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// 消费一次性警告；取走即清空
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    #[cfg(test)]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::debug!(warning = %msg, "input refused");
        self.warning = Some(msg);
    }

    /// 处理一个输入事件。只响应按键按下；其余事件一律 Continue。
    pub fn handle_event(&mut self, event: &InputEvent) -> Outcome {
        let InputEvent::Key(key) = event else {
            return Outcome::Continue;
        };
        if key.kind != KeyEventKind::Press {
            return Outcome::Continue;
        }
        match self.bindings.translate(self.mode, key) {
            Some(command) => self.execute(&command),
            None => Outcome::Continue,
        }
    }

    pub fn execute(&mut self, command: &Command) -> Outcome {
        match command {
            Command::PrevChar => {
                self.move_char(-1);
                Outcome::Continue
            }
            Command::NextChar => {
                self.move_char(1);
                Outcome::Continue
            }
            Command::PrevLine => {
                self.move_line(-1);
                Outcome::Continue
            }
            Command::NextLine => {
                self.move_line(1);
                Outcome::Continue
            }
            Command::EnterLabel => {
                self.mode = Mode::LabelEntry;
                self.pending.clear();
                Outcome::Continue
            }
            Command::TagWithin => {
                self.tag_within();
                Outcome::Continue
            }
            Command::TagOut => {
                self.write_label(Tag::Out, None);
                Outcome::Continue
            }
            Command::AppendCategory(ch) => {
                self.pending.push(*ch);
                Outcome::Continue
            }
            Command::CommitLabel => {
                self.commit_label();
                Outcome::Continue
            }
            Command::Save => Outcome::Save,
            Command::Quit => Outcome::Quit,
        }
    }

    /// 行内移动。先做边界判定，越界不动并置警告。
    fn move_char(&mut self, delta: isize) {
        let (line, ch) = self.cursor;
        let len = self.corpus.line_len(line).unwrap_or(0);
        let target = ch as isize + delta;
        if target < 0 {
            self.set_warning(WARN_FIRST_CHAR);
        } else if target >= len as isize {
            self.set_warning(WARN_LAST_CHAR);
        } else {
            self.cursor = (line, target as usize);
        }
    }

    /// 跨句移动。成功时字光标复位到 0。
    fn move_line(&mut self, delta: isize) {
        let (line, _) = self.cursor;
        let target = line as isize + delta;
        if target < 0 {
            self.set_warning(WARN_FIRST_LINE);
        } else if target >= self.corpus.line_count() as isize {
            self.set_warning(WARN_LAST_LINE);
        } else {
            self.cursor = (target as usize, 0);
        }
    }

    /// "I" 只能跟在 B-{xxx} 或 I 之后，且不能出现在句首
    fn tag_within(&mut self) {
        let (line, ch) = self.cursor;
        if ch == 0 {
            self.set_warning(WARN_WITHIN_FIRST);
            return;
        }
        let prev_opens = self
            .corpus
            .char_label(line, ch - 1)
            .and_then(|(_, label)| label)
            .map(Tag::opens_span)
            .unwrap_or(false);
        if !prev_opens {
            self.set_warning(WARN_WITHIN_CONTEXT);
            return;
        }
        self.write_label(Tag::Inside, None);
    }

    fn commit_label(&mut self) {
        self.mode = Mode::Navigation;
        let category = std::mem::take(&mut self.pending);
        // 空缓冲提交得到 "B-"，允许
        self.write_label(Tag::begin(category), None);
    }

    /// 写入当前光标位置的标签并按行进规则推进光标。
    ///
    /// expect 提供时校验光标下的字符：不匹配说明光标与存储失步，
    /// 属于编程契约违例，直接断言失败而不是用户侧警告。
    pub fn write_label(&mut self, tag: Tag, expect: Option<&str>) -> Advance {
        let (line, ch) = self.cursor;
        if let Some(expected) = expect {
            let (actual, _) = self
                .corpus
                .char_label(line, ch)
                .unwrap_or_else(|| panic!("cursor out of range: line {} char {}", line, ch));
            assert_eq!(
                actual, expected,
                "cursor desync at line {} char {}",
                line, ch
            );
        }
        self.corpus.set_label(line, ch, tag);
        self.advance()
    }

    /// 行进规则：行内 +1；行尾则到下一句句首；语料已尽则原地不动。
    fn advance(&mut self) -> Advance {
        let (line, ch) = self.cursor;
        let len = self.corpus.line_len(line).unwrap_or(0);
        if ch + 1 < len {
            self.cursor = (line, ch + 1);
            Advance::Stepped
        } else if line + 1 < self.corpus.line_count() {
            self.cursor = (line + 1, 0);
            tracing::debug!(line = line + 1, "advanced to next sentence");
            Advance::Wrapped
        } else {
            tracing::info!("corpus exhausted, cursor parked");
            Advance::Exhausted
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotator/annotator.rs"]
mod tests;
