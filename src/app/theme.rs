//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。
//!
//! 构造一次后只读传给渲染层，没有进程级可变状态。

use ratatui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub statusbar_normal_bg: Color,
    pub statusbar_normal_fg: Color,
    pub statusbar_insert_bg: Color,
    pub statusbar_insert_fg: Color,
    pub statusbar_warning_bg: Color,
    pub statusbar_warning_fg: Color,
    pub headerbar_bg: Color,
    pub headerbar_fg: Color,
    pub text_fg: Color,
    pub label_fg: Color,
    pub unset_label_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            // 反色状态条：警告红底、录入青底
            statusbar_normal_bg: Color::White,
            statusbar_normal_fg: Color::Black,
            statusbar_insert_bg: Color::Cyan,
            statusbar_insert_fg: Color::Black,
            statusbar_warning_bg: Color::Red,
            statusbar_warning_fg: Color::Black,
            headerbar_bg: Color::White,
            headerbar_fg: Color::Black,
            text_fg: Color::Reset,
            label_fg: Color::Cyan,
            unset_label_fg: Color::Indexed(8), // DarkGray
        }
    }
}

impl UiTheme {
    pub fn statusbar_normal(&self) -> Style {
        Style::default()
            .fg(self.statusbar_normal_fg)
            .bg(self.statusbar_normal_bg)
    }

    pub fn statusbar_insert(&self) -> Style {
        Style::default()
            .fg(self.statusbar_insert_fg)
            .bg(self.statusbar_insert_bg)
    }

    pub fn statusbar_warning(&self) -> Style {
        Style::default()
            .fg(self.statusbar_warning_fg)
            .bg(self.statusbar_warning_bg)
    }

    pub fn headerbar(&self) -> Style {
        Style::default().fg(self.headerbar_fg).bg(self.headerbar_bg)
    }
}
