//zlabel/src/app/render.rs
//! 渲染：页头 / 纵向标注带 / 状态条
//!
//! 标注带：光标上下各 WINDOW_MARGIN 个标注单元竖排在屏幕中央，
//! 每个单元占两行，字在中轴左侧、标签在右侧，未标注显示 `_`，
//! 硬件光标停在中心行的标签列。

use crate::annotator::{Annotator, Mode};
use crate::app::theme::UiTheme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

// UI Layout Constants
const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
/// 光标上下各显示多少个标注单元
const WINDOW_MARGIN: isize = 9;
/// 标注带窄于此宽度没法摆下中轴两侧的内容
const MIN_TRUNK_WIDTH: u16 = 8;

const NORMAL_HELP: &str =
    "q - save and quit | w - save | j/k - next/prev char | b - begin | i - within | o - out-of";

pub fn render(annotator: &mut Annotator, theme: &UiTheme, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    render_header(annotator, theme, frame, chunks[0]);
    render_trunk(annotator, theme, frame, chunks[1]);
    render_status(annotator, theme, frame, chunks[2]);
}

fn render_header(annotator: &Annotator, theme: &UiTheme, frame: &mut Frame, area: Rect) {
    let (line, ch) = annotator.cursor();
    let count = annotator.corpus().line_count();
    let len = annotator.corpus().line_len(line).unwrap_or(0);
    let text = format!(
        " zlabel | sentence {}/{} | char {}/{}",
        line + 1,
        count,
        ch + 1,
        len
    );
    frame.render_widget(Paragraph::new(text).style(theme.headerbar()), area);
}

fn render_trunk(annotator: &Annotator, theme: &UiTheme, frame: &mut Frame, area: Rect) {
    if area.height == 0 || area.width < MIN_TRUNK_WIDTH {
        return;
    }
    let (line, center) = annotator.cursor();
    let mid_x = area.x + area.width / 2;
    let mid_y = area.y + area.height / 2;

    let buf = frame.buffer_mut();
    for offset in -WINDOW_MARGIN..=WINDOW_MARGIN {
        let idx = center as isize + offset;
        if idx < 0 {
            continue;
        }
        let Some((cell, label)) = annotator.corpus().char_label(line, idx as usize) else {
            continue;
        };

        let y = mid_y as isize + offset * 2;
        if y < area.y as isize || y >= (area.y + area.height) as isize {
            continue;
        }
        let y = y as u16;

        // 字素右对齐到中轴左侧；宽字符（CJK）占两列
        let width = cell.width().max(1) as u16;
        let char_x = (mid_x - 2).saturating_sub(width - 1);
        buf.set_string(char_x, y, cell, Style::default().fg(theme.text_fg));

        match label {
            Some(tag) => buf.set_string(
                mid_x + 2,
                y,
                tag.encode(),
                Style::default().fg(theme.label_fg),
            ),
            None => buf.set_string(
                mid_x + 2,
                y,
                "_",
                Style::default().fg(theme.unset_label_fg),
            ),
        }
    }

    frame.set_cursor_position((mid_x + 2, mid_y));
}

fn render_status(annotator: &mut Annotator, theme: &UiTheme, frame: &mut Frame, area: Rect) {
    // 警告只显示一个周期，取走即清空
    let (text, style) = if let Some(warning) = annotator.take_warning() {
        (warning, theme.statusbar_warning())
    } else {
        match annotator.mode() {
            Mode::Navigation => (NORMAL_HELP.to_string(), theme.statusbar_normal()),
            Mode::LabelEntry => (
                format!("LABEL  B-{}", annotator.pending()),
                theme.statusbar_insert(),
            ),
        }
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;
