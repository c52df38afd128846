//! 通用 UI 组件
//!
//! 输入框、按钮、列表行

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layouts::input_scroll;
use super::projection::{InputView, RowView};

/// [组件] 带占位符的输入框
pub fn render_input_widget(frame: &mut Frame, area: Rect, input: &InputView, is_focused: bool) {
    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let content = if input.value.is_empty() {
        Span::styled(input.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(input.value)
    };

    let inner_width = area.width.saturating_sub(2);
    let typed = u16::try_from(Line::from(input.value).width()).unwrap_or(u16::MAX);
    let scroll = input_scroll(typed, inner_width);

    let widget = Paragraph::new(Line::from(content))
        .scroll((0, scroll))
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(widget, area);

    if is_focused && inner_width > 0 && area.height > 2 {
        let x = area.x + 1 + (typed - scroll).min(inner_width - 1);
        frame.set_cursor_position((x, area.y + 1));
    }
}

/// [组件] 按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

/// [组件] 列表行：完成标记 + 文本 + 删除按钮
pub fn render_row(frame: &mut Frame, text_area: Rect, delete_area: Rect, row: &RowView, is_selected: bool) {
    let marker = if row.completed { "[x] " } else { "[ ] " };

    let mut text_style = if row.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    if is_selected {
        text_style = text_style.add_modifier(Modifier::REVERSED);
    }

    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(row.text, text_style),
    ]);
    frame.render_widget(Paragraph::new(line), text_area);

    let delete = Paragraph::new(format!("[{}]", row.delete_label))
        .style(Style::default().fg(Color::Red));
    frame.render_widget(delete, delete_area);
}
