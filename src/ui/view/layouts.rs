//! 布局与点击检测
//!
//! 渲染和鼠标处理共用同一套布局计算，点击总是命中实际绘制的位置

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use super::projection::DELETE_LABEL;

/// 删除按钮宽度，即 "[Delete]"
pub const DELETE_WIDTH: u16 = DELETE_LABEL.len() as u16 + 2;

/// 主界面各区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub heading: Rect,
    pub input: Rect,
    pub add_button: Rect,
    pub list: Rect,
    pub help: Rect,
}

/// 点击目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input,
    AddButton,
    RowText(usize), // 条目索引
    RowDelete(usize),
}

pub fn main_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 输入
            Constraint::Min(3),    // 列表
            Constraint::Length(3), // 帮助
        ])
        .split(area);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(9)])
        .split(chunks[1]);

    Regions {
        heading: chunks[0],
        input: input_row[0],
        add_button: input_row[1],
        list: chunks[2],
        help: chunks[3],
    }
}

/// 列表块内部区域（去掉边框）
pub fn list_inner(list: Rect) -> Rect {
    Rect {
        x: list.x.saturating_add(1),
        y: list.y.saturating_add(1),
        width: list.width.saturating_sub(2),
        height: list.height.saturating_sub(2),
    }
}

/// 滚动偏移，保证选中行可见
pub fn scroll_offset(selected: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    let max_offset = len - visible;
    selected.saturating_sub(visible - 1).min(max_offset)
}

/// 输入框水平滚动量，保证草稿末尾和光标都可见
///
/// 光标占用末尾一格，文本最多显示 inner_width - 1 列。
pub fn input_scroll(typed: u16, inner_width: u16) -> u16 {
    typed.saturating_sub(inner_width.saturating_sub(1))
}

/// 某一可见行拆分为 (文本区域, 删除按钮区域)
pub fn row_regions(inner: Rect, line: u16) -> (Rect, Rect) {
    let y = inner.y + line;
    let delete_width = DELETE_WIDTH.min(inner.width);
    let text = Rect {
        x: inner.x,
        y,
        width: inner.width - delete_width,
        height: 1,
    };
    let delete = Rect {
        x: inner.x + text.width,
        y,
        width: delete_width,
        height: 1,
    };
    (text, delete)
}

/// 根据终端坐标找到点击目标
pub fn hit_test(area: Rect, selected: usize, len: usize, column: u16, row: u16) -> Option<Hit> {
    let regions = main_regions(area);
    let pos = Position::new(column, row);

    if regions.input.contains(pos) {
        return Some(Hit::Input);
    }
    if regions.add_button.contains(pos) {
        return Some(Hit::AddButton);
    }

    let inner = list_inner(regions.list);
    if !inner.contains(pos) {
        return None;
    }

    let line = row - inner.y;
    let offset = scroll_offset(selected, len, inner.height as usize);
    let index = offset + line as usize;
    if index >= len {
        return None;
    }

    let (text, delete) = row_regions(inner, line);
    if delete.contains(pos) {
        Some(Hit::RowDelete(index))
    } else if text.contains(pos) {
        Some(Hit::RowText(index))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 20,
    };

    #[test]
    fn test_regions_stack_vertically() {
        let r = main_regions(AREA);
        assert_eq!(r.heading.y, 0);
        assert_eq!(r.input.y, 3);
        assert_eq!(r.add_button.y, 3);
        assert_eq!(r.add_button.width, 9);
        assert_eq!(r.list.y, 6);
        assert_eq!(r.help.y, 17);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 3, 10), 0);
        assert_eq!(scroll_offset(4, 20, 5), 0);
        assert_eq!(scroll_offset(5, 20, 5), 1);
        assert_eq!(scroll_offset(19, 20, 5), 15);
        assert_eq!(scroll_offset(3, 20, 0), 0);
    }

    #[test]
    fn test_input_scroll() {
        assert_eq!(input_scroll(0, 49), 0);
        assert_eq!(input_scroll(48, 49), 0);
        assert_eq!(input_scroll(49, 49), 1);
        assert_eq!(input_scroll(84, 49), 36);
        assert_eq!(input_scroll(u16::MAX, 49), u16::MAX - 48);
        assert_eq!(input_scroll(5, 0), 5);
    }

    #[test]
    fn test_hit_input_and_button() {
        assert_eq!(hit_test(AREA, 0, 0, 5, 4), Some(Hit::Input));
        assert_eq!(hit_test(AREA, 0, 0, 55, 4), Some(Hit::AddButton));
        assert_eq!(hit_test(AREA, 0, 0, 5, 1), None);
    }

    #[test]
    fn test_hit_rows() {
        // 列表内部从 (1, 7) 开始
        assert_eq!(hit_test(AREA, 0, 2, 3, 7), Some(Hit::RowText(0)));
        assert_eq!(hit_test(AREA, 0, 2, 3, 8), Some(Hit::RowText(1)));
        assert_eq!(hit_test(AREA, 0, 2, 55, 8), Some(Hit::RowDelete(1)));
        assert_eq!(hit_test(AREA, 0, 2, 3, 9), None);
    }

    #[test]
    fn test_hit_rows_scrolled() {
        // 可见 9 行，选中第 15 行时偏移为 7
        assert_eq!(hit_test(AREA, 15, 20, 3, 7), Some(Hit::RowText(7)));
        assert_eq!(hit_test(AREA, 15, 20, 3, 15), Some(Hit::RowText(15)));
    }
}
