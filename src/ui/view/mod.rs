//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;
pub mod projection;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use components::{render_button, render_input_widget, render_row};
use layouts::{list_inner, main_regions, row_regions, scroll_offset};
use projection::{ViewTree, project};

/// 渲染 UI（只读，不修改任何状态）
pub fn render(frame: &mut Frame, app: &App) {
    let tree = project(&app.editor);
    let regions = main_regions(frame.area());

    render_title(frame, &tree, regions.heading);
    render_input_widget(frame, regions.input, &tree.input, app.focus == Focus::Input);
    render_button(frame, regions.add_button, tree.add_label);
    render_list(frame, app, &tree, regions.list);
    render_help(frame, app, regions.help);
}

fn render_title(frame: &mut Frame, tree: &ViewTree, area: Rect) {
    let title = Paragraph::new(tree.heading)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_list(frame: &mut Frame, app: &App, tree: &ViewTree, area: Rect) {
    let border_style = match app.focus {
        Focus::List => Style::default().fg(Color::Yellow),
        Focus::Input => Style::default(),
    };
    frame.render_widget(
        Block::default().borders(Borders::ALL).border_style(border_style),
        area,
    );

    let inner = list_inner(area);
    let visible = inner.height as usize;
    let offset = scroll_offset(app.selected_index, tree.rows.len(), visible);

    for (line, (index, row)) in tree
        .rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let (text_area, delete_area) = row_regions(inner, line as u16);
        let is_selected = app.focus == Focus::List && index == app.selected_index;
        render_row(frame, text_area, delete_area, row, is_selected);
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Input => "[Enter] Add  [Tab] List  [Ctrl+C] Quit",
        Focus::List => {
            "[j/k] Navigate  [Space] Toggle  [d] Delete  [a] Input  [q] Quit"
        }
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
