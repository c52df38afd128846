//! 输入事件映射 (Input -> Action)
//!
//! 将按键、粘贴和鼠标事件转换为 Action

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::actions::Action;
use super::state::{App, Focus};
use super::view::layouts::{Hit, hit_test};
use super::view::projection::project;

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(app: &App, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let draft = app.editor.draft();
    match app.focus {
        Focus::Input => match key.code {
            KeyCode::Enter => Some(Action::AddItem),
            KeyCode::Tab | KeyCode::Down | KeyCode::Esc => Some(Action::FocusList),
            KeyCode::Backspace => {
                let mut text = draft.to_string();
                text.pop();
                Some(Action::SetDraft(text))
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SetDraft(format!("{draft}{c}")))
            }
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => Some(Action::FocusInput),
            KeyCode::Char(' ') | KeyCode::Enter => app.selected_item_id().map(Action::ToggleItem),
            KeyCode::Char('d') | KeyCode::Delete => app.selected_item_id().map(Action::DeleteItem),
            _ => None,
        },
    }
}

/// 粘贴文本追加到草稿
pub fn get_paste_action(app: &App, text: &str) -> Option<Action> {
    match app.focus {
        Focus::Input => Some(Action::SetDraft(format!(
            "{}{}",
            app.editor.draft(),
            normalize_paste(text)
        ))),
        Focus::List => None,
    }
}

/// 控制字符绘制时会被丢弃，换行、制表符等统一替换为空格
fn normalize_paste(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// 左键点击映射到点击目标
pub fn get_mouse_action(app: &App, area: Rect, mouse: MouseEvent) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let tree = project(&app.editor);
    let hit = hit_test(area, app.selected_index, tree.rows.len(), mouse.column, mouse.row)?;
    match hit {
        Hit::Input => Some(Action::FocusInput),
        Hit::AddButton => Some(Action::AddItem),
        Hit::RowText(index) => tree.rows.get(index).map(|row| Action::ToggleItem(row.id)),
        Hit::RowDelete(index) => tree.rows.get(index).map(|row| Action::DeleteItem(row.id)),
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, area: Rect, event: Event) -> bool {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => get_action(app, key),
        Event::Paste(text) => get_paste_action(app, &text),
        Event::Mouse(mouse) => get_mouse_action(app, area, mouse),
        _ => None,
    };

    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
