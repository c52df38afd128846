//! 业务逻辑处理 (Update/Dispatch)
//!
//! 每个 Action 只触发一次状态转换，并在返回前完成

use tracing::debug;

use super::actions::Action;
use super::state::{App, Focus};
use crate::models::ItemId;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::SetDraft(text) => self.editor.set_draft(text),
            Action::AddItem => self.add_item(),
            Action::ToggleItem(id) => self.toggle_item(id),
            Action::DeleteItem(id) => self.delete_item(id),

            Action::FocusInput => self.focus = Focus::Input,
            Action::FocusList => self.focus = Focus::List,
            Action::SelectPrev => self.move_up(),
            Action::SelectNext => self.move_down(),
        }
        self.clamp_selection();
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.editor.len() {
            self.selected_index += 1;
        }
    }

    // ============ 编辑器操作 ============

    fn add_item(&mut self) {
        match self.editor.add_item() {
            Some(id) => debug!(%id, total = self.editor.len(), "item added"),
            None => debug!("add rejected: blank draft"),
        }
    }

    fn toggle_item(&mut self, id: ItemId) {
        if self.editor.toggle_item(id) {
            let completed = self.editor.get(id).is_some_and(|item| item.completed);
            debug!(%id, completed, "item toggled");
        } else {
            debug!(%id, "toggle miss");
        }
    }

    fn delete_item(&mut self, id: ItemId) {
        if self.editor.delete_item(id) {
            debug!(%id, total = self.editor.len(), "item deleted");
        } else {
            debug!(%id, "delete miss");
        }
    }
}
