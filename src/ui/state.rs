//! App 状态定义 (Model)
//!
//! 编辑器状态由 EditorState 独占，这里只附加焦点和选中行等 UI 局部状态

use crate::models::{EditorState, Item, ItemId};

/// 应用状态
pub struct App {
    pub editor: EditorState,
    pub focus: Focus,
    pub selected_index: usize,
}

/// 键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            editor: EditorState::new(),
            focus: Focus::Input,
            selected_index: 0,
        }
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        let len = self.editor.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 获取当前选中的条目
    pub fn selected_item(&self) -> Option<&Item> {
        self.editor.items().get(self.selected_index)
    }

    /// 获取当前选中的条目 ID
    pub fn selected_item_id(&self) -> Option<ItemId> {
        self.selected_item().map(|item| item.id)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
