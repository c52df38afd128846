//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::ItemId;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 编辑器状态转换
    SetDraft(String),
    AddItem,
    ToggleItem(ItemId),
    DeleteItem(ItemId),

    // 焦点/导航（仅影响 UI 局部状态）
    FocusInput,
    FocusList,
    SelectPrev,
    SelectNext,
}
