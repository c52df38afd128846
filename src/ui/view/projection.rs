//! 状态投影
//!
//! EditorState -> ViewTree 的纯函数，渲染层只消费 ViewTree

use crate::models::{EditorState, ItemId};

pub const HEADING: &str = "Todo List";
pub const PLACEHOLDER: &str = "Enter new todo";
pub const ADD_LABEL: &str = "Add";
pub const DELETE_LABEL: &str = "Delete";

/// 完整的视图树
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTree<'a> {
    pub heading: &'static str,
    pub input: InputView<'a>,
    pub add_label: &'static str,
    pub rows: Vec<RowView<'a>>,
}

/// 输入框，value 始终等于当前草稿
#[derive(Debug, Clone, PartialEq)]
pub struct InputView<'a> {
    pub value: &'a str,
    pub placeholder: &'static str,
}

/// 列表行
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    pub id: ItemId,
    pub text: &'a str,
    pub completed: bool,
    pub delete_label: &'static str,
}

pub fn project(state: &EditorState) -> ViewTree<'_> {
    ViewTree {
        heading: HEADING,
        input: InputView {
            value: state.draft(),
            placeholder: PLACEHOLDER,
        },
        add_label: ADD_LABEL,
        rows: state
            .items()
            .iter()
            .map(|item| RowView {
                id: item.id,
                text: &item.text,
                completed: item.completed,
                delete_label: DELETE_LABEL,
            })
            .collect(),
    }
}
