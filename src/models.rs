use std::fmt;

/// 条目 ID（会话内单调递增，永不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 待办条目
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub text: String, // 保留原始输入，不做 trim
    pub completed: bool,
}

impl Item {
    pub fn new(id: ItemId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// 编辑器状态：条目列表 + 草稿
#[derive(Debug, Clone)]
pub struct EditorState {
    items: Vec<Item>,
    draft: String,
    next_id: u64,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            draft: String::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// 替换草稿（不校验、不 trim）
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// 用草稿追加新条目
    ///
    /// 草稿 trim 后为空时不做任何修改（草稿本身也保留）。
    /// 成功时返回新条目的 ID 并清空草稿。
    pub fn add_item(&mut self) -> Option<ItemId> {
        if self.draft.trim().is_empty() {
            return None;
        }

        let id = self.allocate_id();
        let text = std::mem::take(&mut self.draft);
        self.items.push(Item::new(id, text));
        Some(id)
    }

    /// 切换完成状态，ID 不存在时返回 false
    pub fn toggle_item(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// 删除条目并保持其余条目的相对顺序，ID 不存在时返回 false
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn state_with(texts: &[&str]) -> (EditorState, Vec<ItemId>) {
        let mut state = EditorState::new();
        let ids = texts
            .iter()
            .map(|text| {
                state.set_draft(*text);
                state.add_item().unwrap()
            })
            .collect();
        (state, ids)
    }

    #[test]
    fn test_add_item() {
        let mut state = EditorState::new();
        state.set_draft("Buy milk");
        let id = state.add_item().unwrap();

        assert_eq!(state.len(), 1);
        assert_eq!(state.items()[0].id, id);
        assert_eq!(state.items()[0].text, "Buy milk");
        assert!(!state.items()[0].completed);
        assert_eq!(state.draft(), "");
    }

    #[test]
    fn test_add_keeps_untrimmed_text() {
        let mut state = EditorState::new();
        state.set_draft("  padded  ");
        state.add_item().unwrap();

        assert_eq!(state.items()[0].text, "  padded  ");
    }

    #[test]
    fn test_add_appends_to_end() {
        let (mut state, ids) = state_with(&["a", "b"]);
        state.set_draft("c");
        let id = state.add_item().unwrap();

        assert_eq!(state.items().last().unwrap().id, id);
        assert!(!ids.contains(&id));
    }

    #[test]
    fn test_add_empty_is_noop() {
        let (mut state, _) = state_with(&["Buy milk"]);
        assert_eq!(state.add_item(), None);
        assert_eq!(state.len(), 1);
        assert_eq!(state.draft(), "");
    }

    #[test]
    fn test_add_whitespace_keeps_draft() {
        for blank in ["   ", "\t", " \n ", ""] {
            let mut state = EditorState::new();
            state.set_draft(blank);
            assert_eq!(state.add_item(), None);
            assert!(state.is_empty());
            assert_eq!(state.draft(), blank);
        }
    }

    #[test]
    fn test_set_draft_is_verbatim() {
        let mut state = EditorState::new();
        state.set_draft("  x ");
        assert_eq!(state.draft(), "  x ");
        state.set_draft("");
        assert_eq!(state.draft(), "");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (mut state, ids) = state_with(&["a", "b", "c"]);

        assert!(state.toggle_item(ids[1]));
        assert!(state.get(ids[1]).unwrap().completed);
        assert!(state.toggle_item(ids[1]));
        assert!(!state.get(ids[1]).unwrap().completed);

        let order: Vec<ItemId> = state.items().iter().map(|item| item.id).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let (mut state, _) = state_with(&["a"]);
        assert!(!state.toggle_item(ItemId(999)));
        assert!(!state.items()[0].completed);
    }

    #[test]
    fn test_delete_preserves_order() {
        let (mut state, ids) = state_with(&["a", "b", "c", "d"]);

        assert!(state.delete_item(ids[1]));

        let texts: Vec<&str> = state.items().iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, ["a", "c", "d"]);
        assert_eq!(state.get(ids[1]), None);
    }

    #[test]
    fn test_delete_unknown_id() {
        let (mut state, ids) = state_with(&["a"]);
        assert!(state.delete_item(ids[0]));
        assert!(!state.delete_item(ids[0]));
        assert!(state.is_empty());
    }

    #[test]
    fn test_ids_unique_under_rapid_adds() {
        let mut state = EditorState::new();
        let mut seen = HashSet::new();
        for i in 0..1000 {
            state.set_draft(format!("item {i}"));
            assert!(seen.insert(state.add_item().unwrap()));
        }
        assert_eq!(state.len(), 1000);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let (mut state, ids) = state_with(&["a"]);
        state.delete_item(ids[0]);

        state.set_draft("b");
        let id = state.add_item().unwrap();
        assert_ne!(id, ids[0]);
    }
}
