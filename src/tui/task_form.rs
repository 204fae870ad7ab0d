//! Task form handling for the terminal user interface.
//!
//! The store owns the draft text; `TaskForm` only adds the cursor on top of
//! it. Every edit is pushed back into the store with
//! [`TaskListStore::set_draft_text`], and the form is rebuilt from the store
//! whenever the store rewrites the draft itself (commit, start/cancel edit,
//! deleting the edit target).

use crossterm::event::KeyCode;

use crate::{store::TaskListStore, tui::input::InputField};

/// Cursor state for the draft text field.
#[derive(Clone, Debug, Default)]
pub struct TaskForm {
    pub text: InputField,
}

impl TaskForm {
    /// Create a form mirroring the store's current draft, cursor at the end.
    pub fn from_store(store: &TaskListStore) -> Self {
        Self {
            text: InputField::with_value(store.draft_text()),
        }
    }

    /// Rebuild the field if the store's draft no longer matches it.
    pub fn sync_from(&mut self, store: &TaskListStore) {
        if self.text.value != store.draft_text() {
            *self = Self::from_store(store);
        }
    }

    /// Apply an editing key to the text field and stage the result.
    ///
    /// Returns `false` if the key is not an editing key.
    pub fn handle_key(&mut self, key: KeyCode, store: &mut TaskListStore) -> bool {
        match key {
            KeyCode::Char(c) => self.text.handle_char(c),
            KeyCode::Backspace => self.text.handle_backspace(),
            KeyCode::Delete => self.text.handle_delete(),
            KeyCode::Left => self.text.move_cursor_left(),
            KeyCode::Right => self.text.move_cursor_right(),
            KeyCode::Home => self.text.move_home(),
            KeyCode::End => self.text.move_end(),
            _ => return false,
        }
        if self.text.value != store.draft_text() {
            store.set_draft_text(self.text.value.clone());
        }
        true
    }

    pub fn placeholder(is_editing: bool) -> &'static str {
        if is_editing {
            "Edit item..."
        } else {
            "Add item..."
        }
    }

    pub fn action_label(is_editing: bool) -> &'static str {
        if is_editing {
            "UPDATE"
        } else {
            "ADD"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Category;

    #[test]
    fn typing_stages_draft_text() {
        let mut store = TaskListStore::new();
        let mut form = TaskForm::from_store(&store);
        for c in "hi".chars() {
            assert!(form.handle_key(KeyCode::Char(c), &mut store));
        }
        assert_eq!(store.draft_text(), "hi");
        form.handle_key(KeyCode::Backspace, &mut store);
        assert_eq!(store.draft_text(), "h");
        assert!(!form.handle_key(KeyCode::Enter, &mut store));
    }

    #[test]
    fn sync_follows_store_rewrites() {
        let mut store = TaskListStore::new();
        store.set_draft_text("Walk dog");
        store.set_draft_category(Category::Personal);
        store.commit();

        let mut form = TaskForm {
            text: InputField::with_value("Walk dog"),
        };
        form.sync_from(&store);
        assert_eq!(form.text.value, "");
        assert_eq!(form.text.cursor, 0);

        let id = store.tasks()[0].id;
        store.start_edit(id);
        form.sync_from(&store);
        assert_eq!(form.text.value, "Walk dog");
        assert_eq!(form.text.cursor, 8);
    }

    #[test]
    fn labels_follow_edit_state() {
        assert_eq!(TaskForm::action_label(false), "ADD");
        assert_eq!(TaskForm::action_label(true), "UPDATE");
        assert_eq!(TaskForm::placeholder(true), "Edit item...");
    }
}
