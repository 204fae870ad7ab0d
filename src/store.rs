//! The task list store and its derived views.
//!
//! `TaskListStore` owns every task together with the transient editor state
//! (edit target and draft fields) and the view selectors. All mutation goes
//! through its methods; the TUI only reads the derived views back.

use serde::Serialize;
use tracing::{debug, info};

use crate::fields::{Category, CategoryFilter, DisplayMode};
use crate::task::Task;

/// Result of [`TaskListStore::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new task with this id was appended.
    Added(u64),
    /// The task with this id received the draft text and category.
    Updated(u64),
    /// Nothing was committed; the draft text was blank.
    Rejected,
}

/// Serialisable summary of the list, printed on exit with `--print-summary`.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub tasks: &'a [Task],
    pub completed: usize,
    pub total: usize,
    pub progress_percentage: u16,
}

/// In-memory task list plus editor and view state.
#[derive(Debug)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    next_id: u64,
    edit_target: Option<u64>,
    draft_text: String,
    draft_category: Category,
    filter: CategoryFilter,
    display_mode: DisplayMode,
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            edit_target: None,
            draft_text: String::new(),
            draft_category: Category::General,
            filter: CategoryFilter::All,
            display_mode: DisplayMode::Light,
        }
    }

    // --- draft -----------------------------------------------------------

    /// Replace the staged input text. May be blank.
    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Replace the staged category.
    pub fn set_draft_category(&mut self, category: Category) {
        self.draft_category = category;
    }

    fn reset_draft(&mut self) {
        self.draft_text.clear();
        self.draft_category = Category::General;
    }

    /// Add a new task from the draft, or apply the draft to the edit target.
    ///
    /// A blank draft changes nothing at all, draft fields included.
    pub fn commit(&mut self) -> CommitOutcome {
        let text = self.draft_text.trim();
        if text.is_empty() {
            debug!("commit rejected: draft text is blank");
            return CommitOutcome::Rejected;
        }
        let text = text.to_string();
        let category = self.draft_category;

        let outcome = match self.edit_target.take() {
            Some(id) => match self.tasks.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    task.text = text;
                    task.category = category;
                    info!(id, %category, "task updated");
                    CommitOutcome::Updated(id)
                }
                None => {
                    // delete_task clears the target, so this only guards the invariant
                    debug!(id, "edit target vanished before commit");
                    return CommitOutcome::Rejected;
                }
            },
            None => {
                let id = self.next_id;
                self.next_id += 1;
                self.tasks.push(Task::new(id, text, category));
                info!(id, %category, "task added");
                CommitOutcome::Added(id)
            }
        };

        self.reset_draft();
        outcome
    }

    /// Load a task into the draft and mark it as the edit target.
    ///
    /// Returns `false` (and changes nothing) if `id` is unknown.
    pub fn start_edit(&mut self, id: u64) -> bool {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            debug!(id, "start_edit ignored: unknown id");
            return false;
        };
        let (text, category) = (task.text.clone(), task.category);
        self.draft_text = text;
        self.draft_category = category;
        self.edit_target = Some(id);
        debug!(id, "editing task");
        true
    }

    /// Abandon an in-progress edit and clear the draft.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.edit_target.take() {
            debug!(id, "edit cancelled");
        }
        self.reset_draft();
    }

    // --- list mutation ---------------------------------------------------

    /// Remove the task with `id`, keeping the others in order.
    ///
    /// Deleting the task being edited also clears the edit target and draft.
    pub fn delete_task(&mut self, id: u64) -> Option<Task> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(id, "delete ignored: unknown id");
            return None;
        };
        let removed = self.tasks.remove(pos);
        if self.edit_target == Some(id) {
            self.edit_target = None;
            self.reset_draft();
        }
        info!(id, "task deleted");
        Some(removed)
    }

    /// Flip the completion flag of the task with `id`, returning the new value.
    pub fn toggle_completed(&mut self, id: u64) -> Option<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(id, "toggle ignored: unknown id");
            return None;
        };
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "task toggled");
        Some(task.completed)
    }

    // --- view state ------------------------------------------------------

    pub fn set_filter_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }

    // --- derived views ---------------------------------------------------

    /// The full list in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks passing the current filter, in insertion order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter.matches(t.category))
            .collect()
    }

    /// Completed tasks across the whole list, ignoring the filter.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Completed share of the whole list, rounded half-up to a whole percent.
    pub fn progress_percentage(&self) -> u16 {
        let total = self.total_count();
        if total == 0 {
            return 0;
        }
        let completed = self.completed_count();
        // round(100 * c / t) == floor((200 * c + t) / (2 * t))
        ((200 * completed + total) / (2 * total)) as u16
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn draft_category(&self) -> Category {
        self.draft_category
    }

    pub fn edit_target(&self) -> Option<u64> {
        self.edit_target
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn filter_category(&self) -> CategoryFilter {
        self.filter
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tasks: &self.tasks,
            completed: self.completed_count(),
            total: self.total_count(),
            progress_percentage: self.progress_percentage(),
        }
    }
}
