//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task store, routes key
//! presses to store operations according to the focused widget, and renders
//! the store's current state each frame.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use tracing::debug;

use crate::{
    store::{CommitOutcome, TaskListStore},
    tui::{
        colors::{category_color, Palette, LIGHT_RED},
        enums::{AppState, Focus},
        task_form::TaskForm,
        utils::centered_rect,
    },
};

/// Main application state for the terminal user interface.
///
/// The store holds every piece of task data; the fields here are purely
/// presentational (focus, selection, status line).
pub struct App {
    state: AppState,
    store: TaskListStore,
    focus: Focus,
    task_form: TaskForm,
    task_list_state: TableState,
    visible_ids: Vec<u64>,
    pending_delete: Option<u64>,
    status_message: String,
}

impl App {
    /// Create a new App around an existing store.
    pub fn new(store: TaskListStore) -> Self {
        let task_form = TaskForm::from_store(&store);
        let mut app = App {
            state: AppState::Main,
            store,
            focus: Focus::Input,
            task_form,
            task_list_state: TableState::default(),
            visible_ids: Vec::new(),
            pending_delete: None,
            status_message: String::new(),
        };
        app.update_visible_tasks();
        app
    }

    /// Hand the store back once the UI is closed.
    pub fn into_store(self) -> TaskListStore {
        self.store
    }

    /// Recompute the visible id list and keep the selection on the same task.
    fn update_visible_tasks(&mut self) {
        let old_selected_id = self.selected_task_id();

        self.visible_ids = self.store.visible_tasks().iter().map(|t| t.id).collect();

        let new_idx = old_selected_id
            .and_then(|id| self.visible_ids.iter().position(|&v| v == id))
            .or_else(|| {
                // fall back to the nearest remaining row
                let prev = self.task_list_state.selected().unwrap_or(0);
                (!self.visible_ids.is_empty()).then(|| prev.min(self.visible_ids.len() - 1))
            });
        self.task_list_state.select(new_idx);
    }

    fn selected_task_id(&self) -> Option<u64> {
        self.task_list_state
            .selected()
            .and_then(|idx| self.visible_ids.get(idx))
            .copied()
    }

    fn select_task(&mut self, id: u64) {
        if let Some(idx) = self.visible_ids.iter().position(|&v| v == id) {
            self.task_list_state.select(Some(idx));
        }
    }

    fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Add or update from the draft and resync the form.
    fn commit_draft(&mut self) {
        match self.store.commit() {
            CommitOutcome::Added(id) => {
                self.update_visible_tasks();
                self.select_task(id);
                self.set_status_message("Task added");
            }
            CommitOutcome::Updated(id) => {
                self.update_visible_tasks();
                self.select_task(id);
                self.set_status_message("Task updated");
            }
            CommitOutcome::Rejected => {
                self.set_status_message("Task text is required");
            }
        }
        self.task_form.sync_from(&self.store);
    }

    fn cancel_edit(&mut self) {
        self.store.cancel_edit();
        self.task_form.sync_from(&self.store);
        self.set_status_message("Edit cancelled");
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Some(completed) = self.store.toggle_completed(id) {
                self.set_status_message(if completed {
                    "Task completed"
                } else {
                    "Task reopened"
                });
            }
        }
    }

    fn edit_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if self.store.start_edit(id) {
                self.task_form = TaskForm::from_store(&self.store);
                self.focus = Focus::Input;
                self.set_status_message(format!("Editing task {id}"));
            }
        }
    }

    fn delete_pending(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            if let Some(task) = self.store.delete_task(id) {
                self.task_form.sync_from(&self.store);
                self.update_visible_tasks();
                self.set_status_message(format!("Deleted '{}'", task.text));
            }
        }
    }

    fn toggle_display_mode(&mut self) {
        self.store.toggle_display_mode();
        self.set_status_message(format!("{} mode", self.store.display_mode().label()));
    }

    /// Handle a key while the text input has focus.
    fn handle_input_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.commit_draft(),
            KeyCode::Esc if self.store.is_editing() => self.cancel_edit(),
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Down => self.focus = Focus::Category,
            other => {
                self.task_form.handle_key(other, &mut self.store);
            }
        }
    }

    fn handle_category_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left => self.store.set_draft_category(self.store.draft_category().prev()),
            KeyCode::Right => self.store.set_draft_category(self.store.draft_category().next()),
            KeyCode::Enter => self.commit_draft(),
            KeyCode::Esc if self.store.is_editing() => self.cancel_edit(),
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Up => self.focus = Focus::Input,
            KeyCode::Down => self.focus = Focus::Filter,
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyCode) {
        let filter = self.store.filter_category();
        match key {
            KeyCode::Left => self.store.set_filter_category(filter.prev()),
            KeyCode::Right => self.store.set_filter_category(filter.next()),
            KeyCode::Up => self.focus = Focus::Category,
            KeyCode::Down | KeyCode::Enter | KeyCode::Esc => self.focus = Focus::List,
            _ => return,
        }
        self.update_visible_tasks();
    }

    /// Handle a key while the task list has focus.
    ///
    /// Returns true if the application should quit.
    fn handle_list_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(selected) = self.task_list_state.selected() {
                    if selected > 0 {
                        self.task_list_state.select(Some(selected - 1));
                    } else {
                        self.focus = Focus::Filter;
                    }
                } else {
                    self.focus = Focus::Filter;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(selected) = self.task_list_state.selected() {
                    if selected + 1 < self.visible_ids.len() {
                        self.task_list_state.select(Some(selected + 1));
                    }
                } else if !self.visible_ids.is_empty() {
                    self.task_list_state.select(Some(0));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') => self.toggle_selected(),
            KeyCode::Char('e') => self.edit_selected(),
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_task_id() {
                    self.pending_delete = Some(id);
                    self.state = AppState::Confirm;
                }
            }
            KeyCode::Char('a') | KeyCode::Char('i') => self.focus = Focus::Input,
            KeyCode::Char('m') => self.toggle_display_mode(),
            KeyCode::Char('h') | KeyCode::Char('?') | KeyCode::F(1) => self.state = AppState::Help,
            _ => {}
        }
        false
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.delete_pending();
                self.state = AppState::Main;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.pending_delete = None;
                self.state = AppState::Main;
            }
            _ => {}
        }
    }

    /// Route one key press. Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.status_message.clear();
        debug!(code = ?key.code, focus = self.focus.label(), "key");

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => return true,
                KeyCode::Char('t') => {
                    self.toggle_display_mode();
                    return false;
                }
                _ => return false,
            }
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return false;
        }

        match self.state {
            AppState::Help => {
                self.state = AppState::Main;
                return false;
            }
            AppState::Confirm => {
                self.handle_confirm_key(key.code);
                return false;
            }
            AppState::Main => {}
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return false;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return false;
            }
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key.code),
            Focus::Category => self.handle_category_key(key.code),
            Focus::Filter => self.handle_filter_key(key.code),
            Focus::List => return self.handle_list_key(key.code),
        }
        false
    }

    /// Poll for and handle one keyboard event.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(self.handle_key(key));
                }
            }
        }
        Ok(false)
    }

    fn focus_style(&self, target: Focus, palette: &Palette) -> Style {
        if self.state == AppState::Main && self.focus == target {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.border)
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let mode = self.store.display_mode();
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "TODO LIST",
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{} Mode]  Ctrl+T to switch", mode.toggled().label()),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn render_form(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let editing = self.store.is_editing();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),
                Constraint::Length(16),
                Constraint::Length(10),
            ])
            .split(area);

        let text = if self.task_form.text.value.is_empty() {
            Span::styled(
                TaskForm::placeholder(editing),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw(self.task_form.text.value.as_str())
        };
        let input = Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(if editing { "Edit Task" } else { "New Task" })
                .border_style(self.focus_style(Focus::Input, palette)),
        );
        f.render_widget(input, chunks[0]);

        if self.state == AppState::Main && self.focus == Focus::Input {
            let inner_width = chunks[0].width.saturating_sub(2);
            let cursor = u16::try_from(self.task_form.text.cursor_column())
                .unwrap_or(u16::MAX)
                .min(inner_width);
            f.set_cursor_position((chunks[0].x + 1 + cursor, chunks[0].y + 1));
        }

        let category = self.store.draft_category();
        let selector = Paragraph::new(Span::styled(
            format!("< {} >", category.label()),
            Style::default().fg(Color::Black).bg(category_color(category)),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Category")
                .border_style(self.focus_style(Focus::Category, palette)),
        );
        f.render_widget(selector, chunks[1]);

        let action = Paragraph::new(Span::styled(
            TaskForm::action_label(editing),
            Style::default()
                .fg(Color::White)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Enter")
                .border_style(Style::default().fg(palette.border)),
        );
        f.render_widget(action, chunks[2]);
    }

    fn render_filter(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let filter = Paragraph::new(Line::from(vec![
            Span::raw("Filter by Category: "),
            Span::styled(
                format!("< {} >", self.store.filter_category().label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "   showing {} of {}",
                self.visible_ids.len(),
                self.store.total_count()
            )),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.focus_style(Focus::Filter, palette)),
        );
        f.render_widget(filter, area);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let title = format!(
            "Progress: {} / {} tasks completed",
            self.store.completed_count(),
            self.store.total_count()
        );
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(palette.border)),
            )
            .gauge_style(Style::default().fg(palette.accent).bg(Color::Rgb(224, 224, 224)))
            .percent(self.store.progress_percentage());
        f.render_widget(gauge, area);
    }

    fn render_task_list(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let header_cells = ["#", "Task", "Category", "Status"].iter().map(|h| {
            Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))
        });
        let header = Row::new(header_cells)
            .style(Style::default().fg(palette.foreground))
            .height(1);

        let rows: Vec<Row> = self
            .store
            .visible_tasks()
            .into_iter()
            .map(|task| {
                let mut style = Style::default()
                    .bg(category_color(task.category))
                    .fg(palette.row_text);
                if task.completed {
                    style = style.add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
                }
                Row::new(vec![
                    Cell::from(task.id.to_string()),
                    Cell::from(task.text.clone()),
                    Cell::from(task.category.label()),
                    Cell::from(if task.completed { "Done" } else { "Open" }),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(6),
        ];

        let hint = match self.selected_task_id().and_then(|id| self.store.get(id)) {
            Some(task) => format!(" - Space: {}  e: Edit  d: Delete", task.toggle_label()),
            None => String::new(),
        };
        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Tasks ({}/{}){}", self.visible_ids.len(), self.store.total_count(), hint))
                    .border_style(self.focus_style(Focus::List, palette))
                    .style(Style::default().bg(palette.surface)),
            )
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(">> ");

        if self.visible_ids.is_empty() {
            let empty = Paragraph::new(if self.store.total_count() == 0 {
                "No tasks yet. Type one above and press Enter."
            } else {
                "No tasks in this category."
            })
            .style(Style::default().fg(palette.foreground).bg(palette.surface))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Tasks (0)")
                    .border_style(self.focus_style(Focus::List, palette)),
            );
            f.render_widget(empty, area);
        } else {
            f.render_stateful_widget(table, area, &mut self.task_list_state);
        }
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let help_text = vec![
            Line::from(Span::styled("Todo List Help", bold)),
            Line::from(""),
            Line::from(Span::styled("Anywhere:", bold)),
            Line::from("  Tab/Shift+Tab  Move focus (input, category, filter, list)"),
            Line::from("  Ctrl+T         Toggle light/dark mode"),
            Line::from("  Ctrl+C/Ctrl+Q  Quit"),
            Line::from(""),
            Line::from(Span::styled("Input and Category:", bold)),
            Line::from("  Enter          Add task, or update the task being edited"),
            Line::from("  ←/→            Move cursor / change category"),
            Line::from("  Esc            Cancel edit, or jump to the list"),
            Line::from(""),
            Line::from(Span::styled("Filter:", bold)),
            Line::from("  ←/→            Cycle All, General, Work, Personal, Urgent"),
            Line::from(""),
            Line::from(Span::styled("Task List:", bold)),
            Line::from("  ↑↓/k,j         Navigate tasks"),
            Line::from("  Space/Enter/c  Complete or uncomplete"),
            Line::from("  e              Edit selected task"),
            Line::from("  d              Delete selected task"),
            Line::from("  a              Jump to input"),
            Line::from("  m              Toggle light/dark mode"),
            Line::from("  h/?            Show this help"),
            Line::from("  q/Esc          Quit"),
        ];

        let area = centered_rect(70, 80, area);
        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press any key to return"),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_confirm(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Confirm Delete")
            .borders(Borders::ALL)
            .style(Style::default().bg(LIGHT_RED).fg(Color::Black));

        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let target = self
            .pending_delete
            .and_then(|id| self.store.get(id))
            .map(|t| t.text.as_str())
            .unwrap_or("");
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Delete this task?",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(target),
            Line::from(""),
            Line::from("Press 'y' to confirm, 'n' to cancel"),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::Main => format!(
                    "Focus: {} | Tab to switch | 'h' for help",
                    self.focus.label()
                ),
                AppState::Help => "Help".to_string(),
                AppState::Confirm => "Confirm Action".to_string(),
            }
        };
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(palette.accent).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Draw the whole screen from the store's current state.
    fn render(&mut self, f: &mut Frame) {
        let palette = Palette::for_mode(self.store.display_mode());
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
            f.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // input row
                Constraint::Length(3), // filter
                Constraint::Length(3), // progress
                Constraint::Min(3),    // tasks
                Constraint::Length(1), // status bar
            ])
            .split(f.area());

        self.render_header(f, chunks[0], &palette);
        self.render_form(f, chunks[1], &palette);
        self.render_filter(f, chunks[2], &palette);
        self.render_progress(f, chunks[3], &palette);
        self.render_task_list(f, chunks[4], &palette);

        match self.state {
            AppState::Main => {}
            AppState::Help => self.render_help(f, f.area()),
            AppState::Confirm => self.render_confirm(f, f.area()),
        }

        self.render_status_bar(f, chunks[5], &palette);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Category, CategoryFilter, DisplayMode};
    use crate::cmd::initial_store;
    use ratatui::{backend::TestBackend, buffer::Buffer};

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_task(app: &mut App, text: &str, category: Category) -> u64 {
        app.focus = Focus::Input;
        type_text(app, text);
        app.store.set_draft_category(category);
        press(app, KeyCode::Enter);
        app.store.tasks().last().map(|t| t.id).unwrap()
    }

    fn draw_buffer(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(app: &mut App) -> String {
        draw_buffer(app)
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn ctrl(app: &mut App, c: char) -> bool {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn typing_and_enter_adds_task() {
        let mut app = App::new(TaskListStore::new());
        add_task(&mut app, "Buy milk", Category::Work);

        assert_eq!(app.store.total_count(), 1);
        assert_eq!(app.store.tasks()[0].text, "Buy milk");
        assert_eq!(app.store.tasks()[0].category, Category::Work);
        assert_eq!(app.task_form.text.value, "");
        assert_eq!(app.status_message, "Task added");
    }

    #[test]
    fn enter_on_blank_input_reports_and_keeps_draft() {
        let mut app = App::new(TaskListStore::new());
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.total_count(), 0);
        assert_eq!(app.store.draft_text(), "   ");
        assert_eq!(app.status_message, "Task text is required");
    }

    #[test]
    fn category_selector_cycles_draft_category() {
        let mut app = App::new(TaskListStore::new());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Category);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.store.draft_category(), Category::Personal);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.store.draft_category(), Category::Work);
    }

    #[test]
    fn list_actions_target_selected_task_under_filter() {
        let mut app = App::new(TaskListStore::new());
        add_task(&mut app, "A", Category::Work);
        let b = add_task(&mut app, "B", Category::Urgent);
        add_task(&mut app, "C", Category::Work);

        app.focus = Focus::Filter;
        press(&mut app, KeyCode::Left); // All -> Urgent
        assert_eq!(app.store.filter_category(), CategoryFilter::Only(Category::Urgent));
        assert_eq!(app.visible_ids, [b]);

        app.focus = Focus::List;
        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.get(b).unwrap().completed);
        assert_eq!(app.store.completed_count(), 1);
        assert_eq!(app.store.tasks().iter().filter(|t| t.completed).count(), 1);
    }

    #[test]
    fn edit_flow_updates_in_place() {
        let mut app = App::new(TaskListStore::new());
        add_task(&mut app, "A", Category::General);
        let b = add_task(&mut app, "B", Category::General);
        add_task(&mut app, "C", Category::General);

        app.focus = Focus::List;
        app.select_task(b);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.store.edit_target(), Some(b));
        assert_eq!(app.task_form.text.value, "B");

        type_text(&mut app, "2");
        press(&mut app, KeyCode::Enter);
        let texts: Vec<&str> = app.store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["A", "B2", "C"]);
        assert!(!app.store.is_editing());
    }

    #[test]
    fn esc_cancels_edit() {
        let mut app = App::new(TaskListStore::new());
        let a = add_task(&mut app, "A", Category::General);
        app.focus = Focus::List;
        app.select_task(a);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.store.is_editing());
        assert_eq!(app.task_form.text.value, "");
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = App::new(TaskListStore::new());
        add_task(&mut app, "A", Category::General);
        let b = add_task(&mut app, "B", Category::General);
        app.focus = Focus::List;
        app.select_task(b);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state, AppState::Confirm);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.total_count(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.state, AppState::Main);
        assert!(app.store.get(b).is_none());
        assert_eq!(app.store.total_count(), 1);
        assert_eq!(app.visible_ids.len(), 1);
        assert_eq!(app.task_list_state.selected(), Some(0));
    }

    #[test]
    fn deleting_task_under_edit_clears_form() {
        let mut app = App::new(TaskListStore::new());
        let a = add_task(&mut app, "A", Category::General);
        app.focus = Focus::List;
        app.select_task(a);
        press(&mut app, KeyCode::Char('e'));
        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        assert!(!app.store.is_editing());
        assert_eq!(app.task_form.text.value, "");
    }

    #[test]
    fn mode_toggle_and_quit_keys() {
        let mut app = App::new(TaskListStore::new());
        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(app.store.display_mode(), DisplayMode::Dark);
        assert_eq!(app.task_form.text.value, "");

        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.store.display_mode(), DisplayMode::Light);
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn typing_q_in_input_does_not_quit() {
        let mut app = App::new(TaskListStore::new());
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.store.draft_text(), "q");
    }

    #[test]
    fn render_shows_progress_and_update_label() {
        let mut app = App::new(TaskListStore::new());
        let a = add_task(&mut app, "Buy milk", Category::Work);
        add_task(&mut app, "Walk dog", Category::Personal);
        add_task(&mut app, "Pay rent", Category::Urgent);
        app.store.toggle_completed(a);

        let screen = draw(&mut app);
        assert!(screen.contains("TODO LIST"));
        assert!(screen.contains("Progress: 1 / 3 tasks completed"));
        assert!(screen.contains("33%"));
        assert!(screen.contains("Walk dog"));
        assert!(screen.contains("ADD"));

        app.focus = Focus::List;
        app.select_task(a);
        press(&mut app, KeyCode::Char('e'));
        let screen = draw(&mut app);
        assert!(screen.contains("UPDATE"));
    }

    #[test]
    fn render_empty_list_and_help() {
        let mut app = App::new(TaskListStore::new());
        let screen = draw(&mut app);
        assert!(screen.contains("Add item..."));
        assert!(screen.contains("No tasks yet"));

        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('h'));
        let screen = draw(&mut app);
        assert!(screen.contains("Todo List Help"));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state, AppState::Main);
    }

    #[test]
    fn unbound_control_chords_are_ignored() {
        let mut app = App::new(TaskListStore::new());
        type_text(&mut app, "milk");
        assert!(!ctrl(&mut app, 'w'));
        assert_eq!(app.store.draft_text(), "milk");

        press(&mut app, KeyCode::Enter);
        let a = app.store.tasks()[0].id;
        app.focus = Focus::List;
        app.select_task(a);
        assert!(!ctrl(&mut app, 'd'));
        assert_eq!(app.state, AppState::Main);
        assert!(!ctrl(&mut app, 'e'));
        assert!(!app.store.is_editing());

        app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::ALT));
        assert_eq!(app.state, AppState::Main);
        assert_eq!(app.store.total_count(), 1);
    }

    #[test]
    fn dark_mode_paints_dark_background() {
        let mut app = App::new(initial_store(true, CategoryFilter::All));
        let dark = Palette::for_mode(DisplayMode::Dark);
        let buffer = draw_buffer(&mut app);
        assert_eq!(buffer[(0, 0)].bg, dark.background);
        assert!(draw(&mut app).contains("[Light Mode]"));

        ctrl(&mut app, 't');
        let light = Palette::for_mode(DisplayMode::Light);
        let buffer = draw_buffer(&mut app);
        assert_eq!(buffer[(0, 0)].bg, light.background);
    }

    #[test]
    fn cursor_follows_display_width_of_wide_text() {
        let mut app = App::new(TaskListStore::new());
        type_text(&mut app, "日本");
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        // input row starts at y = 3; border adds one column and one row
        assert_eq!((cursor.x, cursor.y), (1 + 4, 4));
    }
}
