// Todos tab state management.
// Tracks the list lifecycle, selection, the new-todo input buffer, and the
// local mutations applied after the server confirms an action.

use ratatui::widgets::ListState;

use crate::api::Todo;

/// Loading state for async data.
#[derive(Debug, Clone)]
pub enum LoadingState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> Default for LoadingState<T> {
    fn default() -> Self {
        LoadingState::Idle
    }
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Text input buffer for the new-todo modal.
///
/// The cursor is a character index, not a byte index, so editing stays
/// correct for multi-byte input.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub visible: bool,
    pub buffer: String,
    pub cursor: usize,
}

impl InputState {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn enter_char(&mut self, c: char) {
        let index = self.byte_index();
        self.buffer.insert(index, c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let before = self.buffer.chars().take(self.cursor - 1);
        let after = self.buffer.chars().skip(self.cursor);
        self.buffer = before.chain(after).collect();
        self.cursor -= 1;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
    }

    /// The trimmed title to submit, or `None` when the buffer is empty or
    /// whitespace-only (in which case no request must be issued).
    pub fn submit_title(&self) -> Option<String> {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.buffer.len())
    }
}

/// Complete state for the Todos tab.
#[derive(Debug, Default)]
pub struct TodosTabState {
    /// The todo list lifecycle: idle until the initial fetch starts.
    pub list: LoadingState<Vec<Todo>>,
    /// Selection within the loaded list.
    pub list_state: ListState,
    /// New-todo input modal.
    pub input: InputState,
}

impl TodosTabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> Option<&Vec<Todo>> {
        self.list.data()
    }

    /// Get the currently selected todo.
    pub fn selected_todo(&self) -> Option<&Todo> {
        let index = self.list_state.selected()?;
        self.todos()?.get(index)
    }

    pub fn set_loading(&mut self) {
        self.list = LoadingState::Loading;
    }

    pub fn set_loaded(&mut self, todos: Vec<Todo>) {
        self.list = LoadingState::Loaded(todos);
        self.reset_selection();
    }

    pub fn set_error(&mut self, error: String) {
        self.list = LoadingState::Error(error);
        self.list_state.select(None);
    }

    /// Select the next item, staying at the end.
    pub fn select_next(&mut self) {
        if let Some(todos) = self.list.data() {
            if todos.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => {
                    if i >= todos.len() - 1 {
                        i
                    } else {
                        i + 1
                    }
                }
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    /// Select the previous item, staying at the start.
    pub fn select_prev(&mut self) {
        if let Some(todos) = self.list.data() {
            if todos.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => i.saturating_sub(1),
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    /// Append a server-confirmed new todo to the list.
    pub fn apply_created(&mut self, todo: Todo) {
        if let LoadingState::Loaded(todos) = &mut self.list {
            todos.push(todo);
            if self.list_state.selected().is_none() {
                self.list_state.select(Some(0));
            }
        }
    }

    /// Replace the entry matching the updated todo's id. All other entries
    /// are left untouched.
    pub fn apply_toggled(&mut self, updated: Todo) {
        if let LoadingState::Loaded(todos) = &mut self.list {
            if let Some(existing) = todos.iter_mut().find(|t| t.id == updated.id) {
                *existing = updated;
            }
        }
    }

    /// Remove the entry with the given id, keeping the selection in bounds.
    pub fn apply_deleted(&mut self, id: u64) {
        if let LoadingState::Loaded(todos) = &mut self.list {
            todos.retain(|t| t.id != id);
            match self.list_state.selected() {
                Some(_) if todos.is_empty() => self.list_state.select(None),
                Some(i) if i >= todos.len() => self.list_state.select(Some(todos.len() - 1)),
                _ => {}
            }
        }
    }

    fn reset_selection(&mut self) {
        match self.list.data() {
            Some(todos) if !todos.is_empty() => self.list_state.select(Some(0)),
            _ => self.list_state.select(None),
        }
    }
}
