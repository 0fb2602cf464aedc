// App state and main event loop.
// Owns the tab states, dispatches keyboard input, and applies local state
// changes only after the server confirms each action.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::api::ApiClient;
use crate::error::Result;
use crate::state::{ConsoleState, DataTabState, LoadingState, TodosTabState};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Todos,
    Data,
    Console,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Todos => "Todos",
            Tab::Data => "Data",
            Tab::Console => "Console",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Todos => Tab::Data,
            Tab::Data => Tab::Console,
            Tab::Console => Tab::Todos,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Todos => Tab::Console,
            Tab::Data => Tab::Todos,
            Tab::Console => Tab::Data,
        }
    }
}

/// Main application state.
pub struct App {
    /// REST client for the todo API.
    pub client: ApiClient,
    /// Currently active tab.
    pub active_tab: Tab,
    /// Todo list state.
    pub todos: TodosTabState,
    /// Cached-data snapshot state.
    pub data: DataTabState,
    /// Activity log.
    pub console: ConsoleState,
    /// Most recent action failure, shown as a banner until the next success.
    pub last_error: Option<String>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            active_tab: Tab::default(),
            todos: TodosTabState::new(),
            data: DataTabState::new(),
            console: ConsoleState::new(),
            last_error: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Main event loop. The todo list is fetched once on entry; every other
    /// request is driven by a key press and awaited inline, so at most one
    /// request is in flight at a time.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        self.check_health().await;
        self.reload_todos().await;

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events().await?;
        }
        Ok(())
    }

    /// Poll for keyboard events.
    #[allow(clippy::collapsible_if)]
    async fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code).await;
                }
            }
        }
        Ok(())
    }

    async fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if self.todos.input.visible {
            match code {
                KeyCode::Esc => self.todos.input.close(),
                KeyCode::Enter => self.submit_new_todo().await,
                KeyCode::Backspace => self.todos.input.delete_char(),
                KeyCode::Left => self.todos.input.move_left(),
                KeyCode::Right => self.todos.input.move_right(),
                KeyCode::Char(c) => self.todos.input.enter_char(c),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.switch_tab(self.active_tab.next()).await,
            KeyCode::BackTab => self.switch_tab(self.active_tab.prev()).await,
            KeyCode::Char('r') => self.refresh_current().await,
            _ => match self.active_tab {
                Tab::Todos => self.handle_todos_key(code).await,
                Tab::Data => self.handle_data_key(code).await,
                Tab::Console => self.handle_console_key(code),
            },
        }
    }

    async fn handle_todos_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.todos.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.todos.select_next(),
            KeyCode::Char('a') => self.todos.input.open(),
            KeyCode::Char(' ') => self.toggle_selected().await,
            KeyCode::Char('d') => self.delete_selected().await,
            _ => {}
        }
    }

    async fn handle_data_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.data.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.data.select_next(),
            KeyCode::Char('c') => self.clear_cache().await,
            _ => {}
        }
    }

    fn handle_console_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.console.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.console.select_next(),
            _ => {}
        }
    }

    /// Switch tabs. The data snapshot loads lazily on first activation; the
    /// console badge clears as soon as the console becomes visible.
    async fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        match tab {
            Tab::Console => self.console.mark_viewed(),
            Tab::Data => {
                if matches!(self.data.snapshot, LoadingState::Idle) {
                    self.reload_data().await;
                }
            }
            Tab::Todos => {}
        }
    }

    async fn refresh_current(&mut self) {
        match self.active_tab {
            Tab::Todos => self.reload_todos().await,
            Tab::Data => self.reload_data().await,
            Tab::Console => {}
        }
    }

    /// One-shot reachability probe at startup, reported to the console.
    async fn check_health(&mut self) {
        match self.client.health().await {
            Ok(health) if health.ok => {
                let base_url = self.client.base_url().to_string();
                self.console
                    .log_info(format!("API reachable at {} (redis: {})", base_url, health.redis));
            }
            Ok(health) => {
                let detail = health.error.unwrap_or_else(|| "unknown".to_string());
                self.log_error(format!("API degraded: {}", detail));
            }
            Err(e) => self.log_error(e.to_string()),
        }
    }

    async fn reload_todos(&mut self) {
        self.todos.set_loading();
        match self.client.list_todos().await {
            Ok(todos) => {
                self.console.log_info(format!("Loaded {} todos", todos.len()));
                self.todos.set_loaded(todos);
            }
            Err(e) => {
                let message = e.to_string();
                self.todos.set_error(message.clone());
                self.log_error(message);
            }
        }
    }

    /// Submit the input buffer as a new todo. Whitespace-only input issues
    /// no request and leaves the modal open.
    async fn submit_new_todo(&mut self) {
        let Some(title) = self.todos.input.submit_title() else {
            return;
        };
        match self.client.create_todo(&title).await {
            Ok(todo) => {
                self.console.log_info(format!("Created todo #{}", todo.id));
                self.todos.apply_created(todo);
                self.todos.input.close();
                self.last_error = None;
            }
            Err(e) => {
                let message = e.to_string();
                self.last_error = Some(message.clone());
                self.log_error(message);
            }
        }
    }

    async fn toggle_selected(&mut self) {
        let (id, done) = match self.todos.selected_todo() {
            Some(todo) => (todo.id, !todo.done),
            None => return,
        };
        match self.client.toggle_todo(id, done).await {
            Ok(updated) => {
                self.console.log_info(format!(
                    "Todo #{} marked {}",
                    updated.id,
                    if updated.done { "done" } else { "pending" }
                ));
                self.todos.apply_toggled(updated);
                self.last_error = None;
            }
            Err(e) => {
                let message = e.to_string();
                self.last_error = Some(message.clone());
                self.log_error(message);
            }
        }
    }

    async fn delete_selected(&mut self) {
        let id = match self.todos.selected_todo() {
            Some(todo) => todo.id,
            None => return,
        };
        match self.client.delete_todo(id).await {
            Ok(()) => {
                self.console.log_info(format!("Deleted todo #{}", id));
                self.todos.apply_deleted(id);
                self.last_error = None;
            }
            Err(e) => {
                let message = e.to_string();
                self.last_error = Some(message.clone());
                self.log_error(message);
            }
        }
    }

    async fn reload_data(&mut self) {
        self.data.set_loading();
        match self.client.fetch_data().await {
            Ok((snapshot, round_trip)) => {
                self.console.log_info(format!(
                    "Snapshot: {} todos, {:.1} ms server, {} ms round trip ({})",
                    snapshot.stats.total,
                    snapshot.load_time,
                    round_trip.as_millis(),
                    if snapshot.from_cache { "cache" } else { "store" },
                ));
                self.data.set_loaded(snapshot, round_trip);
            }
            Err(e) => {
                let message = e.to_string();
                self.data.set_error(message.clone());
                self.log_error(message);
            }
        }
    }

    /// Invalidate the server-side cache. On success the displayed snapshot
    /// resets to unset; the next activation fetches fresh data.
    async fn clear_cache(&mut self) {
        match self.client.clear_cache().await {
            Ok(()) => {
                self.console.log_info("Server cache cleared");
                self.data.reset();
                self.last_error = None;
            }
            Err(e) => {
                let message = e.to_string();
                self.last_error = Some(message.clone());
                self.log_error(message);
            }
        }
    }

    /// Log an error to the console, keeping the badge clear while the
    /// console is already visible.
    fn log_error(&mut self, message: impl Into<String>) {
        self.console.log_error(message);
        if self.active_tab == Tab::Console {
            self.console.mark_viewed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_round_trips() {
        let mut tab = Tab::default();
        assert_eq!(tab, Tab::Todos);

        tab = tab.next();
        assert_eq!(tab, Tab::Data);
        tab = tab.next();
        assert_eq!(tab, Tab::Console);
        tab = tab.next();
        assert_eq!(tab, Tab::Todos);

        assert_eq!(Tab::Todos.prev(), Tab::Console);
        assert_eq!(Tab::Console.prev(), Tab::Data);
    }
}
