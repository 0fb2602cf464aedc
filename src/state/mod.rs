// State management module.
// Handles data loading and UI state for the Todos, Data, and Console tabs.

pub mod console;
pub mod data;
pub mod todos;

pub use console::{ConsoleLevel, ConsoleMessage, ConsoleState};
pub use data::{DataTabState, SnapshotView};
pub use todos::{InputState, LoadingState, TodosTabState};
