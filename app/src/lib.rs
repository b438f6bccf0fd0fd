//! # Tasklist
//!
//! A minimal single-page to-do list with category management, built on the
//! Tasklist reducer architecture.
//!
//! Supported interactions:
//! - adding, toggling, and deleting todo items
//! - creating, renaming, and deleting categories, with cascading rewrites
//!   keeping every todo's category label valid
//! - filtering the displayed list by category and sorting it with a
//!   locale-aware, stable comparator
//!
//! The whole application is one in-memory state container driven by
//! user-interaction actions: no persistence, no network, no concurrency.
//! State lives in [`TodoState`], every event is a [`TodoAction`], and
//! [`TodoReducer`] is the single place transitions happen.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tasklist::{Collator, TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use tasklist_core::environment::SystemClock;
//! use tasklist_runtime::Store;
//!
//! let env = TodoEnvironment::new(Arc::new(SystemClock));
//! let mut store = Store::new(TodoState::new(), TodoReducer::new(), env);
//!
//! store.send(TodoAction::AddCategory { name: "Work".to_string() });
//! store.send(TodoAction::AddTodo {
//!     text: "buy milk".to_string(),
//!     category: Some("Work".to_string()),
//! });
//!
//! let visible = store.state().visible_todos(&Collator::new());
//! assert_eq!(visible.len(), 1);
//! ```

pub mod collate;
pub mod reducer;
pub mod types;

pub use collate::Collator;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{CategoryFilter, Todo, TodoAction, TodoId, TodoState, UNCATEGORIZED};
