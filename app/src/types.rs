//! Domain types for the to-do list.
//!
//! A todo list is an ordered collection of todo items plus an ordered set of
//! category labels. Categories are plain strings acting as both display
//! label and foreign key; the referential-integrity rules between the two
//! collections live in the reducer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collate::Collator;

/// Reserved implicit category name.
///
/// Never pre-seeded into the category collection; used as the default for
/// new todos and as the fallback target when a category is deleted. Nothing
/// stops a user from adding a category literally named "Uncategorized" - it
/// then coexists with the reserved default (a quirk of the original design,
/// preserved deliberately).
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Unique monotonic identifier for a todo item
///
/// Minted by [`TodoState::mint_id`] from a counter carried in the state, so
/// ids stay unique even when several todos are added within one clock tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its raw value
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value of the id
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Text exactly as entered; presence-checked on add but never trimmed
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// Category label: [`UNCATEGORIZED`] or a member of the category collection
    pub category: String,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new, not-yet-completed todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String, category: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            category,
            created_at,
        }
    }
}

/// The active filter restricting the displayed todo list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Show every todo (the original UI's "all" sentinel)
    #[default]
    All,
    /// Show only todos carrying the named category
    Category(String),
}

impl CategoryFilter {
    /// Whether a todo with the given category label passes the filter
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => name == category,
        }
    }
}

/// State of the to-do list
///
/// Exclusively owned by the store and mutated only by the reducer; the rest
/// of the application observes it through shared borrows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos in insertion order
    pub todos: Vec<Todo>,
    /// User-defined categories in insertion order, no duplicates
    pub categories: Vec<String>,
    /// Active filter for the displayed list
    pub filter: CategoryFilter,
    /// Category selected in the add-todo input; `None` means no selection,
    /// so new todos default to [`UNCATEGORIZED`]
    pub input_category: Option<String>,
    /// Source for the next minted [`TodoId`]
    pub next_id: u64,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks whether a category name is present in the collection
    ///
    /// Exact, case-sensitive match; [`UNCATEGORIZED`] is only present if a
    /// user added it explicitly.
    #[must_use]
    pub fn category_exists(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Mint the next todo id
    pub fn mint_id(&mut self) -> TodoId {
        let id = TodoId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// The displayed list: filtered by the active filter, then stable-sorted
    /// by category under the given collator
    ///
    /// Computed fresh on every call, never cached. The sort is stable, so
    /// todos sharing a category keep their insertion-relative order.
    #[must_use]
    pub fn visible_todos(&self, collator: &Collator) -> Vec<&Todo> {
        let mut visible: Vec<&Todo> = self
            .todos
            .iter()
            .filter(|t| self.filter.matches(&t.category))
            .collect();
        visible.sort_by(|a, b| collator.compare(&a.category, &b.category));
        visible
    }
}

/// Actions representing user-interaction events on the to-do list
///
/// Every action is total: invalid input (empty text or name, duplicate
/// category, unknown id) is silently absorbed as a no-op by the reducer
/// rather than signalled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Add a new todo with the given text and category selection
    AddTodo {
        /// Text of the todo; rejected (as a no-op) only when it trims to empty
        text: String,
        /// Category for the todo; `None` defaults to [`UNCATEGORIZED`]
        category: Option<String>,
    },

    /// Flip the completed flag of the matching todo
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Remove the matching todo
    DeleteTodo {
        /// Todo to delete
        id: TodoId,
    },

    /// Append a new category to the collection
    AddCategory {
        /// Name of the category; trimmed before the empty/duplicate checks
        name: String,
    },

    /// Remove a category, reassigning its todos to [`UNCATEGORIZED`]
    DeleteCategory {
        /// Name of the category to remove
        name: String,
    },

    /// Rename a category in place, rewriting its todos
    RenameCategory {
        /// Current name of the category
        old: String,
        /// New name; trimmed before the empty/duplicate checks
        new: String,
    },

    /// Set the active filter for the displayed list
    SetFilter {
        /// The filter to apply
        filter: CategoryFilter,
    },

    /// Set the category selected in the add-todo input
    SetInputCategory {
        /// The selection; `None` clears it
        category: Option<String>,
    },
}
