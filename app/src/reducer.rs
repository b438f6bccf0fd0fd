//! Reducer logic for the to-do list.
//!
//! Validates user-interaction actions and applies state transitions,
//! including the referential-integrity cascades between todos and
//! categories. Every operation is total: invalid input (empty text or name,
//! duplicate category, unknown id) is silently absorbed as a no-op, never
//! signalled.

use std::sync::Arc;

use tasklist_core::{
    SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec,
};

use crate::types::{CategoryFilter, Todo, TodoAction, TodoState, UNCATEGORIZED};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for stamping new todos
    pub clock: Arc<dyn Clock>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the to-do list
///
/// A pure state machine: every action returns `Effect::None`, and cascades
/// (category rewrites, selection resets) happen within the same transition
/// as the action that triggered them, so the referential-integrity
/// invariant holds at every observation point.
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Rewrite every todo carrying `from` to carry `to`, returning how many
    /// were rewritten
    fn reassign_todos(state: &mut TodoState, from: &str, to: &str) -> usize {
        let mut moved = 0;
        for todo in state.todos.iter_mut().filter(|t| t.category == from) {
            todo.category = to.to_string();
            moved += 1;
        }
        moved
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::AddTodo { text, category } => {
                // Presence check only; the stored text is never trimmed.
                if text.trim().is_empty() {
                    return smallvec![Effect::None];
                }

                // A label that is neither the implicit default nor a member
                // of the collection would break referential integrity, so it
                // falls back to the default.
                let category = match category {
                    Some(name) if name == UNCATEGORIZED || state.category_exists(&name) => name,
                    _ => UNCATEGORIZED.to_string(),
                };

                let id = state.mint_id();
                let todo = Todo::new(id, text, category, env.clock.now());
                tracing::debug!(%id, category = %todo.category, "todo added");
                state.todos.push(todo);

                smallvec![Effect::None]
            }

            TodoAction::ToggleTodo { id } => {
                if let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) {
                    todo.completed = !todo.completed;
                }
                smallvec![Effect::None]
            }

            TodoAction::DeleteTodo { id } => {
                state.todos.retain(|t| t.id != id);
                smallvec![Effect::None]
            }

            TodoAction::AddCategory { name } => {
                let name = name.trim();
                if !name.is_empty() && !state.category_exists(name) {
                    state.categories.push(name.to_string());
                }
                smallvec![Effect::None]
            }

            TodoAction::DeleteCategory { name } => {
                let Some(pos) = state.categories.iter().position(|c| *c == name) else {
                    return smallvec![Effect::None];
                };
                state.categories.remove(pos);

                let moved = Self::reassign_todos(state, &name, UNCATEGORIZED);
                if state.input_category.as_deref() == Some(name.as_str()) {
                    state.input_category = None;
                }
                if matches!(&state.filter, CategoryFilter::Category(f) if *f == name) {
                    state.filter = CategoryFilter::All;
                }
                tracing::debug!(category = %name, moved, "category deleted");

                smallvec![Effect::None]
            }

            TodoAction::RenameCategory { old, new } => {
                let new = new.trim();
                if new.is_empty() || state.category_exists(new) {
                    return smallvec![Effect::None];
                }
                let Some(pos) = state.categories.iter().position(|c| *c == old) else {
                    return smallvec![Effect::None];
                };
                state.categories[pos] = new.to_string();

                let moved = Self::reassign_todos(state, &old, new);
                if state.input_category.as_deref() == Some(old.as_str()) {
                    state.input_category = Some(new.to_string());
                }
                if matches!(&state.filter, CategoryFilter::Category(f) if *f == old) {
                    state.filter = CategoryFilter::Category(new.to_string());
                }
                tracing::debug!(from = %old, to = %new, moved, "category renamed");

                smallvec![Effect::None]
            }

            TodoAction::SetFilter { filter } => {
                state.filter = filter;
                smallvec![Effect::None]
            }

            TodoAction::SetInputCategory { category } => {
                state.input_category = category;
                smallvec![Effect::None]
            }
        }
    }
}
