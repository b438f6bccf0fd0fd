//! # Tasklist Runtime
//!
//! Runtime implementation for the Tasklist architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that owns state and dispatches actions
//! - **Feedback loop**: actions → reducer → effects → actions, drained
//!   synchronously within a single dispatch
//!
//! The store is single-threaded and exclusively owned: each user-interaction
//! event triggers exactly one atomic state transition before the next event
//! is processed. No operation suspends, blocks, or is cancellable, so there
//! is no locking, no transactions, and no retry logic here.
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state_map(|s| s.some_field);
//! ```

use std::collections::VecDeque;

use tasklist_core::{effect::Effect, reducer::Reducer};

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (exclusively owned, mutated behind `&mut self`)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Effect interpretation (synchronous feedback loop)
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let mut store = Store::new(
///     TodoState::default(),
///     TodoReducer::new(),
///     production_environment(),
/// );
///
/// store.send(TodoAction::AddTodo {
///     text: "buy milk".to_string(),
///     category: None,
/// });
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: S,
    reducer: R,
    environment: E,
    /// Pending feedback actions for the dispatch currently in flight.
    ///
    /// Always empty between `send` calls; kept on the struct so repeated
    /// dispatches reuse the allocation.
    queue: VecDeque<A>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    A: std::fmt::Debug,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (business logic)
    /// - `environment`: Injected dependencies
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
            queue: VecDeque::new(),
        }
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Calls the reducer with (state, action, environment)
    /// 2. Interprets returned effects, feeding `Effect::Send` actions back
    ///    into the reducer in order
    /// 3. Returns once the feedback queue is drained
    ///
    /// The entire transition, including feedback actions, completes before
    /// `send` returns - atomic from the caller's point of view.
    ///
    /// Invalid input never fails: reducers absorb it as a no-op, so `send`
    /// has nothing to report.
    pub fn send(&mut self, action: A) {
        tracing::debug!(?action, "dispatching action");
        self.queue.push_back(action);

        while let Some(action) = self.queue.pop_front() {
            let effects = self
                .reducer
                .reduce(&mut self.state, action, &self.environment);

            for effect in effects {
                match effect {
                    Effect::None => {}
                    Effect::Send(next) => {
                        tracing::trace!(action = ?next, "queueing feedback action");
                        self.queue.push_back(*next);
                    }
                }
            }
        }
    }

    /// Borrow the current state
    #[must_use]
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Read a value out of the current state
    ///
    /// # Example
    ///
    /// ```ignore
    /// let count = store.state_map(|s| s.todos.len());
    /// ```
    pub fn state_map<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&self.state)
    }

    /// Borrow the environment
    #[must_use]
    pub const fn environment(&self) -> &E {
        &self.environment
    }

    /// Consume the store, returning the final state
    #[must_use]
    pub fn into_state(self) -> S {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::{SmallVec, smallvec};

    #[derive(Clone, Debug, Default)]
    struct PingState {
        pings: u32,
        pongs: u32,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum PingAction {
        Ping,
        Pong,
    }

    struct PingReducer;

    impl Reducer for PingReducer {
        type State = PingState;
        type Action = PingAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                PingAction::Ping => {
                    state.pings += 1;
                    smallvec![Effect::send(PingAction::Pong)]
                }
                PingAction::Pong => {
                    state.pongs += 1;
                    smallvec![Effect::None]
                }
            }
        }
    }

    #[test]
    fn send_reduces_the_action() {
        let mut store = Store::new(PingState::default(), PingReducer, ());

        store.send(PingAction::Pong);

        assert_eq!(store.state().pongs, 1);
        assert_eq!(store.state().pings, 0);
    }

    #[test]
    fn feedback_effects_run_within_the_same_dispatch() {
        let mut store = Store::new(PingState::default(), PingReducer, ());

        store.send(PingAction::Ping);

        // The Pong produced by the Ping has already been reduced.
        assert_eq!(store.state().pings, 1);
        assert_eq!(store.state().pongs, 1);
    }

    #[test]
    fn state_map_reads_without_consuming() {
        let mut store = Store::new(PingState::default(), PingReducer, ());
        store.send(PingAction::Ping);

        let total = store.state_map(|s| s.pings + s.pongs);
        assert_eq!(total, 2);
        assert_eq!(store.state().pings, 1);
    }

    #[test]
    fn into_state_returns_final_state() {
        let mut store = Store::new(PingState::default(), PingReducer, ());
        store.send(PingAction::Ping);
        store.send(PingAction::Ping);

        let state = store.into_state();
        assert_eq!(state.pings, 2);
        assert_eq!(state.pongs, 2);
    }
}
