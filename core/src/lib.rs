//! # Tasklist Core
//!
//! Core traits and types for the Tasklist architecture.
//!
//! This crate provides the fundamental abstractions for building the
//! to-do application as an explicit, exclusively-owned state machine
//! driven through a unidirectional reducer.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer (user-interaction events)
//! - **Reducer**: Pure function `(State, Action, Environment) → Effects`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Dependency Injection via Environment
//!
//! Everything here is synchronous: each action is reduced to completion
//! before the next one is processed, so there is no locking, no suspension,
//! and no cancellation anywhere in the model.
//!
//! ## Example
//!
//! ```
//! use tasklist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → Effects`,
/// with the state updated in place behind an exclusive borrow.
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoState;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodoState,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> SmallVec<[Effect<TodoAction>; 4]> {
    ///         match action {
    ///             TodoAction::AddTodo { text, category } => {
    ///                 // Business logic here
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action (invalid input is silently absorbed)
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the store
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe follow-up work to be performed by the store. They are
/// values (not execution): a reducer returns them, the store interprets
/// them. In this synchronous model the only effect beyond [`Effect::None`]
/// is feeding another action back into the reducer before the triggering
/// dispatch returns.
pub mod effect {
    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and interpreted by the Store.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        ///
        /// The store dispatches the boxed action after the current reduction
        /// finishes, within the same atomic transition.
        Send(Box<Action>),
    }

    impl<Action> Effect<Action> {
        /// Shorthand for a feedback effect
        pub fn send(action: Action) -> Self {
            Self::Send(Box::new(action))
        }

        /// Returns `true` for [`Effect::None`]
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Self::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter. For this application the only ambient
/// dependency is the clock used to stamp new todos.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklist_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// assert!(clock.now() >= now);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
