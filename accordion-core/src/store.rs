//! State store with reducer pattern and middleware

use crate::Action;
use std::marker::PhantomData;

/// A reducer function that handles actions and mutates state
///
/// Returns `true` if the action applied and a refresh is needed.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// State store with a reducer
///
/// The store holds a widget's data and is the single point through which
/// that data is mutated, via the `dispatch` method.
///
/// # Type Parameters
/// * `S` - The state type
/// * `A` - The action type (must implement `Action`)
///
/// # Example
/// ```
/// use accordion_core::{Action, Store};
///
/// #[derive(Default)]
/// struct Sections {
///     expanded: Vec<bool>,
/// }
///
/// #[derive(Clone, Debug)]
/// enum SectionAction {
///     Add,
///     Expand(usize),
/// }
///
/// impl Action for SectionAction {
///     fn name(&self) -> &'static str {
///         match self {
///             SectionAction::Add => "Add",
///             SectionAction::Expand(_) => "Expand",
///         }
///     }
/// }
///
/// fn reducer(state: &mut Sections, action: SectionAction) -> bool {
///     match action {
///         SectionAction::Add => {
///             state.expanded.push(false);
///             true
///         }
///         SectionAction::Expand(i) => match state.expanded.get_mut(i) {
///             Some(flag) => {
///                 *flag = true;
///                 true
///             }
///             None => false,
///         },
///     }
/// }
///
/// let mut store = Store::new(Sections::default(), reducer);
/// assert!(store.dispatch(SectionAction::Add));
/// assert!(store.dispatch(SectionAction::Expand(0)));
/// assert!(!store.dispatch(SectionAction::Expand(7)));
/// assert_eq!(store.state().expanded, vec![true]);
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Dispatch an action to the store
    ///
    /// The reducer will be called with the current state and action.
    /// Returns `true` if the action applied and a refresh is needed.
    pub fn dispatch(&mut self, action: A) -> bool {
        (self.reducer)(&mut self.state, action)
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }
}

/// Store with middleware support
///
/// Wraps a `Store` and allows middleware to intercept actions
/// before and after they are processed by the reducer.
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    /// Create a new store with middleware
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Dispatch an action through middleware and store
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let applied = self.store.dispatch(action.clone());
        self.middleware.after(&action, applied);
        applied
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Get a reference to the middleware
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Get a mutable reference to the middleware
    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }
}

/// Middleware trait for intercepting actions
///
/// Implement this trait to observe or record the actions flowing
/// through a store.
pub trait Middleware<A: Action> {
    /// Called before the action is dispatched to the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer ran; `applied` is the reducer's result
    fn after(&mut self, action: &A, applied: bool);
}

/// Middleware that logs actions through `tracing`
///
/// Dispatch is traced at `trace` level; the outcome at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        tracing::trace!(action = %action.name(), "dispatching action");
    }

    fn after(&mut self, action: &A, applied: bool) {
        tracing::debug!(
            action = %action.name(),
            applied,
            "action processed"
        );
    }
}

/// Compose multiple middleware into a single middleware
pub struct ComposedMiddleware<A: Action> {
    middlewares: Vec<Box<dyn Middleware<A>>>,
}

impl<A: Action> std::fmt::Debug for ComposedMiddleware<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedMiddleware")
            .field("middlewares_count", &self.middlewares.len())
            .finish()
    }
}

impl<A: Action> Default for ComposedMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ComposedMiddleware<A> {
    /// Create a new composed middleware
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Add a middleware to the composition
    pub fn add<M: Middleware<A> + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Box::new(middleware));
    }
}

impl<A: Action> Middleware<A> for ComposedMiddleware<A> {
    fn before(&mut self, action: &A) {
        for middleware in &mut self.middlewares {
            middleware.before(action);
        }
    }

    fn after(&mut self, action: &A, applied: bool) {
        // Call in reverse order for proper nesting
        for middleware in self.middlewares.iter_mut().rev() {
            middleware.after(action, applied);
        }
    }
}
