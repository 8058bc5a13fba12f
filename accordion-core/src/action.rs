//! Action trait for state mutations routed through a store

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to a store
///
/// Actions describe an intended change to widget state. They should be:
/// - Clone: Actions may be logged, recorded, or replayed by middleware
/// - Debug: For debugging and logging
///
/// There is no `Send` bound. Widgets live on the host's UI thread and
/// actions may carry `Rc` handles to the items they act on.
pub trait Action: Clone + Debug + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}
