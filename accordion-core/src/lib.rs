//! Core traits and types for the accordion widget
//!
//! This crate holds everything the widget needs that is not the widget
//! itself:
//!
//! - **Host traits**: the contract with the host UI framework
//!   ([`CanvasObject`], [`Button`], [`Theme`], [`Host`], [`WidgetRenderer`],
//!   [`Widget`])
//! - **Action / Store**: state mutations expressed as actions and applied by
//!   a reducer, with middleware for logging and recording
//! - **Theme**: [`Icon`] and the serde-configurable [`StaticTheme`]
//! - **Debug state**: key/value introspection of widget state
//! - **Testing**: a stand-in host for unit and integration tests
//!
//! # Example
//!
//! ```
//! use accordion_core::prelude::*;
//!
//! let theme = StaticTheme::from_json(r#"{ "padding": 2 }"#)?;
//! assert_eq!(theme.padding(), 2);
//! assert_eq!(theme.expand_icon(), Icon::MOVE_DOWN);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod action;
pub mod debug_state;
pub mod host;
pub mod store;
pub mod testing;
pub mod theme;

pub use action::Action;
pub use debug_state::{DebugEntry, DebugSection, DebugState};
pub use host::{
    BaseWidget, Button, CanvasObject, Host, SharedObject, TapHandler, Theme, Widget,
    WidgetRenderer,
};
pub use store::{
    ComposedMiddleware, LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware,
};
pub use theme::{Icon, StaticTheme};

// Re-export ratatui geometry and color types for convenience
pub use ratatui::{
    layout::{Position, Size},
    style::Color,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::debug_state::{DebugSection, DebugState};
    pub use crate::host::{
        BaseWidget, Button, CanvasObject, Host, SharedObject, TapHandler, Theme, Widget,
        WidgetRenderer,
    };
    pub use crate::store::{
        ComposedMiddleware, LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware,
    };
    pub use crate::theme::{Icon, StaticTheme};

    pub use ratatui::{
        layout::{Position, Size},
        style::Color,
    };
}
