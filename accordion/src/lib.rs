//! accordion: stacked, collapsible sections for host UI frameworks
//!
//! The widget keeps an ordered list of sections, each with a title, a detail
//! pane and an open flag. Opening and closing go through a small reducer, so
//! the single-open rule holds no matter how the mutation was triggered (API
//! call or header tap). The host framework supplies buttons, the theme and
//! the render loop through the traits in [`accordion_core`].
//!
//! # Example
//! ```
//! use accordion::prelude::*;
//! use accordion::testing::{TestHost, TestPane};
//!
//! let accordion = AccordionContainer::new(
//!     TestHost::new(),
//!     [
//!         AccordionItem::new("Account", TestPane::shared(Size::new(200, 60))),
//!         AccordionItem::new("Privacy", TestPane::shared(Size::new(200, 60))),
//!     ],
//! );
//!
//! accordion.open(1);
//! assert_eq!(accordion.min_size(), Size::new(200, 108));
//! assert_eq!(accordion.renderer().borrow().objects().len(), 4);
//! ```

// Re-export everything from core
pub use accordion_core::*;

// Re-export the widgets
pub use accordion_widgets::{
    reduce, AccordionAction, AccordionContainer, AccordionItem, AccordionRenderer,
    AccordionState,
};

/// Prelude for convenient imports
pub mod prelude {
    // Host traits
    pub use accordion_core::{
        BaseWidget, Button, CanvasObject, Host, SharedObject, TapHandler, Theme, Widget,
        WidgetRenderer,
    };

    // Store
    pub use accordion_core::{
        Action, ComposedMiddleware, LoggingMiddleware, Middleware, Store, StoreWithMiddleware,
    };

    // Theme and debug
    pub use accordion_core::{DebugState, Icon, StaticTheme};

    // Widgets
    pub use accordion_widgets::{
        AccordionAction, AccordionContainer, AccordionItem, AccordionRenderer,
    };

    // Ratatui re-exports
    pub use accordion_core::{Color, Position, Size};
}
