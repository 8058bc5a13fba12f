//! Accordion widget for hosts implementing the `accordion-core` traits
//!
//! An accordion is a vertical stack of titled sections. Tapping a section's
//! header expands it to reveal a detail pane; tapping again collapses it.
//! In single-open mode (the default) expanding one section collapses the
//! others; in multi-open mode sections open and close independently.
//!
//! # Widgets
//!
//! - [`AccordionContainer`] - the widget, with its sections in display order
//! - [`AccordionItem`] - one section: title, detail pane, open flag
//! - [`AccordionRenderer`] - header cache, minimum size and vertical layout
//!
//! # Example
//!
//! ```
//! use accordion_core::testing::{TestHost, TestPane};
//! use accordion_core::Size;
//! use accordion_widgets::{AccordionContainer, AccordionItem};
//!
//! let accordion = AccordionContainer::new(TestHost::new(), []);
//! accordion.set_multi_open(true);
//! accordion.append(AccordionItem::new("Display", TestPane::shared(Size::new(200, 60))));
//! accordion.append(AccordionItem::new("Sound", TestPane::shared(Size::new(200, 60))));
//!
//! accordion.open_all();
//! assert_eq!(accordion.open_indices(), vec![0, 1]);
//! assert_eq!(accordion.min_size(), Size::new(200, 20 + 4 + 60 + 4 + 20 + 4 + 60));
//! ```

mod action;
mod container;
mod item;
mod renderer;

pub use action::{reduce, AccordionAction, AccordionState};
pub use container::AccordionContainer;
pub use item::AccordionItem;
pub use renderer::AccordionRenderer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AccordionAction, AccordionContainer, AccordionItem, AccordionRenderer, AccordionState,
    };
}
