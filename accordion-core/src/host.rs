//! Collaborator traits consumed from, and exposed to, the host UI framework
//!
//! The host owns the window, the render loop, the theme and the button
//! primitive. Widgets in this workspace only talk to it through the traits
//! below:
//!
//! - [`CanvasObject`]: anything the host can place, size, show and hide
//! - [`Button`]: the tappable primitive used for section headers
//! - [`Theme`]: padding, background color and the expand/collapse glyphs
//! - [`Host`]: button factory, theme access and the redraw hook
//! - [`WidgetRenderer`] / [`Widget`]: the lifecycle the render loop drives
//!
//! Everything runs on the host's UI thread, so shared objects are
//! `Rc<RefCell<_>>` rather than `Arc<Mutex<_>>`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratatui::layout::{Position, Size};
use ratatui::style::Color;

use crate::theme::Icon;

/// A canvas object shared between the code that built it and the widgets
/// that lay it out.
pub type SharedObject = Rc<RefCell<dyn CanvasObject>>;

/// Callback invoked when a button is tapped.
///
/// Hosts must clone the handler out of the button before calling it: the
/// handler usually re-enters the widget, which in turn updates the button.
pub type TapHandler = Rc<dyn Fn()>;

/// An object the host can position, size and draw
pub trait CanvasObject {
    /// The size this object should not shrink below
    fn min_size(&self) -> Size;

    /// Current size as last set by [`resize`](CanvasObject::resize)
    fn size(&self) -> Size;

    /// Current position relative to the parent
    fn position(&self) -> Position;

    /// Move the object to a position relative to its parent
    fn move_to(&mut self, position: Position);

    /// Resize the object
    fn resize(&mut self, size: Size);

    /// Whether the host should draw this object
    fn is_visible(&self) -> bool;

    fn is_hidden(&self) -> bool {
        !self.is_visible()
    }

    fn show(&mut self);

    fn hide(&mut self);
}

/// The host's tappable button primitive
pub trait Button: CanvasObject {
    fn title(&self) -> &str;

    fn set_title(&mut self, title: &str);

    fn icon(&self) -> Option<&Icon>;

    fn set_icon(&mut self, icon: Option<Icon>);

    /// The currently bound tap handler, if any
    fn on_tap(&self) -> Option<TapHandler>;

    /// Replace the tap handler
    fn set_on_tap(&mut self, handler: Option<TapHandler>);

    /// Ask the button to re-render itself after its fields changed
    fn refresh(&mut self);
}

/// Theme values a widget reads while laying out and rendering
pub trait Theme {
    /// Spacing between stacked elements
    fn padding(&self) -> u16;

    fn background_color(&self) -> Color;

    /// Glyph shown on a header whose section is collapsed
    fn expand_icon(&self) -> Icon;

    /// Glyph shown on a header whose section is expanded
    fn collapse_icon(&self) -> Icon;
}

/// Services the host framework provides to widgets
pub trait Host {
    /// Concrete button type produced by [`new_button`](Host::new_button)
    type Button: Button + 'static;

    fn theme(&self) -> &dyn Theme;

    /// Create a fresh, visible button with no title, icon or handler
    fn new_button(&self) -> Self::Button;

    /// Request a repaint of `object` on the next frame
    ///
    /// A widget refreshing itself releases its renderer first, so the host
    /// may measure or draw `object` here. A host calling
    /// [`WidgetRenderer::refresh`] directly still holds that renderer and
    /// must only schedule the repaint.
    fn request_redraw(&self, object: &dyn CanvasObject);
}

/// Renderer lifecycle driven by the host's render loop
pub trait WidgetRenderer {
    fn min_size(&self) -> Size;

    /// Position and size every child object within `size`
    fn layout(&mut self, size: Size);

    /// All child objects, in drawing order
    ///
    /// Hidden children may be included; the host honors each object's own
    /// visibility flag.
    fn objects(&self) -> Vec<SharedObject>;

    fn background_color(&self) -> Color;

    /// Re-sync cached children with the widget's data, re-layout and
    /// request a redraw
    fn refresh(&mut self);

    /// Release renderer resources
    fn destroy(&mut self) {}
}

/// A canvas object that draws itself through a [`WidgetRenderer`]
pub trait Widget: CanvasObject {
    /// Return this widget's renderer.
    ///
    /// The renderer is built on the first call and cached by the widget;
    /// later calls hand out the same instance.
    fn create_renderer(&self) -> Rc<RefCell<dyn WidgetRenderer>>;
}

/// Size, position and visibility bookkeeping for widgets built as handles
///
/// All fields are interior-mutable so a widget can update them through a
/// shared reference.
#[derive(Debug, Default)]
pub struct BaseWidget {
    size: Cell<Size>,
    position: Cell<Position>,
    hidden: Cell<bool>,
}

impl BaseWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Size {
        self.size.get()
    }

    pub fn set_size(&self, size: Size) {
        self.size.set(size);
    }

    pub fn position(&self) -> Position {
        self.position.get()
    }

    pub fn set_position(&self, position: Position) {
        self.position.set(position);
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden.get()
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
    }
}
