//! Test doubles for widgets built on the host traits
//!
//! This module stands in for the host framework in unit and integration
//! tests:
//!
//! - [`TestHost`]: button factory, [`StaticTheme`] and a redraw counter
//! - [`TestButton`] / [`TestPane`]: canvas objects with fixed minimum sizes
//! - [`tap`]: invoke a button's handler the way a host would
//! - [`RecordingMiddleware`]: capture dispatched actions for assertions
//! - Assertion macros for verifying dispatched actions
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use accordion_core::testing::{tap, TestButton};
//! use accordion_core::Button;
//!
//! let hits = Rc::new(RefCell::new(0));
//! let counter = Rc::clone(&hits);
//! let button = RefCell::new(TestButton::default());
//! button
//!     .borrow_mut()
//!     .set_on_tap(Some(Rc::new(move || *counter.borrow_mut() += 1)));
//!
//! assert!(tap(&button));
//! assert_eq!(*hits.borrow(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use ratatui::layout::{Position, Size};

use crate::host::{Button, CanvasObject, Host, TapHandler, Theme};
use crate::store::Middleware;
use crate::theme::{Icon, StaticTheme};
use crate::Action;

/// Default minimum size of buttons created by [`TestHost`]
pub const TEST_BUTTON_MIN_SIZE: Size = Size {
    width: 100,
    height: 20,
};

/// Invoke a button's tap handler the way a host does.
///
/// The handler is cloned out before it runs, so the button is not borrowed
/// while the handler updates it. Returns `false` if no handler is bound.
pub fn tap<B: Button + ?Sized>(button: &RefCell<B>) -> bool {
    let handler = button.borrow().on_tap();
    match handler {
        Some(handler) => {
            handler();
            true
        }
        None => false,
    }
}

/// A host button that records everything written to it
pub struct TestButton {
    pub title: String,
    pub icon: Option<Icon>,
    pub hidden: bool,
    pub min_size: Size,
    pub size: Size,
    pub position: Position,
    pub refresh_count: usize,
    on_tap: Option<TapHandler>,
}

impl TestButton {
    pub fn new(min_size: Size) -> Self {
        Self {
            title: String::new(),
            icon: None,
            hidden: false,
            min_size,
            size: Size::default(),
            position: Position::default(),
            refresh_count: 0,
            on_tap: None,
        }
    }
}

impl Default for TestButton {
    fn default() -> Self {
        Self::new(TEST_BUTTON_MIN_SIZE)
    }
}

impl fmt::Debug for TestButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestButton")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("hidden", &self.hidden)
            .field("has_on_tap", &self.on_tap.is_some())
            .finish()
    }
}

impl CanvasObject for TestButton {
    fn min_size(&self) -> Size {
        self.min_size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn position(&self) -> Position {
        self.position
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn is_visible(&self) -> bool {
        !self.hidden
    }

    fn show(&mut self) {
        self.hidden = false;
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}

impl Button for TestButton {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
    }

    fn on_tap(&self) -> Option<TapHandler> {
        self.on_tap.clone()
    }

    fn set_on_tap(&mut self, handler: Option<TapHandler>) {
        self.on_tap = handler;
    }

    fn refresh(&mut self) {
        self.refresh_count += 1;
    }
}

/// An opaque detail pane with a fixed minimum size
#[derive(Debug, Clone, Default)]
pub struct TestPane {
    pub min_size: Size,
    pub size: Size,
    pub position: Position,
    pub hidden: bool,
}

impl TestPane {
    pub fn new(min_size: Size) -> Self {
        Self {
            min_size,
            ..Self::default()
        }
    }

    /// Wrap the pane for sharing between a test and a widget
    pub fn shared(min_size: Size) -> Rc<RefCell<TestPane>> {
        Rc::new(RefCell::new(Self::new(min_size)))
    }
}

impl CanvasObject for TestPane {
    fn min_size(&self) -> Size {
        self.min_size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn position(&self) -> Position {
        self.position
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn is_visible(&self) -> bool {
        !self.hidden
    }

    fn show(&mut self) {
        self.hidden = false;
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}

/// A host that hands out [`TestButton`]s and counts redraw requests
#[derive(Debug)]
pub struct TestHost {
    theme: StaticTheme,
    button_min_size: Size,
    buttons_created: Cell<usize>,
    redraws: Cell<usize>,
    measure_on_redraw: bool,
    measured: RefCell<Vec<Size>>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            theme: StaticTheme::default(),
            button_min_size: TEST_BUTTON_MIN_SIZE,
            buttons_created: Cell::new(0),
            redraws: Cell::new(0),
            measure_on_redraw: false,
            measured: RefCell::new(Vec::new()),
        }
    }

    pub fn with_theme(mut self, theme: StaticTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_button_min_size(mut self, size: Size) -> Self {
        self.button_min_size = size;
        self
    }

    /// Measure every object passed to [`Host::request_redraw`] on the spot,
    /// like a host that repaints immediately
    pub fn with_measure_on_redraw(mut self) -> Self {
        self.measure_on_redraw = true;
        self
    }

    /// Minimum sizes taken during redraw requests, oldest first
    pub fn measured_sizes(&self) -> Vec<Size> {
        self.measured.borrow().clone()
    }

    /// Number of buttons handed out by [`Host::new_button`]
    pub fn buttons_created(&self) -> usize {
        self.buttons_created.get()
    }

    /// Number of [`Host::request_redraw`] calls so far
    pub fn redraw_count(&self) -> usize {
        self.redraws.get()
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TestHost {
    type Button = TestButton;

    fn theme(&self) -> &dyn Theme {
        &self.theme
    }

    fn new_button(&self) -> TestButton {
        self.buttons_created.set(self.buttons_created.get() + 1);
        TestButton::new(self.button_min_size)
    }

    fn request_redraw(&self, object: &dyn CanvasObject) {
        self.redraws.set(self.redraws.get() + 1);
        if self.measure_on_redraw {
            self.measured.borrow_mut().push(object.min_size());
        }
    }
}

/// Middleware that records every dispatched action
///
/// Clones share the same log, so keep one clone in the test and hand the
/// other to the store.
pub struct RecordingMiddleware<A: Action> {
    log: Rc<RefCell<Vec<(A, bool)>>>,
}

impl<A: Action> RecordingMiddleware<A> {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// All actions seen so far, applied or not
    pub fn dispatched(&self) -> Vec<A> {
        self.log.borrow().iter().map(|(a, _)| a.clone()).collect()
    }

    /// Only the actions the reducer reported as applied
    pub fn applied(&self) -> Vec<A> {
        self.log
            .borrow()
            .iter()
            .filter(|(_, applied)| *applied)
            .map(|(a, _)| a.clone())
            .collect()
    }

    /// Take all recorded actions, leaving the log empty
    pub fn drain(&self) -> Vec<A> {
        self.log.borrow_mut().drain(..).map(|(a, _)| a).collect()
    }
}

impl<A: Action> Clone for RecordingMiddleware<A> {
    fn clone(&self) -> Self {
        Self {
            log: Rc::clone(&self.log),
        }
    }
}

impl<A: Action> Default for RecordingMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> Middleware<A> for RecordingMiddleware<A> {
    fn before(&mut self, _action: &A) {}

    fn after(&mut self, action: &A, applied: bool) {
        self.log.borrow_mut().push((action.clone(), applied));
    }
}

/// Assert that a specific action was dispatched.
///
/// # Example
///
/// ```ignore
/// let actions = recorder.dispatched();
/// assert_dispatched!(actions, AccordionAction::Open(1));
/// assert_dispatched!(actions, AccordionAction::Toggle(_));
/// ```
#[macro_export]
macro_rules! assert_dispatched {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be dispatched, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT dispatched.
#[macro_export]
macro_rules! assert_not_dispatched {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be dispatched, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many dispatched actions match a pattern.
#[macro_export]
macro_rules! count_dispatched {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Expand(usize),
        CollapseAll,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Expand(_) => "Expand",
                TestAction::CollapseAll => "CollapseAll",
            }
        }
    }

    #[test]
    fn test_tap_without_handler() {
        let button = RefCell::new(TestButton::default());
        assert!(!tap(&button));
    }

    #[test]
    fn test_tap_handler_may_borrow_button() {
        let button = Rc::new(RefCell::new(TestButton::default()));
        let weak = Rc::downgrade(&button);
        button.borrow_mut().set_on_tap(Some(Rc::new(move || {
            if let Some(button) = weak.upgrade() {
                button.borrow_mut().set_title("tapped");
            }
        })));

        assert!(tap(&button));
        assert_eq!(button.borrow().title(), "tapped");
    }

    #[test]
    fn test_host_counts_buttons_and_redraws() {
        let host = TestHost::new().with_button_min_size(Size::new(8, 1));
        let button = host.new_button();
        assert_eq!(button.min_size(), Size::new(8, 1));
        assert!(button.is_visible());
        assert_eq!(host.buttons_created(), 1);

        host.request_redraw(&button);
        host.request_redraw(&button);
        assert_eq!(host.redraw_count(), 2);
        assert!(host.measured_sizes().is_empty());
    }

    #[test]
    fn test_host_measures_on_redraw() {
        let host = TestHost::new().with_measure_on_redraw();
        let pane = TestPane::new(Size::new(30, 5));

        host.request_redraw(&pane);
        assert_eq!(host.measured_sizes(), vec![Size::new(30, 5)]);
    }

    #[test]
    fn test_pane_visibility() {
        let pane = TestPane::shared(Size::new(200, 60));
        pane.borrow_mut().hide();
        assert!(pane.borrow().is_hidden());
        pane.borrow_mut().show();
        assert!(pane.borrow().is_visible());
    }

    #[test]
    fn test_recording_middleware() {
        let recorder = RecordingMiddleware::new();
        let mut handle = recorder.clone();

        handle.after(&TestAction::Expand(1), true);
        handle.after(&TestAction::CollapseAll, false);

        assert_eq!(
            recorder.dispatched(),
            vec![TestAction::Expand(1), TestAction::CollapseAll]
        );
        assert_eq!(recorder.applied(), vec![TestAction::Expand(1)]);
        assert_eq!(recorder.drain().len(), 2);
        assert!(recorder.dispatched().is_empty());
    }

    #[test]
    fn test_assert_macros() {
        let actions = vec![TestAction::Expand(0), TestAction::Expand(2)];

        assert_dispatched!(actions, TestAction::Expand(2));
        assert_dispatched!(actions, TestAction::Expand(i) if *i > 1);
        assert_not_dispatched!(actions, TestAction::CollapseAll);
        assert_eq!(count_dispatched!(actions, TestAction::Expand(_)), 2);
    }
}
