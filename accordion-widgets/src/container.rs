//! The accordion widget: ordered sections with single- or multi-open state

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use accordion_core::{
    BaseWidget, CanvasObject, ComposedMiddleware, DebugSection, DebugState, Host,
    LoggingMiddleware, Middleware, Position, Size, StoreWithMiddleware, TapHandler, Widget,
    WidgetRenderer,
};

use crate::action::{reduce, AccordionAction, AccordionState};
use crate::item::AccordionItem;
use crate::renderer::AccordionRenderer;

type AccordionStore =
    StoreWithMiddleware<AccordionState, AccordionAction, ComposedMiddleware<AccordionAction>>;

/// A vertical stack of titled sections that expand to reveal a detail pane
///
/// The container is a handle: clones refer to the same widget. Every
/// mutation is dispatched as an [`AccordionAction`] through a store; when
/// the action applies, the renderer re-syncs its headers, lays out again and
/// asks the host for a redraw.
///
/// Index-taking operations ignore out-of-range indices.
///
/// # Example
///
/// ```
/// use accordion_core::testing::{TestHost, TestPane};
/// use accordion_core::Size;
/// use accordion_widgets::{AccordionContainer, AccordionItem};
///
/// let general = AccordionItem::new("General", TestPane::shared(Size::new(200, 60)));
/// let network = AccordionItem::new("Network", TestPane::shared(Size::new(200, 60)));
/// let accordion = AccordionContainer::new(TestHost::new(), [general, network]);
///
/// accordion.open(1);
/// assert_eq!(accordion.open_indices(), vec![1]);
///
/// accordion.open(0);
/// assert_eq!(accordion.open_indices(), vec![0]);
/// ```
pub struct AccordionContainer<H: Host> {
    inner: Rc<ContainerInner<H>>,
}

pub(crate) struct ContainerInner<H: Host> {
    host: H,
    base: BaseWidget,
    store: RefCell<AccordionStore>,
    renderer: RefCell<Option<Rc<RefCell<AccordionRenderer<H>>>>>,
}

impl<H: Host + 'static> AccordionContainer<H> {
    /// Create an accordion showing `items` in order, in single-open mode
    pub fn new(host: H, items: impl IntoIterator<Item = AccordionItem>) -> Self {
        let items: Vec<AccordionItem> = items.into_iter().collect();
        tracing::debug!(items = items.len(), "creating accordion");

        let mut middleware = ComposedMiddleware::<AccordionAction>::new();
        middleware.add(LoggingMiddleware::new());

        Self {
            inner: Rc::new(ContainerInner {
                host,
                base: BaseWidget::new(),
                store: RefCell::new(StoreWithMiddleware::new(
                    AccordionState::new(items),
                    reduce,
                    middleware,
                )),
                renderer: RefCell::new(None),
            }),
        }
    }

    pub(crate) fn from_inner(inner: Rc<ContainerInner<H>>) -> Self {
        Self { inner }
    }

    pub fn host(&self) -> &H {
        &self.inner.host
    }

    /// Snapshot of the sections in display order
    pub fn items(&self) -> Vec<AccordionItem> {
        self.inner.store.borrow().state().items.clone()
    }

    pub fn item(&self, index: usize) -> Option<AccordionItem> {
        self.inner.store.borrow().state().items.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.store.borrow().state().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of `item` in the accordion, by identity
    pub fn index_of(&self, item: &AccordionItem) -> Option<usize> {
        self.inner
            .store
            .borrow()
            .state()
            .items
            .iter()
            .position(|candidate| candidate.ptr_eq(item))
    }

    pub fn open_indices(&self) -> Vec<usize> {
        self.inner.store.borrow().state().open_indices()
    }

    /// Whether several sections may be open at once
    pub fn multi_open(&self) -> bool {
        self.inner.store.borrow().state().multi_open
    }

    /// Switch modes. Turning multi-open off leaves open sections open until
    /// the next [`open`](Self::open).
    pub fn set_multi_open(&self, multi_open: bool) {
        self.dispatch(AccordionAction::SetMultiOpen(multi_open));
    }

    /// Apply an action, refreshing if it applied
    pub fn dispatch(&self, action: AccordionAction) -> bool {
        let applied = self.inner.store.borrow_mut().dispatch(action);
        if applied {
            self.refresh();
        }
        applied
    }

    /// Observe every action this accordion dispatches
    ///
    /// Middleware runs while the accordion's state is borrowed and must not
    /// call back into the accordion.
    pub fn add_middleware<M: Middleware<AccordionAction> + 'static>(&self, middleware: M) {
        self.inner
            .store
            .borrow_mut()
            .middleware_mut()
            .add(middleware);
    }

    pub fn append(&self, item: AccordionItem) {
        self.dispatch(AccordionAction::Append(item));
    }

    /// Remove the first occurrence of `item`; absent items are ignored
    pub fn remove(&self, item: &AccordionItem) {
        self.dispatch(AccordionAction::Remove(item.clone()));
    }

    pub fn remove_index(&self, index: usize) {
        self.dispatch(AccordionAction::RemoveIndex(index));
    }

    /// Expand the section at `index`, collapsing the rest in single-open mode
    pub fn open(&self, index: usize) {
        self.dispatch(AccordionAction::Open(index));
    }

    /// Expand every section. Does nothing in single-open mode.
    pub fn open_all(&self) {
        self.dispatch(AccordionAction::OpenAll);
    }

    pub fn close(&self, index: usize) {
        self.dispatch(AccordionAction::Close(index));
    }

    pub fn close_all(&self) {
        self.dispatch(AccordionAction::CloseAll);
    }

    /// What a header tap does: collapse an open section, expand a closed one
    pub fn toggle(&self, index: usize) {
        self.dispatch(AccordionAction::Toggle(index));
    }

    /// Tap handler for the header currently at `index`
    pub(crate) fn toggle_for_index(&self, index: usize) -> TapHandler {
        let inner = Rc::downgrade(&self.inner);
        Rc::new(move || {
            if let Some(inner) = inner.upgrade() {
                AccordionContainer::from_inner(inner).toggle(index);
            }
        })
    }

    /// The renderer for this accordion, built on first use
    pub fn renderer(&self) -> Rc<RefCell<AccordionRenderer<H>>> {
        if let Some(renderer) = self.inner.renderer.borrow().as_ref() {
            return Rc::clone(renderer);
        }
        let renderer = Rc::new(RefCell::new(AccordionRenderer::new(Rc::downgrade(
            &self.inner,
        ))));
        *self.inner.renderer.borrow_mut() = Some(Rc::clone(&renderer));
        renderer
    }

    /// Re-sync headers with the sections, lay out and request a redraw
    ///
    /// The renderer is released before the redraw request, so the host may
    /// measure or draw the widget straight away.
    pub fn refresh(&self) {
        self.renderer().borrow_mut().sync();
        self.inner.host.request_redraw(self);
    }

    pub fn min_size(&self) -> Size {
        self.renderer().borrow().min_size()
    }

    pub fn size(&self) -> Size {
        self.inner.base.size()
    }

    /// Resize the accordion and lay its sections out at the new size
    pub fn resize(&self, size: Size) {
        self.inner.base.set_size(size);
        self.renderer().borrow_mut().layout(size);
    }

    pub fn position(&self) -> Position {
        self.inner.base.position()
    }

    pub fn move_to(&self, position: Position) {
        self.inner.base.set_position(position);
    }
}

impl<H: Host> Clone for AccordionContainer<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H: Host> fmt::Debug for AccordionContainer<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.inner.store.borrow();
        f.debug_struct("AccordionContainer")
            .field("items", &store.state().items)
            .field("multi_open", &store.state().multi_open)
            .finish_non_exhaustive()
    }
}

impl<H: Host + 'static> CanvasObject for AccordionContainer<H> {
    fn min_size(&self) -> Size {
        AccordionContainer::min_size(self)
    }

    fn size(&self) -> Size {
        AccordionContainer::size(self)
    }

    fn position(&self) -> Position {
        AccordionContainer::position(self)
    }

    fn move_to(&mut self, position: Position) {
        AccordionContainer::move_to(self, position);
    }

    fn resize(&mut self, size: Size) {
        AccordionContainer::resize(self, size);
    }

    fn is_visible(&self) -> bool {
        self.inner.base.is_visible()
    }

    fn show(&mut self) {
        self.inner.base.set_hidden(false);
    }

    fn hide(&mut self) {
        self.inner.base.set_hidden(true);
    }
}

impl<H: Host + 'static> Widget for AccordionContainer<H> {
    fn create_renderer(&self) -> Rc<RefCell<dyn WidgetRenderer>> {
        self.renderer()
    }
}

impl<H: Host> DebugState for AccordionContainer<H> {
    fn debug_sections(&self) -> Vec<DebugSection> {
        let store = self.inner.store.borrow();
        let state = store.state();

        let mode = if state.multi_open {
            "multi-open"
        } else {
            "single-open"
        };
        let summary = DebugSection::new("Accordion")
            .entry("mode", mode)
            .entry("items", state.items.len().to_string())
            .entry("open", state.open_indices().len().to_string());

        let mut items = DebugSection::new("Items");
        for item in &state.items {
            let status = if item.is_open() { "open" } else { "closed" };
            items.push_entry(item.title(), status);
        }

        vec![summary, items]
    }
}
