//! Header cache, minimum size and vertical layout for an accordion

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use accordion_core::{
    Button, CanvasObject, Color, Host, Position, SharedObject, Size, WidgetRenderer,
};

use crate::container::{AccordionContainer, ContainerInner};
use crate::item::AccordionItem;

/// Renders an [`AccordionContainer`] as a column of header buttons, each
/// followed by its detail pane while open
///
/// The renderer keeps one header per section. Headers are created on demand
/// and never dropped: when sections are removed the surplus headers are
/// hidden and reused if the accordion grows again. Each refresh rebinds
/// every header's tap handler to its current index.
pub struct AccordionRenderer<H: Host> {
    container: Weak<ContainerInner<H>>,
    headers: Vec<Rc<RefCell<H::Button>>>,
}

impl<H: Host + 'static> AccordionRenderer<H> {
    pub(crate) fn new(container: Weak<ContainerInner<H>>) -> Self {
        let mut renderer = Self {
            container,
            headers: Vec::new(),
        };
        renderer.update_objects();
        renderer
    }

    fn container(&self) -> Option<AccordionContainer<H>> {
        self.container.upgrade().map(AccordionContainer::from_inner)
    }

    /// Re-sync headers and lay out at the container's current size
    ///
    /// Returns the container so the caller can request a redraw after
    /// releasing its borrow of this renderer.
    pub(crate) fn sync(&mut self) -> Option<AccordionContainer<H>> {
        self.update_objects();
        let container = self.container()?;
        self.layout(container.size());
        Some(container)
    }

    /// Every cached header, including hidden surplus ones
    pub fn headers(&self) -> &[Rc<RefCell<H::Button>>] {
        &self.headers
    }

    /// Sync headers and detail visibility with the container's sections
    pub fn update_objects(&mut self) {
        let Some(container) = self.container() else {
            return;
        };
        let items = container.items();
        let theme = container.host().theme();
        let cached = self.headers.len();

        for (index, item) in items.iter().enumerate() {
            let header = match self.headers.get(index) {
                Some(header) => Rc::clone(header),
                None => {
                    let header = Rc::new(RefCell::new(container.host().new_button()));
                    self.headers.push(Rc::clone(&header));
                    header
                }
            };

            let mut header = header.borrow_mut();
            header.show();
            header.set_title(&item.title());
            header.set_on_tap(Some(container.toggle_for_index(index)));

            let detail = item.detail();
            if item.is_open() {
                header.set_icon(Some(theme.collapse_icon()));
                detail.borrow_mut().show();
            } else {
                header.set_icon(Some(theme.expand_icon()));
                detail.borrow_mut().hide();
            }
            header.refresh();
        }

        for header in self.headers.iter().skip(items.len()) {
            header.borrow_mut().hide();
        }

        if self.headers.len() > cached {
            tracing::debug!(
                from = cached,
                to = self.headers.len(),
                "grew accordion header cache"
            );
        }
        tracing::trace!(
            items = items.len(),
            headers = self.headers.len(),
            "synced accordion headers"
        );
    }
}

impl<H: Host + 'static> WidgetRenderer for AccordionRenderer<H> {
    /// Widest header or open detail, by the stacked heights of headers and
    /// open details with padding between sections and before each open
    /// detail
    fn min_size(&self) -> Size {
        let Some(container) = self.container() else {
            return Size::default();
        };
        let padding = container.host().theme().padding();

        let mut width: u16 = 0;
        let mut height: u16 = 0;
        for (index, item) in container.items().iter().enumerate() {
            if index != 0 {
                height = height.saturating_add(padding);
            }
            if let Some(header) = self.headers.get(index) {
                let min = header.borrow().min_size();
                width = width.max(min.width);
                height = height.saturating_add(min.height);
            }
            if item.is_open() {
                let min = item.detail().borrow().min_size();
                width = width.max(min.width);
                height = height.saturating_add(padding).saturating_add(min.height);
            }
        }
        Size::new(width, height)
    }

    fn layout(&mut self, size: Size) {
        let Some(container) = self.container() else {
            return;
        };
        let padding = container.host().theme().padding();

        let mut y: u16 = 0;
        for (index, item) in container.items().iter().enumerate() {
            if index != 0 {
                y = y.saturating_add(padding);
            }
            if let Some(header) = self.headers.get(index) {
                let mut header = header.borrow_mut();
                header.move_to(Position::new(0, y));
                let height = header.min_size().height;
                header.resize(Size::new(size.width, height));
                y = y.saturating_add(height);
            }
            if item.is_open() {
                y = y.saturating_add(padding);
                let detail = item.detail();
                let mut pane = detail.borrow_mut();
                pane.move_to(Position::new(0, y));
                let height = pane.min_size().height;
                pane.resize(Size::new(size.width, height));
                y = y.saturating_add(height);
            }
        }
    }

    /// Active headers in order, then every detail pane in order
    ///
    /// Details are listed whether open or not; closed ones are hidden.
    /// Surplus cached headers are left out.
    fn objects(&self) -> Vec<SharedObject> {
        let Some(container) = self.container() else {
            return Vec::new();
        };
        let items = container.items();

        let mut objects: Vec<SharedObject> = Vec::with_capacity(items.len() * 2);
        for header in self.headers.iter().take(items.len()) {
            objects.push(header.clone());
        }
        objects.extend(items.iter().map(AccordionItem::detail));
        objects
    }

    fn background_color(&self) -> Color {
        match self.container() {
            Some(container) => container.host().theme().background_color(),
            None => Color::Reset,
        }
    }

    fn refresh(&mut self) {
        if let Some(container) = self.sync() {
            container.host().request_redraw(&container);
        }
    }

    fn destroy(&mut self) {}
}
