//! A single titled section of an accordion

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use accordion_core::SharedObject;

/// One section of an accordion: a title, a detail pane and an open flag
///
/// `AccordionItem` is a handle. Clones refer to the same section and
/// equality is identity, so two items with the same title and detail are
/// still different sections.
#[derive(Clone)]
pub struct AccordionItem {
    inner: Rc<ItemInner>,
}

struct ItemInner {
    title: RefCell<String>,
    detail: SharedObject,
    open: Cell<bool>,
}

impl AccordionItem {
    /// Create a closed section
    pub fn new(title: impl Into<String>, detail: SharedObject) -> Self {
        Self {
            inner: Rc::new(ItemInner {
                title: RefCell::new(title.into()),
                detail,
                open: Cell::new(false),
            }),
        }
    }

    pub fn title(&self) -> String {
        self.inner.title.borrow().clone()
    }

    /// Change the title. Takes effect on the container's next refresh.
    pub fn set_title(&self, title: impl Into<String>) {
        *self.inner.title.borrow_mut() = title.into();
    }

    /// The detail pane shown while the section is open
    pub fn detail(&self) -> SharedObject {
        Rc::clone(&self.inner.detail)
    }

    pub fn is_open(&self) -> bool {
        self.inner.open.get()
    }

    /// Set the open flag directly.
    ///
    /// This bypasses the container, so single-open mode is not enforced and
    /// nothing is refreshed. Prefer [`AccordionContainer::open`] and
    /// [`AccordionContainer::close`].
    ///
    /// [`AccordionContainer::open`]: crate::AccordionContainer::open
    /// [`AccordionContainer::close`]: crate::AccordionContainer::close
    pub fn set_open(&self, open: bool) {
        self.inner.open.set(open);
    }

    /// Whether `self` and `other` are the same section
    pub fn ptr_eq(&self, other: &AccordionItem) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for AccordionItem {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for AccordionItem {}

impl fmt::Debug for AccordionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionItem")
            .field("title", &*self.inner.title.borrow())
            .field("open", &self.inner.open.get())
            .finish_non_exhaustive()
    }
}
