//! Accordion actions and the reducer that applies them

use accordion_core::Action;

use crate::AccordionItem;

/// Every mutation an [`AccordionContainer`](crate::AccordionContainer) supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccordionAction {
    /// Add a section at the end
    Append(AccordionItem),
    /// Remove the first occurrence of a section
    Remove(AccordionItem),
    /// Remove the section at an index
    RemoveIndex(usize),
    /// Expand a section; in single-open mode every other section collapses
    Open(usize),
    /// Expand every section (multi-open mode only)
    OpenAll,
    /// Collapse a section
    Close(usize),
    /// Collapse every section
    CloseAll,
    /// Collapse an open section, otherwise expand it
    Toggle(usize),
    /// Switch between single-open and multi-open mode
    SetMultiOpen(bool),
}

impl Action for AccordionAction {
    fn name(&self) -> &'static str {
        match self {
            AccordionAction::Append(_) => "Append",
            AccordionAction::Remove(_) => "Remove",
            AccordionAction::RemoveIndex(_) => "RemoveIndex",
            AccordionAction::Open(_) => "Open",
            AccordionAction::OpenAll => "OpenAll",
            AccordionAction::Close(_) => "Close",
            AccordionAction::CloseAll => "CloseAll",
            AccordionAction::Toggle(_) => "Toggle",
            AccordionAction::SetMultiOpen(_) => "SetMultiOpen",
        }
    }
}

/// Sections in display order plus the open mode
#[derive(Debug, Clone, Default)]
pub struct AccordionState {
    pub items: Vec<AccordionItem>,
    pub multi_open: bool,
}

impl AccordionState {
    pub fn new(items: Vec<AccordionItem>) -> Self {
        Self {
            items,
            multi_open: false,
        }
    }

    /// Indices of the sections currently open
    pub fn open_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_open())
            .map(|(i, _)| i)
            .collect()
    }

    fn open(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        for (i, item) in self.items.iter().enumerate() {
            if i == index {
                item.set_open(true);
            } else if !self.multi_open {
                item.set_open(false);
            }
        }
        true
    }

    fn close(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) => {
                item.set_open(false);
                true
            }
            None => false,
        }
    }
}

/// Apply an action to the state.
///
/// Returns `true` when the action applied and the widget must refresh.
/// Out-of-range indices, absent items, `OpenAll` in single-open mode and
/// mode switches leave nothing to redraw and return `false`.
pub fn reduce(state: &mut AccordionState, action: AccordionAction) -> bool {
    match action {
        AccordionAction::Append(item) => {
            state.items.push(item);
            true
        }
        AccordionAction::Remove(item) => {
            match state.items.iter().position(|candidate| candidate.ptr_eq(&item)) {
                Some(index) => {
                    state.items.remove(index);
                    true
                }
                None => false,
            }
        }
        AccordionAction::RemoveIndex(index) => {
            if index < state.items.len() {
                state.items.remove(index);
                true
            } else {
                false
            }
        }
        AccordionAction::Open(index) => state.open(index),
        AccordionAction::OpenAll => {
            if !state.multi_open {
                return false;
            }
            for item in &state.items {
                item.set_open(true);
            }
            true
        }
        AccordionAction::Close(index) => state.close(index),
        AccordionAction::CloseAll => {
            for item in &state.items {
                item.set_open(false);
            }
            true
        }
        AccordionAction::Toggle(index) => match state.items.get(index) {
            Some(item) if item.is_open() => state.close(index),
            Some(_) => state.open(index),
            None => false,
        },
        AccordionAction::SetMultiOpen(multi_open) => {
            state.multi_open = multi_open;
            false
        }
    }
}
