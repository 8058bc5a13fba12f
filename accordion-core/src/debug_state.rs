//! Debug state introspection
//!
//! Widgets expose their internal state as titled sections of key/value
//! entries so a host's inspector (or a test) can show what a widget holds
//! without knowing its concrete type.

/// A debug entry (key-value pair)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugEntry {
    pub key: String,
    pub value: String,
}

impl DebugEntry {
    /// Create a new entry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A debug section with a title and entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugSection {
    pub title: String,
    pub entries: Vec<DebugEntry>,
}

impl DebugSection {
    /// Create a new section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Add an entry to the section
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(DebugEntry::new(key, value));
        self
    }

    /// Add an entry (mutable)
    pub fn push_entry(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(DebugEntry::new(key, value));
    }

    /// Look up the value of the first entry with `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }
}

/// Trait for types that can provide debug state information
///
/// # Example
///
/// ```
/// use accordion_core::debug_state::{DebugSection, DebugState};
///
/// struct Panel {
///     title: String,
///     expanded: bool,
/// }
///
/// impl DebugState for Panel {
///     fn debug_sections(&self) -> Vec<DebugSection> {
///         vec![DebugSection::new("Panel")
///             .entry("title", &self.title)
///             .entry("expanded", self.expanded.to_string())]
///     }
/// }
///
/// let panel = Panel { title: "Network".into(), expanded: true };
/// assert_eq!(panel.debug_sections()[0].get("expanded"), Some("true"));
/// ```
pub trait DebugState {
    /// Return state as sections with key-value pairs
    fn debug_sections(&self) -> Vec<DebugSection>;

    /// Render all sections as indented plain text
    fn debug_text(&self) -> String {
        let mut out = String::new();
        for section in self.debug_sections() {
            out.push_str(&section.title);
            out.push('\n');
            for entry in section.entries {
                out.push_str("  ");
                out.push_str(&entry.key);
                out.push_str(": ");
                out.push_str(&entry.value);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PanelState {
        title: String,
        expanded: bool,
    }

    impl DebugState for PanelState {
        fn debug_sections(&self) -> Vec<DebugSection> {
            vec![DebugSection::new("Panel")
                .entry("title", &self.title)
                .entry("expanded", self.expanded.to_string())]
        }
    }

    #[test]
    fn test_debug_state_basic() {
        let state = PanelState {
            title: "Network".to_string(),
            expanded: false,
        };

        let sections = state.debug_sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Panel");
        assert_eq!(sections[0].entries.len(), 2);
        assert_eq!(sections[0].entries[0].key, "title");
        assert_eq!(sections[0].entries[0].value, "Network");
        assert_eq!(sections[0].get("expanded"), Some("false"));
        assert_eq!(sections[0].get("missing"), None);
    }

    #[test]
    fn test_debug_text() {
        let state = PanelState {
            title: "Disk".to_string(),
            expanded: true,
        };

        assert_eq!(state.debug_text(), "Panel\n  title: Disk\n  expanded: true\n");
    }
}
