//! Header and footer action items
//!
//! Header/footer entries are owner-supplied actions flanking the suggestion
//! list (e.g. "Show more results", "Search directory"). An item only takes
//! part in keyboard navigation when it is selectable: it must carry an
//! execute action and its visibility predicate must return true at scan
//! time. Actions run in place when the selection is executed; they typically
//! enqueue an effect on an owner-held channel or shared cell.

use std::fmt;

use ratatui::style::Style;

/// One entry in the header or footer group.
pub struct HeaderFooterItem {
    id: String,
    label: String,
    style: Style,
    visible_when: Box<dyn Fn() -> bool>,
    on_execute: Option<Box<dyn FnMut()>>,
}

impl HeaderFooterItem {
    /// Create an item with no action (not selectable) that is always visible.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            style: Style::default(),
            visible_when: Box::new(|| true),
            on_execute: None,
        }
    }

    /// Attach the execute action, making the item selectable while visible.
    pub fn with_action(mut self, action: impl FnMut() + 'static) -> Self {
        self.on_execute = Some(Box::new(action));
        self
    }

    /// Attach a visibility predicate. The predicate is re-evaluated on every
    /// scan step, never cached, so visibility may change between navigation
    /// calls within the same render cycle.
    pub fn with_visibility(mut self, predicate: impl Fn() -> bool + 'static) -> Self {
        self.visible_when = Box::new(predicate);
        self
    }

    /// Attach a style hint for the owner's renderer.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn is_visible(&self) -> bool {
        (self.visible_when)()
    }

    pub fn has_action(&self) -> bool {
        self.on_execute.is_some()
    }

    /// Whether a navigation scan may stop on this item right now.
    pub fn is_selectable(&self) -> bool {
        self.has_action() && self.is_visible()
    }

    pub(crate) fn action_mut(&mut self) -> Option<&mut (dyn FnMut() + 'static)> {
        self.on_execute.as_deref_mut()
    }
}

impl fmt::Debug for HeaderFooterItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderFooterItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("has_action", &self.has_action())
            .field("visible", &self.is_visible())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod items_tests;
