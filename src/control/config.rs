use crate::items::HeaderFooterItem;

/// Owner-supplied configuration for a [`SuggestionsControl`]: the header and
/// footer action items flanking the suggestion list, the completion callback
/// fired when a selected suggestion is executed, and the optional predicate
/// deciding whether `reset` selects the first item.
///
/// [`SuggestionsControl`]: super::SuggestionsControl
pub struct ControlConfig<T> {
    pub(crate) header_items: Vec<HeaderFooterItem>,
    pub(crate) footer_items: Vec<HeaderFooterItem>,
    pub(crate) on_complete: Option<Box<dyn FnMut(&T)>>,
    pub(crate) select_first_on_reset: Option<Box<dyn Fn() -> bool>>,
}

impl<T> ControlConfig<T> {
    pub fn new() -> Self {
        Self {
            header_items: Vec::new(),
            footer_items: Vec::new(),
            on_complete: None,
            select_first_on_reset: None,
        }
    }

    pub fn header_items(mut self, items: Vec<HeaderFooterItem>) -> Self {
        self.header_items = items;
        self
    }

    pub fn footer_items(mut self, items: Vec<HeaderFooterItem>) -> Self {
        self.footer_items = items;
        self
    }

    /// Callback invoked with the current suggestion when a suggestion
    /// selection is executed (Enter/Tab or an explicit execute call).
    pub fn on_complete(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Predicate consulted by `reset`; when absent, `reset` always selects
    /// the first selectable item.
    pub fn select_first_on_reset(mut self, predicate: impl Fn() -> bool + 'static) -> Self {
        self.select_first_on_reset = Some(Box::new(predicate));
        self
    }
}

impl<T> Default for ControlConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}
