use crate::control::config::ControlConfig;
use crate::control::group::Group;
use crate::error::SuggestboxError;
use crate::items::HeaderFooterItem;
use crate::store::{SuggestionCollection, SuggestionStore};

/// Selection controller for a suggestions dropdown.
///
/// Owns the injected suggestion collection and the owner configuration, and
/// tracks which of the three groups (header, suggestion, footer) currently
/// holds the selection. At most one group holds a selection at any time:
/// every selection setter clears the other two, including deselecting the
/// collection.
///
/// Header and footer selection live here as `Option<usize>`; suggestion
/// selection lives inside the collection's own cursor.
pub struct SuggestionsControl<T, S = SuggestionStore<T>>
where
    S: SuggestionCollection<T>,
{
    store: S,
    config: ControlConfig<T>,
    selected_header: Option<usize>,
    selected_footer: Option<usize>,
}

impl<T, S> SuggestionsControl<T, S>
where
    S: SuggestionCollection<T>,
{
    /// Create a control over `store` and immediately reset it, selecting the
    /// first selectable item unless the config's `select_first_on_reset`
    /// predicate says otherwise.
    pub fn new(store: S, config: ControlConfig<T>) -> Self {
        let mut control = Self {
            store,
            config,
            selected_header: None,
            selected_footer: None,
        };
        control.reset();
        control
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the collection. After changing the suggestion data,
    /// call [`reset`](Self::reset) to re-derive the selection.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn header_items(&self) -> &[HeaderFooterItem] {
        &self.config.header_items
    }

    pub fn footer_items(&self) -> &[HeaderFooterItem] {
        &self.config.footer_items
    }

    pub fn selected_header_index(&self) -> Option<usize> {
        self.selected_header
    }

    pub fn selected_footer_index(&self) -> Option<usize> {
        self.selected_footer
    }

    /// The suggestion under the collection cursor, if a suggestion is
    /// selected.
    pub fn current_suggestion(&self) -> Option<&T> {
        self.store.current_item()
    }

    pub fn has_suggestion_selected(&self) -> bool {
        self.store.has_suggestion_selected()
    }

    /// Whether any of the three groups currently holds a selection.
    pub fn has_selection(&self) -> bool {
        self.selected_header.is_some()
            || self.store.has_suggestion_selected()
            || self.selected_footer.is_some()
    }

    /// The group currently holding the selection, if any.
    pub fn selected_group(&self) -> Option<Group> {
        if self.selected_header.is_some() {
            Some(Group::Header)
        } else if self.store.has_suggestion_selected() {
            Some(Group::Suggestion)
        } else if self.selected_footer.is_some() {
            Some(Group::Footer)
        } else {
            None
        }
    }

    /// Select the first selectable item: header first, then suggestions,
    /// then footer. No-op when nothing anywhere is selectable.
    pub fn select_first_item(&mut self) {
        if self.select_next_of(Group::Header, None) {
            return;
        }
        if self.select_next_of(Group::Suggestion, None) {
            return;
        }
        self.select_next_of(Group::Footer, None);
    }

    /// Select the last selectable item: footer first, then suggestions,
    /// then header.
    pub fn select_last_item(&mut self) {
        if self.select_prev_of(Group::Footer, None) {
            return;
        }
        if self.select_prev_of(Group::Suggestion, None) {
            return;
        }
        self.select_prev_of(Group::Header, None);
    }

    /// Advance the selection to the next selectable item, starting just
    /// after the current index in `group` and falling through to the next
    /// groups in cyclic order. Once every other group has been scanned
    /// without a stop, the original group is scanned once more from its
    /// start (the wrap-around scan, which may land on the item already
    /// selected). Bounded to one full cycle, so it terminates even when a
    /// single selectable item exists anywhere, or none at all.
    pub fn select_next_item(&mut self, group: Group) {
        let original = group;
        let mut group = group;
        loop {
            let current = if group == original {
                self.current_index_for(group)
            } else {
                None
            };
            if self.select_next_of(group, current) {
                return;
            }
            group = group.next();
            if group == original {
                self.select_next_of(group, None);
                return;
            }
        }
    }

    /// Mirror of [`select_next_item`](Self::select_next_item), walking the
    /// reverse cycle and scanning groups from their end.
    pub fn select_previous_item(&mut self, group: Group) {
        let original = group;
        let mut group = group;
        loop {
            let current = if group == original {
                self.current_index_for(group)
            } else {
                None
            };
            if self.select_prev_of(group, current) {
                return;
            }
            group = group.previous();
            if group == original {
                self.select_prev_of(group, None);
                return;
            }
        }
    }

    /// Run the action behind the current selection: a selected header item's
    /// action, the `on_complete` callback for a selected suggestion, or a
    /// selected footer item's action. No-op when nothing is selected or the
    /// selected item carries no action.
    pub fn execute_selected_action(&mut self) {
        if let Some(index) = self.selected_header {
            if let Some(action) = self
                .config
                .header_items
                .get_mut(index)
                .and_then(|item| item.action_mut())
            {
                log::debug!("executing header action at index {index}");
                action();
            }
        } else if self.store.has_suggestion_selected() {
            if let Some(callback) = self.config.on_complete.as_mut() {
                if let Some(item) = self.store.current_item() {
                    log::debug!("completing selected suggestion");
                    callback(item);
                }
            }
        } else if let Some(index) = self.selected_footer {
            if let Some(action) = self
                .config
                .footer_items
                .get_mut(index)
                .and_then(|item| item.action_mut())
            {
                log::debug!("executing footer action at index {index}");
                action();
            }
        }
    }

    /// Remove and return the suggestion at `index`, or the one under the
    /// collection cursor when `index` is `None`.
    pub fn remove_suggestion(&mut self, index: Option<usize>) -> Result<T, SuggestboxError> {
        let index = match index {
            Some(index) => index,
            None => self
                .store
                .current_index()
                .ok_or(SuggestboxError::NoSuggestionSelected)?,
        };
        self.store.remove_at(index)
    }

    /// Clear all selection state and select the first selectable item,
    /// unless the config's `select_first_on_reset` predicate returns false.
    /// Owners call this on mount and whenever the suggestion data changes.
    pub fn reset(&mut self) {
        self.clear_selection();

        let select_first = self
            .config
            .select_first_on_reset
            .as_ref()
            .is_none_or(|predicate| predicate());
        if select_first {
            self.select_first_item();
        }
    }

    /// Deselect all three groups, including the collection cursor. This is
    /// the teardown path when the dropdown goes away.
    pub fn clear_selection(&mut self) {
        self.selected_header = None;
        self.selected_footer = None;
        self.store.deselect_all();
    }

    /// Replace the owner configuration and reset the selection against the
    /// new items.
    pub fn set_config(&mut self, config: ControlConfig<T>) {
        self.config = config;
        self.reset();
    }

    fn current_index_for(&self, group: Group) -> Option<usize> {
        match group {
            Group::Header => self.selected_header,
            Group::Suggestion => self.store.current_index(),
            Group::Footer => self.selected_footer,
        }
    }

    /// Scan `group` forward for a selectable item strictly after `current`
    /// (from the group's start when `current` is `None`). Returns whether
    /// the selection moved.
    fn select_next_of(&mut self, group: Group, current: Option<usize>) -> bool {
        match group {
            Group::Suggestion => {
                let next = current.map_or(0, |index| index + 1);
                if next < self.store.len() {
                    self.set_suggestion_selected(next);
                    true
                } else {
                    false
                }
            }
            Group::Header => {
                let start = current.map_or(0, |index| index + 1);
                match next_selectable(&self.config.header_items, start) {
                    Some(index) => {
                        self.set_header_selected(index);
                        true
                    }
                    None => false,
                }
            }
            Group::Footer => {
                let start = current.map_or(0, |index| index + 1);
                match next_selectable(&self.config.footer_items, start) {
                    Some(index) => {
                        self.set_footer_selected(index);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Scan `group` backward for a selectable item strictly before `current`
    /// (from the group's end when `current` is `None`).
    fn select_prev_of(&mut self, group: Group, current: Option<usize>) -> bool {
        match group {
            Group::Suggestion => {
                let end = current.unwrap_or(self.store.len());
                if end > 0 {
                    self.set_suggestion_selected(end - 1);
                    true
                } else {
                    false
                }
            }
            Group::Header => {
                let end = current.unwrap_or(self.config.header_items.len());
                match prev_selectable(&self.config.header_items, end) {
                    Some(index) => {
                        self.set_header_selected(index);
                        true
                    }
                    None => false,
                }
            }
            Group::Footer => {
                let end = current.unwrap_or(self.config.footer_items.len());
                match prev_selectable(&self.config.footer_items, end) {
                    Some(index) => {
                        self.set_footer_selected(index);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    fn set_header_selected(&mut self, index: usize) {
        self.selected_header = Some(index);
        self.selected_footer = None;
        self.store.deselect_all();
    }

    fn set_footer_selected(&mut self, index: usize) {
        self.selected_header = None;
        self.selected_footer = Some(index);
        self.store.deselect_all();
    }

    fn set_suggestion_selected(&mut self, index: usize) {
        self.selected_header = None;
        self.selected_footer = None;
        self.store.set_selected(index);
    }
}

/// First selectable item at or after `start`. Visibility predicates are
/// evaluated per step, so items may appear or disappear between calls.
fn next_selectable(items: &[HeaderFooterItem], start: usize) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, item)| item.is_selectable())
        .map(|(index, _)| index)
}

/// Last selectable item strictly before `end`.
fn prev_selectable(items: &[HeaderFooterItem], end: usize) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .take(end)
        .rev()
        .find(|(_, item)| item.is_selectable())
        .map(|(index, _)| index)
}

#[cfg(test)]
#[path = "control_state_tests.rs"]
mod control_state_tests;
