//! Suggestion collection collaborator
//!
//! The control never indexes into the suggestion list directly; it talks to
//! the collection through [`SuggestionCollection`] so owners can substitute
//! their own backing (filtered, virtualized, remote). [`SuggestionStore`] is
//! the plain vector-backed implementation most owners want.

use crate::error::SuggestboxError;

/// Interface the control uses to drive the suggestion list and its cursor.
///
/// The cursor is the collection's own "currently selected suggestion"; the
/// control clears it whenever a header or footer item takes the selection.
pub trait SuggestionCollection<T> {
    /// Number of suggestions currently held.
    fn len(&self) -> usize;

    /// Index of the selected suggestion, if any.
    fn current_index(&self) -> Option<usize>;

    /// Move the cursor to `index`. Out-of-range input is ignored; the
    /// control only calls this with bounds-checked indices.
    fn set_selected(&mut self, index: usize);

    /// Clear the cursor.
    fn deselect_all(&mut self);

    /// The selected suggestion, if any.
    fn current_item(&self) -> Option<&T>;

    /// Remove and return the suggestion at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T, SuggestboxError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn has_suggestion_selected(&self) -> bool {
        self.current_index().is_some()
    }
}

/// Vector-backed suggestion collection.
#[derive(Debug, Clone)]
pub struct SuggestionStore<T> {
    suggestions: Vec<T>,
    selected_index: Option<usize>,
}

impl<T> Default for SuggestionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SuggestionStore<T> {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            selected_index: None,
        }
    }

    pub fn with_suggestions(suggestions: Vec<T>) -> Self {
        Self {
            suggestions,
            selected_index: None,
        }
    }

    pub fn suggestions(&self) -> &[T] {
        &self.suggestions
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.suggestions.get(index)
    }

    pub fn push(&mut self, suggestion: T) {
        self.suggestions.push(suggestion);
    }

    /// Swap in a new suggestion list, clearing the cursor. Owners call the
    /// control's `reset` afterwards to re-derive the selection.
    pub fn replace(&mut self, suggestions: Vec<T>) {
        self.suggestions = suggestions;
        self.selected_index = None;
    }
}

impl<T> SuggestionCollection<T> for SuggestionStore<T> {
    fn len(&self) -> usize {
        self.suggestions.len()
    }

    fn current_index(&self) -> Option<usize> {
        self.selected_index
    }

    fn set_selected(&mut self, index: usize) {
        if index < self.suggestions.len() {
            self.selected_index = Some(index);
        } else {
            log::warn!(
                "ignoring out-of-range suggestion selection {} (length {})",
                index,
                self.suggestions.len()
            );
        }
    }

    fn deselect_all(&mut self) {
        self.selected_index = None;
    }

    fn current_item(&self) -> Option<&T> {
        self.selected_index.and_then(|i| self.suggestions.get(i))
    }

    fn remove_at(&mut self, index: usize) -> Result<T, SuggestboxError> {
        if index >= self.suggestions.len() {
            return Err(SuggestboxError::IndexOutOfRange {
                index,
                len: self.suggestions.len(),
            });
        }

        let removed = self.suggestions.remove(index);

        // Keep the cursor naming the same surviving suggestion.
        self.selected_index = match self.selected_index {
            Some(current) if current == index => None,
            Some(current) if current > index => Some(current - 1),
            other => other,
        };

        Ok(removed)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
