use crossterm::event::{KeyCode, KeyEvent};

use crate::control::control_state::SuggestionsControl;
use crate::store::SuggestionCollection;

impl<T, S> SuggestionsControl<T, S>
where
    S: SuggestionCollection<T>,
{
    /// Handle a key press, returning true if the key was consumed.
    ///
    /// Down/Up with nothing selected seed the selection (first/last item)
    /// but report the key as not consumed, so the owner can also apply its
    /// default behavior, e.g. moving the text caret. Modifiers are ignored.
    pub fn handle_key_down(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down => match self.selected_group() {
                None => {
                    self.select_first_item();
                    false
                }
                Some(group) => {
                    self.select_next_item(group);
                    true
                }
            },
            KeyCode::Up => match self.selected_group() {
                None => {
                    self.select_last_item();
                    false
                }
                Some(group) => {
                    self.select_previous_item(group);
                    true
                }
            },
            KeyCode::Enter | KeyCode::Tab => {
                if self.has_selection() {
                    self.execute_selected_action();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "control_events_tests.rs"]
mod control_events_tests;
