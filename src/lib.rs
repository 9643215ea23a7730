//! Selection state for an autocomplete-style suggestions dropdown.
//!
//! A dropdown shows a scrollable list of suggestions, optionally flanked by
//! header and footer action sections. This crate implements the keyboard
//! navigation over those three groups: a single logical selection cursor
//! that arrow keys move across header actions, suggestions, and footer
//! actions with wraparound, skipping items that are hidden or carry no
//! action, plus execute-on-Enter dispatch.
//!
//! The crate holds state only — owners render the dropdown themselves from
//! the selection queries ([`SuggestionsControl::selected_header_index`],
//! the collection cursor, item labels and style hints) and feed key events
//! into [`SuggestionsControl::handle_key_down`].
//!
//! ```
//! use suggestbox::{ControlConfig, HeaderFooterItem, SuggestionStore, SuggestionsControl};
//!
//! let store = SuggestionStore::with_suggestions(vec!["alpha", "beta"]);
//! let config = ControlConfig::new().footer_items(vec![
//!     HeaderFooterItem::new("more", "Show more results").with_action(|| {}),
//! ]);
//! let control = SuggestionsControl::new(store, config);
//!
//! // `new` resets the control: no header actions here, so the first
//! // suggestion takes the selection.
//! assert_eq!(control.current_suggestion(), Some(&"alpha"));
//! ```

pub mod control;
pub mod error;
pub mod items;
pub mod store;


pub use control::{ControlConfig, Group, SuggestionsControl};
pub use error::SuggestboxError;
pub use items::HeaderFooterItem;
pub use store::{SuggestionCollection, SuggestionStore};
