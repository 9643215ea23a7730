//! Navigable selection controller
//!
//! Tracks a single logical selection cursor across three ordered groups
//! (header actions, suggestion items, footer actions) and answers navigation
//! intents: first/last, next/previous with cross-group wraparound, execute,
//! and key-event dispatch.

mod config;
mod control_events;
mod control_state;
mod group;

pub use config::ControlConfig;
pub use control_state::SuggestionsControl;
pub use group::Group;
