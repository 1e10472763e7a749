//! Conversation state machine
//!
//! Elm-style core: [`transition`] is pure and returns [`Effect`]s for the
//! runtime to execute. Repository results come back in as [`Event`]s.

pub mod effect;
pub mod event;
pub mod form;
mod render;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::{ContactField, Effect, Lookup, Submission};
pub use event::{Event, LookupOutcome};
pub use form::FormData;
pub use state::{BotContext, BotState, Session, UserId};
pub use transition::{transition, TransitionError, TransitionResult};
