//! Gesture actions
//!
//! Turns a recognized direction into synthetic keyboard input.

pub mod dispatcher;
pub mod types;

pub use dispatcher::{ActionDispatch, ActionTable, KeyDispatcher, KeySynthesizer, DEFAULT_TAP_DELAY};
pub use types::{KeyTransition, SyntheticInput, VirtualKey};
