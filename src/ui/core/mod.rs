//! Core UI functionality for the action bar.
//!
//! # Module Components
//!
//! - [`actions`] - Messages exchanged between the event loop and components
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal input polling
//!
//! Components implement [`Component`]: key events are turned into an
//! [`Action`], which is then fed back through [`Component::update`] so a
//! component can change its state and hand a follow-up action to its parent.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
