//! Terminal user interface for the action bar
//!
//! - [`core`] - Component trait, actions and event polling
//! - [`components`] - Action bar, dropdowns, status line, log overlay
//! - [`layout`] - Screen and popup geometry
//! - [`app_component`] - Root component
//! - [`renderer`] - Terminal setup and the async event loop

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use renderer::run_app;
