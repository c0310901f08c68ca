//! Reusable UI components

pub mod action_bar;
pub mod debug_overlay;
pub mod menu_group;
pub mod status_bar;

// Component exports
pub use action_bar::{ActionBar, BarEntry};
pub use debug_overlay::DebugOverlay;
pub use menu_group::MenuGroupPopup;
pub use status_bar::{StatusBar, StatusMessage};
