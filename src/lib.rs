//! actionbar - A responsive action bar for terminal user interfaces
//!
//! This library decides which actions of a toolbar fit inline and which are
//! rolled into a trailing "more actions" group, and ships a Ratatui
//! component that renders the result.
//!
//! # Modules
//!
//! * [`overflow`] - Width registry, partition, rollup and measurement state machine
//! * [`menu`] - Action and group descriptors
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging backend with an in-memory view and optional file output
pub mod logger;

/// Action and group descriptors
pub mod menu;

/// Responsive overflow measurement
pub mod overflow;

/// Terminal user interface components and rendering
pub mod ui;

pub use menu::{ActionSet, Item, MenuAction, MenuGroup};
pub use overflow::{OverflowMeasurer, Partition};
