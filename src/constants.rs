//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and default layout values.

// Overflow measurement defaults
/// Spacing between two inline items, applied on both sides of an item
pub const ACTION_SPACING: u16 = 8;
/// Trailing-edge debounce window for resize events, in milliseconds
pub const RESIZE_DEBOUNCE_MS: u64 = 50;
/// Upper bound on measurement passes before the measurer settles anyway
pub const MAX_MEASURE_PASSES: u8 = 4;
/// Title of the synthesized rollup group
pub const DEFAULT_MORE_ACTIONS_TITLE: &str = "More actions";

// Terminal front end
/// Spacing between buttons in the terminal action bar, in columns
pub const TERMINAL_ACTION_SPACING: u16 = 1;
/// Minimum / maximum accepted spacing in the configuration file
pub const ACTION_SPACING_MIN: u16 = 0;
pub const ACTION_SPACING_MAX: u16 = 16;
/// Accepted debounce window range in milliseconds
pub const RESIZE_DEBOUNCE_MIN_MS: u64 = 10;
pub const RESIZE_DEBOUNCE_MAX_MS: u64 = 1000;
/// Horizontal padding inside the bar's border
pub const ACTION_BAR_PADDING: u16 = 1;
/// Maximum number of lines kept by the in-memory logger
pub const LOG_BUFFER_CAPACITY: usize = 500;

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const STATUS_HINT: &str = "h/l: move • Enter: activate • j/k: menu • Esc: close • G: logs • q: quit";
pub const STATUS_INVOKED: &str = "▶ Invoked";
pub const STATUS_DISABLED: &str = "⊘ Action is disabled";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc' or 'G' to close";
pub const ACTION_BAR_TITLE: &str = " Actions ";
