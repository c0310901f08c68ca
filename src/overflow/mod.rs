//! Responsive overflow measurement for a row of actions.
//!
//! This module decides which actions of a toolbar stay inline and which are
//! rolled into a trailing group when the container is too narrow.
//!
//! # Module Components
//!
//! - [`widths`] - Registry of widths reported by mounted items
//! - [`partition`] - Greedy inline / rolled-up split
//! - [`rollup`] - Final group list and dropdown toggle state
//! - [`debounce`] - Trailing-edge debouncer for resize events
//! - [`measurer`] - Measurement state machine tying the above together

pub mod debounce;
pub mod measurer;
pub mod partition;
pub mod rollup;
pub mod widths;

pub use debounce::Debouncer;
pub use measurer::{MeasureOptions, MeasurePass, MeasurePhase, OverflowMeasurer};
pub use partition::{last_group_index, partition_items, MeasureError, Partition};
pub use rollup::{merge_groups, rolled_up_actions, GroupKind, GroupMenuState, RenderedGroup};
pub use widths::WidthRegistry;
