//! Measurement state machine driving the partition.
//!
//! The renderer feeds the measurer three kinds of events:
//!
//! 1. width reports from freshly mounted items ([`OverflowMeasurer::register_width`]),
//! 2. layout ticks carrying the container width after each draw
//!    ([`OverflowMeasurer::layout_tick`]),
//! 3. debounced resize notifications ([`OverflowMeasurer::on_resize`]).
//!
//! Measurement runs through `Uninitialized → Measuring(First) →
//! Measuring(Second) → Settled`. The measurer settles once two
//! consecutive container samples agree, or after `max_passes` passes.

use super::partition::{partition_items, MeasureError, Partition};
use super::rollup::{merge_groups, RenderedGroup};
use super::widths::WidthRegistry;
use crate::constants::{ACTION_SPACING, MAX_MEASURE_PASSES};
use crate::menu::{ActionSet, Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurePass {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurePhase {
    #[default]
    Uninitialized,
    Measuring(MeasurePass),
    Settled,
}

/// Tunables for [`OverflowMeasurer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureOptions {
    /// Space added on each side of an inline item
    pub spacing: u16,
    /// Passes after which the measurer settles even if samples disagree
    pub max_passes: u8,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            spacing: ACTION_SPACING,
            max_passes: MAX_MEASURE_PASSES,
        }
    }
}

/// Decides which items of an [`ActionSet`] fit inline.
#[derive(Debug, Clone)]
pub struct OverflowMeasurer {
    options: MeasureOptions,
    set: ActionSet,
    items: Vec<Item>,
    widths: WidthRegistry,
    available_width: u16,
    previous_sample: Option<u16>,
    phase: MeasurePhase,
    passes: u8,
    measured_len: usize,
    stalled: bool,
    partition: Partition,
}

impl OverflowMeasurer {
    pub fn new(set: ActionSet, options: MeasureOptions) -> Self {
        let items = set.items();
        Self {
            options,
            set,
            items,
            widths: WidthRegistry::new(),
            available_width: 0,
            previous_sample: None,
            phase: MeasurePhase::Uninitialized,
            passes: 0,
            measured_len: 0,
            stalled: false,
            partition: Partition::default(),
        }
    }

    /// Replace the item set.
    ///
    /// A settled measurer whose item count is unchanged keeps its boundary
    /// and re-slices the new items. Anything else restarts measurement;
    /// recorded widths are dropped when they no longer line up with the
    /// item count. Returns whether the partition changed.
    pub fn set_items(&mut self, set: ActionSet) -> bool {
        let new_len = set.len();
        self.items = set.items();
        self.set = set;

        if self.phase == MeasurePhase::Settled && new_len == self.measured_len {
            let next = Partition::reslice(&self.items, self.partition.showable.len());
            log::debug!("Re-sliced {} items at boundary {}", new_len, next.showable.len());
            return self.replace_partition(next);
        }

        if self.widths.len() != new_len {
            self.widths.clear();
        }
        self.restart();
        false
    }

    /// Record the width of the next mounted item
    pub fn register_width(&mut self, width: u16) {
        self.widths.record(width);
        self.stalled = false;
    }

    /// Item indices whose width has not been reported yet
    pub fn pending_width_reports(&self) -> std::ops::Range<usize> {
        self.widths.pending(self.items.len())
    }

    /// Feed the container width observed after a draw.
    ///
    /// Returns whether the partition changed. Ticks are ignored once
    /// settled; width changes then arrive through [`Self::on_resize`].
    /// A skipped measurement keeps the previous partition and stalls the
    /// measurer until new widths, items or a resize arrive.
    pub fn layout_tick(&mut self, available_width: u16) -> bool {
        if self.phase == MeasurePhase::Settled {
            return false;
        }

        let agrees = self.previous_sample == Some(available_width);
        self.previous_sample = Some(available_width);
        self.available_width = available_width;

        if self.items.is_empty() {
            log::debug!("No items to measure, settling on an empty partition");
            self.measured_len = 0;
            self.stalled = false;
            self.phase = MeasurePhase::Settled;
            return self.replace_partition(Partition::default());
        }

        match self.phase {
            MeasurePhase::Measuring(MeasurePass::Second) if agrees => {
                log::debug!("Measurement settled after {} passes at width {}", self.passes, available_width);
                self.phase = MeasurePhase::Settled;
                false
            }
            phase => match self.measure() {
                Ok(changed) => {
                    self.stalled = false;
                    self.passes = self.passes.saturating_add(1);
                    self.phase = match phase {
                        MeasurePhase::Uninitialized => MeasurePhase::Measuring(MeasurePass::First),
                        _ if self.passes >= self.options.max_passes => {
                            log::warn!(
                                "Container width kept changing, settling after {} passes",
                                self.passes
                            );
                            MeasurePhase::Settled
                        }
                        _ => MeasurePhase::Measuring(MeasurePass::Second),
                    };
                    changed
                }
                Err(e) => {
                    if !self.stalled {
                        log::debug!("Measurement skipped: {}", e);
                    }
                    self.stalled = true;
                    false
                }
            },
        }
    }

    /// Apply a debounced resize.
    ///
    /// When settled on the current items the partition is recomputed from
    /// the memoized widths; otherwise measurement starts over.
    pub fn on_resize(&mut self, available_width: u16) -> bool {
        if self.phase == MeasurePhase::Settled && self.items.len() == self.measured_len {
            self.available_width = available_width;
            self.previous_sample = Some(available_width);
            return match self.measure() {
                Ok(changed) => changed,
                Err(e) => {
                    log::debug!("Resize measurement skipped: {}", e);
                    false
                }
            };
        }

        self.restart();
        self.layout_tick(available_width)
    }

    /// Merged group list for the current partition
    pub fn rendered_groups(&self, default_title: &str) -> Vec<RenderedGroup> {
        merge_groups(&self.set.groups, &self.partition, default_title)
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn phase(&self) -> MeasurePhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == MeasurePhase::Settled
    }

    /// Whether the last tick was skipped and nothing has changed since
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    /// Whether another layout tick can move the measurement forward
    pub fn needs_layout_pass(&self) -> bool {
        !self.is_settled() && !self.stalled
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn action_set(&self) -> &ActionSet {
        &self.set
    }

    pub fn widths(&self) -> &WidthRegistry {
        &self.widths
    }

    pub fn available_width(&self) -> u16 {
        self.available_width
    }

    pub fn options(&self) -> MeasureOptions {
        self.options
    }

    fn restart(&mut self) {
        self.phase = MeasurePhase::Uninitialized;
        self.passes = 0;
        self.previous_sample = None;
        self.stalled = false;
    }

    fn measure(&mut self) -> Result<bool, MeasureError> {
        if self.items.is_empty() {
            self.measured_len = 0;
            return Ok(self.replace_partition(Partition::default()));
        }

        let next = partition_items(
            &self.items,
            self.widths.as_slice(),
            self.available_width,
            self.options.spacing,
        )?;
        self.measured_len = self.items.len();
        log::debug!(
            "Measured {} items at width {}: {} inline, {} rolled up",
            self.items.len(),
            self.available_width,
            next.showable.len(),
            next.rolled_up.len()
        );
        Ok(self.replace_partition(next))
    }

    fn replace_partition(&mut self, next: Partition) -> bool {
        if next == self.partition {
            return false;
        }
        self.partition = next;
        true
    }
}
