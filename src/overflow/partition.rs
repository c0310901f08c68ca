//! Greedy split of the bar's items into inline and rolled-up sets.

use crate::menu::Item;

/// Reasons a measurement is skipped. The caller keeps its last partition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeasureError {
    #[error("no item widths recorded yet")]
    NoWidths,

    #[error("only {recorded} of {expected} item widths recorded")]
    IncompleteWidths { expected: usize, recorded: usize },

    #[error("container has no width yet")]
    NoAvailableWidth,
}

/// Items rendered inline versus items relocated to the trailing group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub showable: Vec<Item>,
    pub rolled_up: Vec<Item>,
}

impl Partition {
    pub fn is_empty(&self) -> bool {
        self.showable.is_empty() && self.rolled_up.is_empty()
    }

    /// Split `items` at a known boundary without scanning widths.
    ///
    /// The trailing group is excluded from both halves, matching
    /// [`partition_items`].
    pub fn reslice(items: &[Item], showable_len: usize) -> Self {
        let candidates = match last_group_index(items) {
            Some(last) => &items[..last],
            None => items,
        };
        let boundary = showable_len.min(candidates.len());

        Self {
            showable: candidates[..boundary].to_vec(),
            rolled_up: candidates[boundary..].to_vec(),
        }
    }

    /// Whether an item with the same identity was rolled up
    pub fn is_rolled_up(&self, item: &Item) -> bool {
        self.rolled_up.iter().any(|rolled| rolled.same_identity(item))
    }
}

/// Index of the trailing group, which is never rolled up.
///
/// Groups always follow actions, so the trailing group is the last item
/// whenever any group exists.
pub fn last_group_index(items: &[Item]) -> Option<usize> {
    match items.last() {
        Some(Item::Group(_)) => Some(items.len() - 1),
        _ => None,
    }
}

/// Compute the partition for `items` given their recorded widths.
///
/// A single item is always showable. Otherwise items are taken greedily
/// from the left while `width + last_group_width + 2 * spacing` fits in the
/// remaining space; the first item that does not fit zeroes the remaining
/// space so every later item overflows too.
pub fn partition_items(
    items: &[Item],
    widths: &[u16],
    available_width: u16,
    spacing: u16,
) -> Result<Partition, MeasureError> {
    if items.len() == 1 {
        return Ok(Partition {
            showable: items.to_vec(),
            rolled_up: Vec::new(),
        });
    }
    if widths.is_empty() {
        return Err(MeasureError::NoWidths);
    }
    if widths.len() < items.len() {
        return Err(MeasureError::IncompleteWidths {
            expected: items.len(),
            recorded: widths.len(),
        });
    }
    if available_width == 0 {
        return Err(MeasureError::NoAvailableWidth);
    }

    let last_group = last_group_index(items);
    // Without a trailing group nothing is reserved, so a synthesized
    // default rollup may be clipped at the right edge of a tight container.
    let last_group_width = last_group.map_or(0, |index| u32::from(widths[index]));
    let spacing = u32::from(spacing);

    let mut remaining = u32::from(available_width);
    let mut partition = Partition::default();

    for (index, item) in items.iter().enumerate() {
        if Some(index) == last_group {
            continue;
        }

        let width = u32::from(widths[index]);
        if width + last_group_width + 2 * spacing <= remaining {
            remaining -= width + 2 * spacing;
            partition.showable.push(item.clone());
        } else {
            remaining = 0;
            partition.rolled_up.push(item.clone());
        }
    }

    Ok(partition)
}
