//! Width registry filled by rendered items.

/// Widths reported by mounted items, keyed by insertion order.
///
/// Items push their width once after mount. Reporting twice for the same
/// item shifts every later index, so renderers must only report for
/// indices returned by [`WidthRegistry::pending`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidthRegistry {
    widths: Vec<u16>,
}

impl WidthRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the width of the next mounted item
    pub fn record(&mut self, width: u16) {
        self.widths.push(width);
    }

    pub fn get(&self, index: usize) -> Option<u16> {
        self.widths.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.widths
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Indices in `0..item_count` that have not reported yet
    pub fn pending(&self, item_count: usize) -> std::ops::Range<usize> {
        self.widths.len().min(item_count)..item_count
    }

    pub fn clear(&mut self) {
        self.widths.clear();
    }
}
