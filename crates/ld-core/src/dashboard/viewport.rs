use std::num::NonZeroU8;

/// Width ladder, widest first, evaluated top-down with strict `>`.
/// Boundary widths route to the lower bucket.
const WIDTH_BUCKETS: [(u32, usize); 4] = [(1900, 10), (1500, 8), (880, 6), (550, 4)];

/// Item count below the narrowest threshold.
const NARROW_ITEM_COUNT: usize = 2;

/// How many links a section shows for the given viewport width.
///
/// Evaluated once per layout, not reactively on every resize.
pub fn base_item_count(viewport_width: u32) -> usize {
    WIDTH_BUCKETS
        .iter()
        .find(|(min_width, _)| viewport_width > *min_width)
        .map(|(_, count)| *count)
        .unwrap_or(NARROW_ITEM_COUNT)
}

/// Effective item count: an explicit user-configured column count overrides
/// the viewport ladder with two rows per column.
pub fn effective_item_count(viewport_width: u32, columns: Option<NonZeroU8>) -> usize {
    match columns {
        Some(columns) => usize::from(columns.get()) * 2,
        None => base_item_count(viewport_width),
    }
}
