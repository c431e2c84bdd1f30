/// Grid pagination
///
/// The grid shows a fixed number of rows. Its column count is a pure
/// function of the observed container width, so nothing here keeps
/// layout state between renders.

/// Width of one icon card in logical pixels
pub const ITEM_WIDTH: f32 = 130.0;
/// Gap between cards in logical pixels
pub const GAP: f32 = 16.0;
/// Rows shown on every page
pub const ROWS_PER_PAGE: usize = 6;

/// How many cards fit in a container, never fewer than one
pub fn compute_columns(container_width: f32, item_width: f32, gap: f32) -> usize {
    let columns = ((container_width + gap) / (item_width + gap)).floor();

    if columns.is_finite() && columns >= 1.0 {
        columns as usize
    } else {
        1
    }
}

pub fn page_size(columns: usize) -> usize {
    columns * ROWS_PER_PAGE
}

/// Number of pages needed for `len` items, at least one
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Slice out a one-based page.
///
/// Pages past the end come back empty or short. Callers keep `page`
/// within `1..=total_pages`; it is not clamped here.
pub fn paginate<T>(list: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(list.len());
    let end = start.saturating_add(page_size).min(list.len());

    &list[start..end]
}
