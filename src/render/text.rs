/// Cell width of `text`, one cell per `char`.
#[must_use]
pub fn text_width(text: &str) -> i32 {
    i32::try_from(text.chars().count()).unwrap_or(i32::MAX)
}

/// Clips `text` starting at `col` to the column range `[0, width)`.
///
/// Returns the first visible column and the visible slice, or `None` when
/// nothing of the text lands on screen.
#[must_use]
pub fn clip_to_columns(text: &str, col: i32, width: i32) -> Option<(i32, String)> {
    let skip = if col < 0 { (-col) as usize } else { 0 };
    let start = col.max(0);
    if start >= width {
        return None;
    }

    let visible: String = text
        .chars()
        .skip(skip)
        .take((width - start) as usize)
        .collect();
    if visible.is_empty() {
        return None;
    }
    Some((start, visible))
}

/// Truncates or right-pads `text` with spaces to exactly `width` cells.
#[must_use]
pub fn truncate_or_pad(text: &str, width: usize) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat_n(' ', width - len));
    fitted
}
