//! Percent annotation detection and relative-layout resolution.
//!
//! Target values may carry a `%` marker (`"50%"`), meaning the value is
//! relative to a reference dimension instead of absolute. Positions
//! resolve against the free space inside the reference (0% = flush with
//! the origin edge, 100% = far edges aligned); extents resolve as a plain
//! fraction of the reference.

use std::borrow::Cow;

/// True iff a `%` character occurs anywhere in the text.
pub fn has_percent(text: &str) -> bool {
    text.contains('%')
}

/// Remove every `%` character, preserving the order of the remaining
/// characters. Borrows the input when there is nothing to strip.
pub fn strip_percent(text: &str) -> Cow<'_, str> {
    if has_percent(text) {
        Cow::Owned(text.chars().filter(|&c| c != '%').collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Resolve a positional percentage to an absolute coordinate.
///
/// `(reference_content - object_size) * percent / 100`, truncating:
/// at 0% the object sits at the origin edge of the reference content
/// box, at 100% its far edge aligns with the reference's far edge, and
/// 50% centers it. The intermediate product is taken in `i64` and the
/// result saturates to the `i32` range, so out-of-range percents (the
/// lossy parse clamps overflowing text to the `i32` extremes) degrade
/// instead of overflowing.
pub fn resolve_position(reference_content: i32, object_size: i32, percent: i32) -> i32 {
    let free = i64::from(reference_content) - i64::from(object_size);
    saturate(free * i64::from(percent) / 100)
}

/// Resolve a size percentage to an absolute extent:
/// `reference_content * percent / 100`, truncating. Saturates like
/// [`resolve_position`].
pub fn resolve_extent(reference_content: i32, percent: i32) -> i32 {
    saturate(i64::from(reference_content) * i64::from(percent) / 100)
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_percent() {
        assert!(has_percent("50%"));
        assert!(has_percent("%50"));
        assert!(!has_percent("50"));
        assert!(!has_percent(""));
    }

    #[test]
    fn test_strip_percent() {
        assert_eq!(strip_percent("50%"), "50");
        assert_eq!(strip_percent("%5%0%"), "50");
        assert_eq!(strip_percent("-25%"), "-25");
        assert!(matches!(strip_percent("50"), Cow::Borrowed("50")));
    }

    #[test]
    fn test_resolve_position() {
        // Parent content 100, object 20: 50% centers the object.
        assert_eq!(resolve_position(100, 20, 50), 40);
        assert_eq!(resolve_position(100, 20, 0), 0);
        assert_eq!(resolve_position(100, 20, 100), 80);
        // Truncating division.
        assert_eq!(resolve_position(100, 15, 33), 28);
    }

    #[test]
    fn test_resolve_extent() {
        assert_eq!(resolve_extent(200, 25), 50);
        assert_eq!(resolve_extent(200, 0), 0);
        assert_eq!(resolve_extent(200, 100), 200);
        assert_eq!(resolve_extent(99, 50), 49);
    }

    #[test]
    fn test_resolve_saturates_on_extreme_percent() {
        // A percent clamped to the i32 extremes must not overflow the
        // multiply; the widened math truncates and the result saturates.
        assert_eq!(resolve_position(100, 20, i32::MAX), 1_717_986_917);
        assert_eq!(resolve_position(100, 20, i32::MIN), -1_717_986_918);
        assert_eq!(resolve_extent(i32::MAX, i32::MAX), i32::MAX);
        assert_eq!(resolve_extent(200, i32::MIN), i32::MIN);
        assert_eq!(resolve_extent(i32::MIN, 200), i32::MIN);
        // Negative free space flips the sign.
        assert_eq!(resolve_position(20, 100, i32::MAX), -1_717_986_917);
    }
}
