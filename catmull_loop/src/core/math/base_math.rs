/// Returns `true` if `degrees` is an exact multiple of 90 (a cardinal direction).
///
/// # Examples
///
/// ```
/// # use catmull_loop::core::math::*;
/// assert!(is_cardinal_angle(0));
/// assert!(is_cardinal_angle(270));
/// assert!(is_cardinal_angle(450));
/// assert!(!is_cardinal_angle(91));
/// ```
#[inline]
pub fn is_cardinal_angle(degrees: u32) -> bool {
    degrees % 90 == 0
}

/// Wrap `index` into `[0, len)` treating a sequence of `len` items as a ring.
///
/// # Examples
///
/// ```
/// # use catmull_loop::core::math::*;
/// assert_eq!(wrapping_index(3, 12), 3);
/// assert_eq!(wrapping_index(12, 12), 0);
/// assert_eq!(wrapping_index(14, 12), 2);
/// ```
#[inline]
pub fn wrapping_index(index: usize, len: usize) -> usize {
    debug_assert!(len > 0, "cannot wrap index into an empty ring");
    index % len
}
