/// Macro used for test assertions, works with any type implementing a `fuzzy_eq` method
/// (scalars through [FuzzyEq](crate::core::traits::FuzzyEq) and
/// [Vector2](crate::core::math::Vector2)).
///
/// # Examples
///
/// ```
/// # use catmull_loop::assert_fuzzy_eq;
/// # use catmull_loop::core::{math::vec2, traits::FuzzyEq};
/// assert_fuzzy_eq!(0.1f64 + 0.2, 0.3);
/// assert_fuzzy_eq!(vec2(1.0f64, 2.0), vec2(1.0 + 1e-9, 2.0));
/// assert_fuzzy_eq!(1.0f64, 1.05, 0.1);
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}
