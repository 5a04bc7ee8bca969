/// Tolerance used for scalar equality, zero-length checks and division guards.
pub const EPSILON: f32 = 1e-6;

/// True when `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn float_equal(a: f32, b: f32) -> bool {
  (a - b).abs() < EPSILON
}

/// Clamps `value` into `[min, max]`.
///
/// The lower bound is checked first, so with `min > max` the result is
/// `min` for values below `min` and `max` for everything else. "`max` wins"
/// therefore only holds for values at or above `min`.
#[inline]
pub fn float_clamp(value: f32, min: f32, max: f32) -> f32 {
  if value < min { return min; }
  if value > max { return max; }
  value
}

/// Unclamped linear interpolation, `t` outside `[0, 1]` extrapolates.
#[inline]
pub fn float_lerp(a: f32, b: f32, t: f32) -> f32 {
  a + t * (b - a)
}
