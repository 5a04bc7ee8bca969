//! Side channel for guarded operations that hit a near-zero divisor.
//!
//! Debug builds (or the `diagnostics` feature) report through `log::error!`,
//! otherwise the hook compiles to nothing. Callers never see a different
//! return value either way.

#[cfg(any(debug_assertions, feature = "diagnostics"))]
#[inline]
pub(crate) fn near_zero_divisor(op: &'static str, message: &'static str) {
  log::error!(target: "vector_math", "{}: {}", op, message);
}

#[cfg(not(any(debug_assertions, feature = "diagnostics")))]
#[inline(always)]
pub(crate) fn near_zero_divisor(_op: &'static str, _message: &'static str) {}

/// Whether the logging variant of the hook was compiled in.
pub const fn enabled() -> bool {
  cfg!(any(debug_assertions, feature = "diagnostics"))
}
