//! Small 2D vector math library.
//!
//! [`Vec2`](math::Vec2) carries the whole algebra: arithmetic, normalization,
//! rotation, reflection, projection, interpolation and tolerance-based
//! comparison. Operations that would divide by a near-zero value return the
//! zero vector instead of NaN/Inf and report through the `log` facade in
//! debug builds (or with the `diagnostics` feature).

pub mod math;

pub use math::{Particle, Vec2, Vec3, EPSILON};
