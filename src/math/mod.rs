mod diagnostics;
pub use diagnostics::enabled as diagnostics_enabled;
mod lin_alg;
pub use lin_alg::*;
mod physics;
pub use physics::*;
mod utils;
pub use utils::*;

#[macro_export]
macro_rules! vec2f {
  ($x:expr, $y:expr) => {
    $crate::math::Vec2::new($x, $y)
  };
}

#[macro_export]
macro_rules! vec3f {
  ($x:expr, $y:expr, $z:expr) => {
    $crate::math::Vec3::new($x, $y, $z)
  };
}
