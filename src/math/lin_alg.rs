use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use super::diagnostics::near_zero_divisor;
use super::utils::*;

/**
 * 2D vector used for both points and directions.
 *
 * Every operation takes `self` by value and returns a new vector. Inputs are
 * expected to be finite: NaN/Inf components are not checked and propagate
 * through the arithmetic as IEEE-754 dictates.
 *
 * The derived `PartialEq` is exact; use [`Vec2::equals`] for the
 * tolerance-based comparison the rest of the library relies on.
 */
#[repr(C)]
#[derive(Debug, Default, PartialEq, Clone, Copy, Pod, Zeroable)]
pub struct Vec2 { pub x: f32, pub y: f32 }
impl Vec2 {
  pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
  pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

  // util fns
  pub const fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }
  pub fn from_array(arr: [f32; 2]) -> Self {
    Self { x: arr[0], y: arr[1] }
  }
  pub fn as_array(&self) -> [f32; 2] {
    [self.x, self.y]
  }
  pub fn x(self) -> f32 { self.x }
  pub fn y(self) -> f32 { self.y }
  pub fn xx(self) -> Vec2 { Vec2::new(self.x, self.x) }
  pub fn yy(self) -> Vec2 { Vec2::new(self.y, self.y) }
  pub fn yx(self) -> Vec2 { Vec2::new(self.y, self.x) }

  // arithmetic
  pub fn scale(self, s: f32) -> Vec2 {
    Vec2::new(self.x * s, self.y * s)
  }
  /// Component-wise (Hadamard) product, not the dot product.
  pub fn multiply(self, rhs: Vec2) -> Vec2 {
    Vec2::new(self.x * rhs.x, self.y * rhs.y)
  }
  pub fn negate(self) -> Vec2 {
    Vec2::new(-self.x, -self.y)
  }
  /// Divides both components by `scalar`.
  ///
  /// If `|scalar| <= EPSILON` nothing is divided: the zero vector is
  /// returned and a near-zero divisor diagnostic is reported.
  pub fn divide(self, scalar: f32) -> Vec2 {
    if scalar.abs() <= EPSILON {
      near_zero_divisor("Vec2::divide", "Division by zero");
      return Vec2::ZERO;
    }
    Vec2::new(self.x / scalar, self.y / scalar)
  }

  // products and norms
  pub fn dot(self, rhs: Vec2) -> f32 {
    self.x * rhs.x + self.y * rhs.y
  }
  /// Scalar 2D cross product. Positive when `rhs` lies counter-clockwise of `self`.
  pub fn cross(self, rhs: Vec2) -> f32 {
    self.x * rhs.y - self.y * rhs.x
  }
  /// Euclidean norm. Computed with `hypot` so large finite components do
  /// not overflow through the squares.
  pub fn length(self) -> f32 {
    self.x.hypot(self.y)
  }
  pub fn length_squared(self) -> f32 {
    self.x * self.x + self.y * self.y
  }
  /// Unit vector in the same direction, or the zero vector (with a
  /// diagnostic) when `length <= EPSILON`.
  pub fn normalize(self) -> Vec2 {
    let len = self.length();
    if len <= EPSILON {
      near_zero_divisor("Vec2::normalize", "Cannot normalize zero-length vector");
      return Vec2::ZERO;
    }
    self.divide(len)
  }
  pub fn distance(self, rhs: Vec2) -> f32 {
    (rhs - self).length()
  }
  pub fn distance_squared(self, rhs: Vec2) -> f32 {
    (rhs - self).length_squared()
  }

  // geometry
  /// Interpolates towards `rhs`. Unlike [`float_lerp`], `t` is clamped to `[0, 1]` first.
  pub fn lerp(self, rhs: Vec2, t: f32) -> Vec2 {
    let t = float_clamp(t, 0.0, 1.0);
    Vec2::new(float_lerp(self.x, rhs.x, t), float_lerp(self.y, rhs.y, t))
  }
  /// Counter-clockwise rotation by `angle_rad`.
  pub fn rotate(self, angle_rad: f32) -> Vec2 {
    let (sin_a, cos_a) = angle_rad.sin_cos();
    Vec2::new(
      self.x * cos_a - self.y * sin_a,
      self.x * sin_a + self.y * cos_a,
    )
  }
  /// Angle from the positive x axis in `(-PI, PI]`. The zero vector gives 0.
  pub fn angle(self) -> f32 {
    f32::atan2(self.y, self.x)
  }
  /// Reflects `self` off a surface. `normal` must already be unit length.
  pub fn reflect(self, normal: Vec2) -> Vec2 {
    let d = self.dot(normal);
    self - normal.scale(2.0 * d)
  }
  /// Projection of `self` onto `rhs`, or the zero vector (with a diagnostic)
  /// when `rhs.length_squared() <= EPSILON`.
  ///
  /// Goes through the unit direction of `rhs` rather than dividing by its
  /// squared length, which overflows for large finite vectors.
  pub fn project(self, rhs: Vec2) -> Vec2 {
    if rhs.length_squared() <= EPSILON {
      near_zero_divisor("Vec2::project", "Cannot project onto zero-length vector");
      return Vec2::ZERO;
    }
    let dir = rhs.normalize();
    dir.scale(self.dot(dir))
  }

  // comparison
  /// Each component compared independently within `EPSILON`.
  pub fn equals(self, rhs: Vec2) -> bool {
    float_equal(self.x, rhs.x) && float_equal(self.y, rhs.y)
  }
  /// Squared length against `EPSILON^2`, a tighter threshold than the
  /// `EPSILON` the `project` guard applies to the squared length.
  pub fn is_zero(self) -> bool {
    self.length_squared() < EPSILON * EPSILON
  }
}
impl Add for Vec2 {
  type Output = Vec2;
  fn add(self, rhs: Self) -> Self::Output {
    Vec2::new(self.x + rhs.x, self.y + rhs.y)
  }
}
impl AddAssign for Vec2 {
  fn add_assign(&mut self, rhs: Self) {
    self.x += rhs.x;
    self.y += rhs.y;
  }
}
impl Sub for Vec2 {
  type Output = Vec2;
  fn sub(self, rhs: Self) -> Self::Output {
    Vec2::new(self.x - rhs.x, self.y - rhs.y)
  }
}
impl SubAssign for Vec2 {
  fn sub_assign(&mut self, rhs: Self) {
    self.x -= rhs.x;
    self.y -= rhs.y;
  }
}
impl Neg for Vec2 {
  type Output = Vec2;
  fn neg(self) -> Self::Output {
    self.negate()
  }
}
impl Mul<f32> for Vec2 {
  type Output = Vec2;
  fn mul(self, rhs: f32) -> Self::Output {
    self.scale(rhs)
  }
}
impl Mul<Vec2> for Vec2 {
  type Output = Vec2;
  fn mul(self, rhs: Vec2) -> Self::Output {
    self.multiply(rhs)
  }
}
impl Div<f32> for Vec2 {
  type Output = Vec2;
  fn div(self, rhs: f32) -> Self::Output {
    self.divide(rhs)
  }
}
impl From<(f32, f32)> for Vec2 {
  fn from(t: (f32, f32)) -> Self {
    Vec2::new(t.0, t.1)
  }
}
impl From<[f32; 2]> for Vec2 {
  fn from(arr: [f32; 2]) -> Self {
    Vec2::from_array(arr)
  }
}
impl From<Vec2> for [f32; 2] {
  fn from(v: Vec2) -> Self {
    v.as_array()
  }
}

/// 3D vector. Only the type and its constants exist so far.
#[repr(C)]
#[derive(Debug, Default, PartialEq, Clone, Copy, Pod, Zeroable)]
pub struct Vec3 {
  pub x: f32,
  pub y: f32,
  pub z: f32,
}
impl Vec3 {
  pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
  pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };

  pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
    Self { x, y, z }
  }
}
