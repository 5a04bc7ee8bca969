use super::*;

/// Point mass driven by the vector algebra.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Particle {
  pub position: Vec2,
  pub velocity: Vec2,
  pub acceleration: Vec2,
  pub mass: f32,
}
impl Particle {
  pub fn new(position: Vec2, mass: f32) -> Self {
    Self {
      position,
      velocity: Vec2::ZERO,
      acceleration: Vec2::ZERO,
      mass,
    }
  }
  pub fn with_velocity(mut self, velocity: Vec2) -> Self {
    self.velocity = velocity;
    self
  }
  /// Accumulates `force / mass` into the acceleration. A massless particle
  /// is left untouched.
  pub fn apply_force(&mut self, force: Vec2) {
    self.acceleration += force.divide(self.mass);
  }
  /// Semi-implicit Euler step. Acceleration is consumed by the step.
  pub fn step(&mut self, dt: f32) {
    self.velocity += self.acceleration * dt;
    self.position += self.velocity * dt;
    self.acceleration = Vec2::ZERO;
  }
  /// Reflects the velocity off a surface with unit `normal`, only if the
  /// particle is moving into it. Returns whether it bounced.
  pub fn bounce(&mut self, normal: Vec2) -> bool {
    if self.velocity.dot(normal) >= 0.0 {
      return false;
    }
    self.velocity = self.velocity.reflect(normal);
    true
  }
  /// Caps the speed at `max_speed`, keeping the direction. The sign of
  /// `max_speed` is ignored.
  pub fn limit_speed(&mut self, max_speed: f32) {
    let max_speed = max_speed.abs();
    if self.velocity.length() > max_speed {
      self.velocity = self.velocity.normalize() * max_speed;
    }
  }
  pub fn kinetic_energy(&self) -> f32 {
    0.5 * self.mass * self.velocity.length_squared()
  }
}
