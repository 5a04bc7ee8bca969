use std::time::Duration;

use log::{debug, info};

use vector_math::math::diagnostics_enabled;
use vector_math::{vec2f, Particle, Vec2};

const ARENA_SIZE: (f32, f32) = (400.0, 240.0);
const LOGIC_STEP: Duration = Duration::from_micros(33_333);
const STEP_COUNT: u32 = 300;
const GRAVITY: Vec2 = Vec2::new(0.0, -98.0);
const MAX_SPEED: f32 = 250.0;

struct Wall {
  // inside while position.dot(normal) >= offset
  offset: f32,
  normal: Vec2,
}

fn arena_walls() -> [Wall; 4] {
  let half = vec2f!(ARENA_SIZE.0 / 2.0, ARENA_SIZE.1 / 2.0);
  [
    Wall { offset: -half.x, normal: vec2f!(1.0, 0.0) },
    Wall { offset: -half.x, normal: vec2f!(-1.0, 0.0) },
    Wall { offset: -half.y, normal: vec2f!(0.0, 1.0) },
    Wall { offset: -half.y, normal: vec2f!(0.0, -1.0) },
  ]
}

fn update(particles: &mut [Particle], walls: &[Wall], dt: f32) -> usize {
  let mut bounces = 0;
  for p in particles.iter_mut() {
    p.apply_force(GRAVITY * p.mass);
    p.step(dt);
    for wall in walls {
      if p.position.dot(wall.normal) < wall.offset && p.bounce(wall.normal) {
        bounces += 1;
      }
    }
    p.limit_speed(MAX_SPEED);
  }
  bounces
}

fn main() {
  env_logger::init();

  let walls = arena_walls();
  let mut particles = vec![
    Particle::new(vec2f!(-100.0, 50.0), 1.0).with_velocity(vec2f!(80.0, 0.0)),
    Particle::new(vec2f!(50.0, 0.0), 2.0).with_velocity(vec2f!(60.0, 0.0).rotate(1.0)),
    Particle::new(Vec2::ZERO, 0.5).with_velocity(vec2f!(-1.0, 2.0).normalize() * 120.0),
  ];
  let dt = LOGIC_STEP.as_secs_f32();

  if diagnostics_enabled() {
    debug!("Near-zero divisor diagnostics enabled");
  }
  info!("Simulating {} particles for {} steps", particles.len(), STEP_COUNT);
  let mut total_bounces = 0;
  for step in 0..STEP_COUNT {
    total_bounces += update(&mut particles, &walls, dt);
    if step % 30 == 0 {
      for (i, p) in particles.iter().enumerate() {
        debug!(
          "step {step} particle {i}: pos {:?} heading {:.3} rad",
          p.position.as_array(), p.velocity.angle()
        );
      }
    }
  }

  for (i, p) in particles.iter().enumerate() {
    info!(
      "particle {i}: pos ({:.2}, {:.2}) speed {:.2} energy {:.2}",
      p.position.x, p.position.y, p.velocity.length(), p.kinetic_energy()
    );
  }
  info!("Total wall bounces: {total_bounces}");
}
