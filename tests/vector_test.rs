use std::f32::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use vector_math::math::{float_clamp, float_equal, float_lerp};
use vector_math::{vec2f, vec3f, Vec2, Vec3, EPSILON};

// small components keep f32 rounding well under EPSILON
fn samples() -> Vec<Vec2> {
  vec![
    vec2f!(1.0, 2.0),
    vec2f!(-3.0, 0.5),
    vec2f!(0.25, -1.75),
    vec2f!(2.0, 2.0),
    vec2f!(-1.5, -0.5),
    vec2f!(0.1, 0.3),
  ]
}

const ANGLES: [f32; 7] = [0.0, 0.3, PI / 4.0, PI / 2.0, PI, -2.0, 5.5];

fn init_logger() {
  let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn additive_identity() {
  for v in samples() {
    assert!((v + Vec2::ZERO).equals(v));
    assert!((v - Vec2::ZERO).equals(v));
  }
}

#[test]
fn negation_involution() {
  for v in samples() {
    assert!(v.negate().negate().equals(v));
    assert!((-(-v)).equals(v));
  }
}

#[test]
fn divide_undoes_scale() {
  for v in samples() {
    for s in [2.0, -0.5, 3.0, 10.0, -7.0] {
      assert!(v.scale(s).divide(s).equals(v), "{v:?} scaled by {s}");
    }
  }
}

#[test]
fn normalize_unit_and_idempotent() {
  for v in samples() {
    let n = v.normalize();
    assert_abs_diff_eq!(n.length(), 1.0, epsilon = EPSILON);
    assert!(n.normalize().equals(n));
  }
}

#[test]
fn guarded_operations_return_zero() {
  init_logger();
  for v in samples() {
    let d = v.divide(0.0);
    assert!(d.x.is_finite() && d.y.is_finite());
    assert_eq!(d, Vec2::ZERO);
    assert_eq!(v.project(Vec2::ZERO), Vec2::ZERO);
  }
  assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
}

// squaring these components overflows f32
fn large_samples() -> Vec<Vec2> {
  vec![
    vec2f!(1e20, 1e20),
    vec2f!(-3e19, 4e19),
    vec2f!(2e30, -1.0),
    vec2f!(f32::MAX / 2.0, f32::MAX / 2.0),
  ]
}

#[test]
fn large_vectors_normalize_to_unit() {
  for v in large_samples() {
    assert!(v.length().is_finite());
    let n = v.normalize();
    assert_abs_diff_eq!(n.length(), 1.0, epsilon = EPSILON);
    assert!(n.normalize().equals(n));
  }
  assert!(vec2f!(1e20, 1e20).normalize().equals(vec2f!(0.70710677, 0.70710677)));
  assert_relative_eq!(vec2f!(-3e19, 4e19).length(), 5e19, max_relative = 1e-6);
}

#[test]
fn large_vectors_project_finite() {
  let v = vec2f!(1e20, 1e20);
  let onto_self = v.project(v);
  assert_relative_eq!(onto_self.x, 1e20, max_relative = 1e-5);
  assert_relative_eq!(onto_self.y, 1e20, max_relative = 1e-5);

  let onto_axis = v.project(vec2f!(1e20, 0.0));
  assert_relative_eq!(onto_axis.x, 1e20, max_relative = 1e-5);
  assert_abs_diff_eq!(onto_axis.y, 0.0);

  let small_target = vec2f!(-3e19, 4e19).project(vec2f!(0.0, 2.0));
  assert_abs_diff_eq!(small_target.x, 0.0);
  assert_relative_eq!(small_target.y, 4e19, max_relative = 1e-5);

  for a in large_samples() {
    for b in large_samples() {
      let p = a.project(b);
      assert!(p.x.is_finite() && p.y.is_finite(), "{a:?} onto {b:?} gave {p:?}");
    }
  }
}

#[test]
fn lerp_boundaries() {
  let all = samples();
  for a in &all {
    for b in &all {
      assert!(a.lerp(*b, 0.0).equals(*a));
      assert!(a.lerp(*b, 1.0).equals(*b));
      assert!(a.lerp(*b, 2.0).equals(a.lerp(*b, 1.0)));
      assert!(a.lerp(*b, -3.0).equals(*a));
    }
  }
}

#[test]
fn rotation_preserves_length() {
  for v in samples() {
    for theta in ANGLES {
      assert_abs_diff_eq!(v.rotate(theta).length(), v.length(), epsilon = 1e-5);
    }
  }
}

#[test]
fn rotation_composes() {
  let v = vec2f!(1.0, 2.0);
  assert!(v.rotate(0.3).rotate(-0.3).equals(v));
  assert!(v.rotate(PI / 2.0).rotate(PI / 2.0).equals(v.negate()));
}

#[test]
fn reflection_round_trip() {
  let normals = [
    vec2f!(1.0, 0.0),
    vec2f!(0.0, -1.0),
    vec2f!(0.6, 0.8),
    vec2f!(1.0, 1.0).normalize(),
  ];
  for v in samples() {
    for n in normals {
      assert!(v.reflect(n).reflect(n).equals(v), "{v:?} off {n:?}");
    }
  }
}

#[test]
fn reflection_keeps_length() {
  let n = vec2f!(0.6, 0.8);
  for v in samples() {
    assert_abs_diff_eq!(v.reflect(n).length(), v.length(), epsilon = 1e-5);
  }
}

#[test]
fn projection_is_parallel() {
  let b = vec2f!(2.0, 1.0);
  for a in samples() {
    let p = a.project(b);
    assert_abs_diff_eq!(p.cross(b), 0.0, epsilon = 1e-5);
    // remainder is perpendicular to b
    assert_abs_diff_eq!((a - p).dot(b), 0.0, epsilon = 1e-5);
  }
}

#[test]
fn distance_is_symmetric() {
  let all = samples();
  for a in &all {
    for b in &all {
      assert_abs_diff_eq!(a.distance(*b), b.distance(*a));
      assert_abs_diff_eq!(a.distance_squared(*b), (*b - *a).length_squared());
    }
  }
}

#[test]
fn scenario_add() {
  assert!((vec2f!(1.0, 2.0) + vec2f!(3.0, 4.0)).equals(vec2f!(4.0, 6.0)));
}

#[test]
fn scenario_normalize() {
  assert!(vec2f!(3.0, 4.0).normalize().equals(vec2f!(0.6, 0.8)));
}

#[test]
fn scenario_rotate() {
  assert!(vec2f!(1.0, 0.0).rotate(PI / 2.0).equals(vec2f!(0.0, 1.0)));
}

#[test]
fn scenario_is_zero() {
  assert!(vec2f!(1e-7, 1e-7).is_zero());
  assert!(!vec2f!(1e-3, 0.0).is_zero());
}

#[test]
fn scalar_helpers() {
  assert!(float_equal(0.1 + 0.2, 0.3));
  assert_eq!(float_clamp(2.0, 0.0, 1.0), 1.0);
  assert_eq!(float_lerp(1.0, 3.0, 1.5), 4.0);
}

#[test]
fn constants() {
  assert_eq!(Vec2::default(), Vec2::ZERO);
  assert_eq!(vec2f!(1.0, 1.0), Vec2::ONE);
  assert_eq!(vec3f!(0.0, 0.0, 0.0), Vec3::ZERO);
  assert_eq!(vec3f!(1.0, 1.0, 1.0), Vec3::ONE);
  assert!(Vec2::ONE.multiply(Vec2::ZERO).is_zero());
}
