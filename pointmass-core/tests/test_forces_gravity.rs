//! Unit tests for the uniform gravity generator

use pointmass_core::tests::test_helpers::{approx_eq_vec, undamped_particle};
use pointmass_core::{ForceGenerator, GravityForceGenerator, Particle, Vector2, DEFAULT_GRAVITY};

#[test]
fn test_default_gravity_points_down() {
    let gravity = GravityForceGenerator::default();
    assert_eq!(gravity.gravity(), DEFAULT_GRAVITY);
    assert_eq!(gravity.gravity(), Vector2::new(0.0, -9.81));
}

#[test]
fn test_set_gravity() {
    let mut gravity = GravityForceGenerator::default();
    gravity.set_gravity(Vector2::new(1.0, 0.0));
    assert_eq!(gravity.gravity(), Vector2::new(1.0, 0.0));
}

#[test]
fn test_gravity_force_scales_with_mass() {
    let g = Vector2::new(0.0, -9.81);
    let mut gravity = GravityForceGenerator::new(g);
    let mut light = undamped_particle(Vector2::ZERO, 2.0);
    let mut heavy = undamped_particle(Vector2::ZERO, 5.0);

    gravity.update_force(&mut light, 0.1);
    gravity.update_force(&mut heavy, 0.1);

    assert!(approx_eq_vec(light.force_accumulator(), g * 2.0, 1e-5));
    assert!(approx_eq_vec(heavy.force_accumulator(), g * 5.0, 1e-4));
}

#[test]
fn test_fall_is_mass_independent() {
    let g = Vector2::new(0.0, -9.81);
    let mut gravity = GravityForceGenerator::new(g);
    let mut light = undamped_particle(Vector2::ZERO, 0.25);
    let mut heavy = undamped_particle(Vector2::ZERO, 40.0);

    for _ in 0..10 {
        gravity.update_force(&mut light, 0.1);
        gravity.update_force(&mut heavy, 0.1);
        light.integrate(0.1);
        heavy.integrate(0.1);
    }

    assert!(approx_eq_vec(light.velocity(), heavy.velocity(), 1e-4));
    assert!(approx_eq_vec(light.position(), heavy.position(), 1e-3));
    assert!(approx_eq_vec(light.velocity(), g, 1e-4));
}

#[test]
fn test_gravity_skips_infinite_mass() {
    let mut gravity = GravityForceGenerator::default();
    let mut anchor = Particle::immovable(Vector2::new(0.0, 5.0));

    gravity.update_force(&mut anchor, 1.0);

    assert_eq!(anchor.force_accumulator(), Vector2::ZERO);
}

#[test]
fn test_gravity_adds_to_existing_forces() {
    let mut gravity = GravityForceGenerator::new(Vector2::new(0.0, -10.0));
    let mut p = undamped_particle(Vector2::ZERO, 1.0);
    p.add_force(Vector2::new(3.0, 4.0));

    gravity.update_force(&mut p, 1.0);

    assert_eq!(p.force_accumulator(), Vector2::new(3.0, -6.0));
}
