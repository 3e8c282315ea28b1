//! Unit tests for particle state and integration

use pointmass_core::tests::test_helpers::{approx_eq_f32, undamped_particle};
use pointmass_core::{Particle, PhysicsError, Vector2, DEFAULT_DRAG, DEFAULT_MASS};

#[test]
fn test_new_particle_rejects_non_positive_mass() {
    for mass in [0.0, -1.0, f32::NAN] {
        let result = Particle::new(Vector2::ZERO, Vector2::ZERO, Vector2::ZERO, mass);
        assert!(matches!(result, Err(PhysicsError::InvalidMass(_))));
    }
}

#[test]
fn test_set_mass_round_trip() {
    let mut p = Particle::default();
    for mass in [0.001, 0.5, 1.0, 3.0, 10.0, 1234.5] {
        p.set_mass(mass).unwrap();
        let got = p.mass().unwrap();
        assert!(approx_eq_f32(got, mass, mass * 1e-6), "{} != {}", got, mass);
    }
}

#[test]
fn test_set_mass_invalid_leaves_mass_unchanged() {
    let mut p = Particle::default();
    p.set_mass(2.0).unwrap();

    assert_eq!(p.set_mass(0.0), Err(PhysicsError::InvalidMass(0.0)));
    assert_eq!(p.set_mass(-5.0), Err(PhysicsError::InvalidMass(-5.0)));
    assert_eq!(p.inverse_mass(), 0.5);
}

#[test]
fn test_infinite_mass_queries() {
    let mut p = Particle::default();
    assert!(p.has_finite_mass());
    assert!(approx_eq_f32(p.mass().unwrap(), DEFAULT_MASS, 1e-5));

    p.set_inverse_mass(0.0);
    assert!(!p.has_finite_mass());
    assert_eq!(p.mass(), Err(PhysicsError::InfiniteMass));
    assert_eq!(p.kinetic_energy(), Err(PhysicsError::InfiniteMass));
}

#[test]
fn test_infinite_mass_never_moves() {
    let mut p = Particle::immovable(Vector2::new(2.0, 3.0));
    p.set_velocity(Vector2::new(1.0, -1.0));

    for dt in [0.016, 1.0, 10.0, 0.0, -1.0] {
        p.add_force(Vector2::new(1000.0, -50.0));
        p.add_force(Vector2::new(-3.0, 7.0));
        p.integrate(dt);
        assert_eq!(p.position(), Vector2::new(2.0, 3.0));
        assert_eq!(p.velocity(), Vector2::new(1.0, -1.0));
    }
}

#[test]
fn test_force_accumulator_cleared_after_integrate() {
    let mut p = Particle::default();
    p.add_force(Vector2::new(5.0, 0.0));
    p.add_force(Vector2::new(0.0, -2.0));
    assert_eq!(p.force_accumulator(), Vector2::new(5.0, -2.0));

    p.integrate(0.1);
    assert_eq!(p.force_accumulator(), Vector2::ZERO);

    let mut anchored = Particle::immovable(Vector2::ZERO);
    anchored.add_force(Vector2::new(1.0, 1.0));
    anchored.integrate(0.1);
    assert_eq!(anchored.force_accumulator(), Vector2::ZERO);
}

#[test]
fn test_position_uses_velocity_from_start_of_step() {
    let mut p = undamped_particle(Vector2::ZERO, 1.0);
    p.set_velocity(Vector2::new(2.0, 0.0));
    p.add_force(Vector2::new(4.0, 0.0));

    p.integrate(0.5);

    // x += 2 * 0.5, then v += 4 * 0.5
    assert_eq!(p.position(), Vector2::new(1.0, 0.0));
    assert_eq!(p.velocity(), Vector2::new(4.0, 0.0));
}

#[test]
fn test_force_scaled_by_inverse_mass() {
    let mut p = undamped_particle(Vector2::ZERO, 4.0);
    p.add_force(Vector2::new(8.0, 0.0));
    p.integrate(1.0);
    assert_eq!(p.velocity(), Vector2::new(2.0, 0.0));
}

#[test]
fn test_constant_acceleration_added_to_forces() {
    let mut p = undamped_particle(Vector2::ZERO, 2.0);
    p.set_acceleration(Vector2::new(0.0, 1.0));
    p.add_force(Vector2::new(0.0, 2.0));
    p.integrate(1.0);
    assert_eq!(p.velocity(), Vector2::new(0.0, 2.0));

    // Acceleration persists, forces do not
    p.integrate(1.0);
    assert_eq!(p.velocity(), Vector2::new(0.0, 3.0));
}

#[test]
fn test_drag_strictly_reduces_speed() {
    for drag in [0.1, 0.5, 0.99, DEFAULT_DRAG] {
        for dt in [0.016, 0.5, 2.0] {
            let mut p = Particle::default();
            p.set_drag(drag).unwrap();
            p.set_velocity(Vector2::new(10.0, -4.0));
            let before = p.velocity().magnitude();

            p.integrate(dt);

            assert!(p.velocity().magnitude() < before, "drag {} dt {}", drag, dt);
        }
    }
}

#[test]
fn test_drag_is_frame_rate_independent() {
    let mut coarse = Particle::default();
    coarse.set_drag(0.5).unwrap();
    coarse.set_velocity(Vector2::new(8.0, 0.0));
    coarse.integrate(1.0);

    let mut fine = coarse.clone();
    fine.set_velocity(Vector2::new(8.0, 0.0));
    for _ in 0..4 {
        fine.integrate(0.25);
    }

    assert!(approx_eq_f32(coarse.velocity().x, 4.0, 1e-5));
    assert!(approx_eq_f32(fine.velocity().x, coarse.velocity().x, 1e-4));
}

#[test]
fn test_zero_dt_leaves_state() {
    let mut p = Particle::default();
    p.set_velocity(Vector2::new(1.0, 2.0));
    p.add_force(Vector2::new(10.0, 10.0));
    p.integrate(0.0);
    assert_eq!(p.position(), Vector2::ZERO);
    assert_eq!(p.velocity(), Vector2::new(1.0, 2.0));
    assert_eq!(p.force_accumulator(), Vector2::ZERO);
}

#[test]
fn test_kinetic_energy() {
    let mut p = undamped_particle(Vector2::ZERO, 2.0);
    p.set_velocity(Vector2::new(3.0, 4.0));
    // 0.5 * 2 * 25
    assert!(approx_eq_f32(p.kinetic_energy().unwrap(), 25.0, 1e-4));
}
