// Host-side tests for firework burst kinematics and lifetime.

use chroma_core::constants::{FIREWORK_DURATION_MS, FIREWORK_PARTICLES};
use chroma_core::effects::{FireworkBurst, FireworkSystem, Particle};
use chroma_core::{DrawCmd, DrawList, Rgb, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

fn burst(intensity: f32, seed: u64) -> FireworkBurst {
    let mut rng = StdRng::seed_from_u64(seed);
    FireworkBurst::spawn(&mut rng, Rgb::new(1.0, 0.8, 0.2), intensity, 1000.0)
}

#[test]
fn every_burst_has_fixed_particle_count_within_ranges() {
    for seed in 0..8 {
        let b = burst(0.8, seed);
        assert_eq!(b.particles.len(), FIREWORK_PARTICLES);
        assert_eq!(b.particles.len(), 130);
        assert_eq!(b.duration, FIREWORK_DURATION_MS);
        for p in b.particles.iter() {
            assert!(p.angle >= 0.0 && p.angle <= TAU);
            assert!(p.speed >= 90.0 * 0.8 - 1e-3 && p.speed <= 240.0 * 0.8 + 1e-3);
            assert!(p.size >= 1.2 && p.size <= 3.8);
            assert!(p.twinkle_phase >= 0.0 && p.twinkle_phase <= TAU);
            assert!(p.decay >= 0.45 && p.decay <= 0.95);
            assert!(p.spread >= 0.6 && p.spread <= 1.1);
        }
    }
}

#[test]
fn weak_bursts_are_floored_in_intensity() {
    let b = burst(0.1, 3);
    assert!((b.intensity - 0.35).abs() < 1e-6);
    for p in b.particles.iter() {
        assert!(p.speed >= 90.0 * 0.35 - 1e-3);
    }
}

#[test]
fn particles_are_fully_faded_at_end_of_burst() {
    let b = burst(1.0, 11);
    for p in b.particles.iter() {
        assert_eq!(p.alpha(1.0, FIREWORK_DURATION_MS as f32, b.intensity), 0.0);
    }
    assert!(b.is_expired(1000.0 + FIREWORK_DURATION_MS));
    assert_eq!(b.sparks(1000.0 + FIREWORK_DURATION_MS).count(), 0);
    assert!(b.sparks(1000.0 + 9_999.9).all(|s| s.alpha < 0.01));
}

#[test]
fn particle_motion_follows_travel_and_gravity() {
    let p = Particle {
        angle: 0.0,
        speed: 200.0,
        size: 2.0,
        twinkle_phase: 0.0,
        decay: 0.6,
        spread: 1.0,
    };
    assert_eq!(p.offset(0.0), glam::Vec2::ZERO);
    // travel saturates once progress * (0.7 + 0.3) reaches 1
    let end = p.offset(1.0);
    assert!((end.x - 200.0).abs() < 1e-3);
    assert!((end.y - 60.0).abs() < 1e-3);
    let mid = p.offset(0.5);
    assert!((mid.x - 200.0 * 0.875).abs() < 1e-3);
    assert!((mid.y - 15.0).abs() < 1e-3);
}

#[test]
fn twinkle_stays_in_band() {
    let p = Particle {
        angle: 1.0,
        speed: 100.0,
        size: 2.0,
        twinkle_phase: 0.7,
        decay: 0.9,
        spread: 0.8,
    };
    for ms in (0..10_000).step_by(37) {
        let t = p.twinkle(ms as f32);
        assert!((0.2 - 1e-6..=1.0 + 1e-6).contains(&t));
    }
}

#[test]
fn dim_particles_are_culled_not_removed() {
    let b = burst(0.35, 5);
    // late in the burst most particles fall under the visibility floor
    let late = 1000.0 + 9_700.0;
    let visible = b.sparks(late).count();
    assert!(visible < FIREWORK_PARTICLES);
    assert_eq!(b.particles.len(), FIREWORK_PARTICLES);
    assert!(!b.is_expired(late));
}

#[test]
fn system_renders_glows_around_center_and_drops_expired() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut system = FireworkSystem::new();
    system.spawn(&mut rng, Rgb::WHITE, 1.0, 0.0);
    system.spawn(&mut rng, Rgb::WHITE, 1.0, 5_000.0);

    let mut list = DrawList::new();
    list.begin(Viewport::new(400.0, 300.0));
    system.render(100.0, &mut list);
    assert_eq!(system.len(), 2);
    for cmd in list.commands() {
        if let DrawCmd::Glow {
            center,
            radius,
            falloff,
            ..
        } = cmd
        {
            // close to the origin this early
            assert!((center.x - 200.0).abs() < 30.0);
            assert!((center.y - 150.0).abs() < 30.0);
            assert!(falloff > radius);
        }
    }

    list.begin(Viewport::new(400.0, 300.0));
    system.render(10_000.0, &mut list);
    assert_eq!(system.len(), 1);
    system.clear();
    assert!(system.is_empty());
}

#[test]
fn spawning_without_frames_keeps_only_live_bursts() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut system = FireworkSystem::new();
    let step = 200.0;
    for i in 0..1000 {
        system.spawn(&mut rng, Rgb::WHITE, 0.8, i as f64 * step);
    }
    let now = 999.0 * step;
    assert!(system.bursts().iter().all(|b| !b.is_expired(now)));
    // a 10s lifetime at one burst per 200ms leaves 50 alive
    assert_eq!(system.len(), (FIREWORK_DURATION_MS / step) as usize);
}
