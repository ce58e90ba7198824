// Host-side tests for ripple/swirl geometry and the bounded effect pool.

use chroma_core::effects::swirl::stroke_width;
use chroma_core::effects::{Ripple, Swirl};
use chroma_core::pool::EffectPool;
use chroma_core::{transition_duration_ms, DrawCmd, DrawList, Rgb, Viewport};

fn viewport() -> Viewport {
    // 800x600 has a 1000px diagonal
    Viewport::new(800.0, 600.0)
}

#[test]
fn pool_evicts_oldest_first() {
    let mut pool: EffectPool<u32, 3> = EffectPool::new();
    assert_eq!(pool.push(1), None);
    assert_eq!(pool.push(2), None);
    assert_eq!(pool.push(3), None);
    assert_eq!(pool.push(4), Some(1));
    assert_eq!(pool.push(5), Some(2));
    assert_eq!(pool.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    pool.retain(|v| v % 2 == 1);
    assert_eq!(pool.iter().copied().collect::<Vec<_>>(), vec![3, 5]);
    pool.clear();
    assert!(pool.is_empty());
}

#[test]
fn transition_duration_grows_for_soft_strikes() {
    assert_eq!(transition_duration_ms(1100, 1.0), 1100.0);
    assert_eq!(transition_duration_ms(1100, 0.25), 1100.0 + 0.75 * 320.0);
    assert!(transition_duration_ms(400, 0.5) > transition_duration_ms(400, 0.9));
}

#[test]
fn ripple_expands_and_fades() {
    let ripple = Ripple {
        color: Rgb::WHITE,
        velocity_factor: 0.8,
        start: 0.0,
        duration: 1000.0,
    };
    let (r0, a0) = ripple.shape(0.0, viewport()).unwrap();
    assert!((r0 - 40.0).abs() < 1e-3);
    assert!((a0 - 0.75 * 0.8).abs() < 1e-6);

    let mut prev = (r0, a0);
    for t in (50..1000).step_by(50) {
        let (r, a) = ripple.shape(t as f64, viewport()).unwrap();
        assert!(r > prev.0 && r < 550.0);
        assert!(a < prev.1 && a >= 0.0);
        prev = (r, a);
    }
    assert!(ripple.shape(1000.0, viewport()).is_none());
}

#[test]
fn ripple_emits_viewport_radial_fill() {
    let ripple = Ripple {
        color: Rgb::new(0.2, 0.4, 0.6),
        velocity_factor: 1.0,
        start: 0.0,
        duration: 500.0,
    };
    let mut list = DrawList::new();
    list.begin(viewport());
    assert!(ripple.render(100.0, &mut list));
    match &list.commands()[0] {
        DrawCmd::RadialFill {
            center,
            inner,
            outer,
            stops,
        } => {
            assert_eq!(*center, glam::Vec2::new(400.0, 300.0));
            assert!((inner - outer * 0.2).abs() < 1e-4);
            assert_eq!(stops.len(), 4);
            assert_eq!(stops[3].alpha, 0.0);
            assert!(stops[0].alpha > stops[1].alpha && stops[1].alpha > stops[2].alpha);
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert!(!ripple.render(500.0, &mut list));
}

#[test]
fn swirl_collapses_inward_and_rotates() {
    let swirl = Swirl {
        color_a: Rgb::WHITE,
        color_b: Rgb::BLACK,
        intensity: 1.0,
        start: 0.0,
        duration: 1200.0,
        spin: 2.0,
    };
    let start = swirl.pose(0.0, viewport()).unwrap();
    assert!((start.radius - 550.0).abs() < 1e-3);
    assert!((start.inner_radius - 30.0).abs() < 1e-4);
    assert_eq!(start.rotation, 0.0);
    assert!((start.alpha - 0.9).abs() < 1e-6);

    let late = swirl.pose(1150.0, viewport()).unwrap();
    assert!(late.radius < start.radius && late.radius >= late.inner_radius);
    assert!(late.rotation > 0.0 && late.rotation <= std::f32::consts::PI * 3.0 * 2.0);
    assert!(swirl.pose(1200.0, viewport()).is_none());
}

#[test]
fn swirl_stroke_narrows_as_radius_shrinks() {
    let vp = viewport();
    let wide = stroke_width(vp, 550.0, 30.0);
    let narrow = stroke_width(vp, 31.0, 30.0);
    assert!(wide > narrow);
    assert!(wide <= 800.0 * 0.08 + 1e-3);
    assert!(narrow >= 800.0 * 0.015 - 1e-3);
    assert_eq!(stroke_width(vp, 0.0, 30.0), 800.0 * 0.015);
}

#[test]
fn swirl_renders_two_strokes_with_second_dimmer() {
    let swirl = Swirl {
        color_a: Rgb::new(1.0, 0.0, 0.0),
        color_b: Rgb::new(0.0, 0.0, 1.0),
        intensity: 0.8,
        start: 0.0,
        duration: 1200.0,
        spin: 1.5,
    };
    let mut list = DrawList::new();
    list.begin(viewport());
    assert!(swirl.render(300.0, &mut list));
    let strokes: Vec<_> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Stroke {
                points,
                color,
                alpha,
                ..
            } => Some((points.clone(), *color, *alpha)),
            _ => None,
        })
        .collect();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].1, swirl.color_a);
    assert_eq!(strokes[1].1, swirl.color_b);
    assert!((strokes[1].2 - strokes[0].2 * 0.9).abs() < 1e-6);
    for (range, _, _) in &strokes {
        assert_eq!(list.points(range.clone()).len(), 65);
    }
}
