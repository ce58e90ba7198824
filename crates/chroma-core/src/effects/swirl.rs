use crate::color::Rgb;
use crate::constants::{
    SWIRL_ALPHA_SCALE, SWIRL_BASE_TURNS, SWIRL_INNER_RADIUS, SWIRL_OUTER_RADIUS,
    SWIRL_POOL_CAPACITY, SWIRL_ROTATION_TURNS, SWIRL_SECOND_STROKE_ALPHA, SWIRL_SEGMENTS,
    SWIRL_TURNS_PER_SPIN, SWIRL_WIDTH_NARROW, SWIRL_WIDTH_WIDE,
};
use crate::draw::{DrawList, Viewport};
use crate::easing::{ease_out_cubic, lerp, progress};
use crate::pool::EffectPool;
use glam::Vec2;
use std::f32::consts::{PI, TAU};

pub type SwirlPool = EffectPool<Swirl, SWIRL_POOL_CAPACITY>;

/// Two interleaved spiral strokes collapsing toward the center.
#[derive(Clone, Debug, PartialEq)]
pub struct Swirl {
    pub color_a: Rgb,
    pub color_b: Rgb,
    pub intensity: f32,
    pub start: f64,
    pub duration: f64,
    pub spin: f32,
}

/// Snapshot of a live swirl for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwirlPose {
    pub radius: f32,
    pub inner_radius: f32,
    pub rotation: f32,
    pub alpha: f32,
}

impl Swirl {
    pub fn progress(&self, now: f64) -> f32 {
        progress(self.start, self.duration, now)
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn pose(&self, now: f64, viewport: Viewport) -> Option<SwirlPose> {
        let p = self.progress(now);
        if p >= 1.0 {
            return None;
        }
        let eased = ease_out_cubic(p);
        let inner_radius = viewport.min_side() * SWIRL_INNER_RADIUS;
        let outer_radius = viewport.diagonal() * SWIRL_OUTER_RADIUS;
        Some(SwirlPose {
            radius: lerp(outer_radius, inner_radius, eased),
            inner_radius,
            rotation: eased * PI * SWIRL_ROTATION_TURNS * self.spin,
            alpha: (1.0 - eased) * SWIRL_ALPHA_SCALE * self.intensity,
        })
    }

    /// Emit both strokes; returns `false` once expired.
    pub fn render(&self, now: f64, list: &mut DrawList) -> bool {
        let viewport = list.viewport();
        let Some(pose) = self.pose(now, viewport) else {
            return false;
        };
        spiral_stroke(list, viewport, &pose, self.spin, pose.rotation, self.color_a, pose.alpha);
        spiral_stroke(
            list,
            viewport,
            &pose,
            -self.spin,
            pose.rotation + PI,
            self.color_b,
            pose.alpha * SWIRL_SECOND_STROKE_ALPHA,
        );
        true
    }
}

/// Stroke width for a spiral whose outer end sits at `radius`.
/// Wide while the swirl is large, narrowing as it collapses inward.
/// Width follows openness, not the inverse: a collapsed spiral is thin.
pub fn stroke_width(viewport: Viewport, radius: f32, inner_radius: f32) -> f32 {
    let openness = if radius > 0.0 {
        ((radius - inner_radius) / radius).clamp(0.0, 1.0)
    } else {
        0.0
    };
    lerp(
        viewport.width * SWIRL_WIDTH_NARROW,
        viewport.width * SWIRL_WIDTH_WIDE,
        openness,
    )
}

fn spiral_stroke(
    list: &mut DrawList,
    viewport: Viewport,
    pose: &SwirlPose,
    spin: f32,
    offset: f32,
    color: Rgb,
    alpha: f32,
) {
    let center = viewport.center();
    let turns = SWIRL_BASE_TURNS + spin * SWIRL_TURNS_PER_SPIN;
    let points = (0..=SWIRL_SEGMENTS).map(|i| {
        let t = i as f32 / SWIRL_SEGMENTS as f32;
        let angle = t * turns * TAU + offset;
        let r = lerp(pose.radius, pose.inner_radius, t);
        center + Vec2::new(angle.cos(), angle.sin()) * r
    });
    let width = stroke_width(viewport, pose.radius, pose.inner_radius);
    list.stroke(points, width, color, alpha);
}
