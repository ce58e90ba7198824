use crate::color::Rgb;
use crate::constants::{
    RIPPLE_ALPHA_SCALE, RIPPLE_END_RADIUS, RIPPLE_INNER_FRACTION, RIPPLE_POOL_CAPACITY,
    RIPPLE_START_RADIUS,
};
use crate::draw::{DrawCmd, DrawList, GradientStop, Viewport};
use crate::easing::{ease_out_cubic, lerp, progress};
use crate::pool::EffectPool;
use smallvec::smallvec;

pub type RipplePool = EffectPool<Ripple, RIPPLE_POOL_CAPACITY>;

/// Radially expanding wash centered on the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub color: Rgb,
    pub velocity_factor: f32,
    pub start: f64,
    pub duration: f64,
}

impl Ripple {
    pub fn progress(&self, now: f64) -> f32 {
        progress(self.start, self.duration, now)
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Current `(radius, alpha)`, or `None` once expired.
    pub fn shape(&self, now: f64, viewport: Viewport) -> Option<(f32, f32)> {
        let p = self.progress(now);
        if p >= 1.0 {
            return None;
        }
        let eased = ease_out_cubic(p);
        let diagonal = viewport.diagonal();
        let radius = lerp(
            diagonal * RIPPLE_START_RADIUS,
            diagonal * RIPPLE_END_RADIUS,
            eased,
        );
        let alpha = (1.0 - eased) * RIPPLE_ALPHA_SCALE * self.velocity_factor;
        Some((radius, alpha))
    }

    /// Emit this ripple's draw command; returns `false` once expired.
    pub fn render(&self, now: f64, list: &mut DrawList) -> bool {
        let viewport = list.viewport();
        let Some((radius, alpha)) = self.shape(now, viewport) else {
            return false;
        };
        let color = self.color;
        let stop = |offset: f32, alpha: f32| GradientStop {
            offset,
            color,
            alpha,
        };
        list.push(DrawCmd::RadialFill {
            center: viewport.center(),
            inner: radius * RIPPLE_INNER_FRACTION,
            outer: radius,
            stops: smallvec![
                stop(0.0, alpha),
                stop(0.35, alpha * 0.75),
                stop(0.7, alpha * 0.2),
                stop(1.0, 0.0),
            ],
        });
        true
    }
}
