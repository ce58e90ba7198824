//! Backend-neutral display list.
//!
//! The engine describes each frame as a flat list of [`DrawCmd`]s in CSS pixel
//! space. A backend (the web front-end's canvas painter, or a test) replays
//! them in order. Stroke geometry lives in a shared point arena so that a
//! steady-state frame reuses the same allocations.

use crate::color::Rgb;
use glam::Vec2;
use smallvec::SmallVec;
use std::ops::Range;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn diagonal(&self) -> f32 {
        self.width.hypot(self.height)
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    SourceOver,
    /// Additive ("lighter") blending; overlapping glows accumulate.
    Lighter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb,
    pub alpha: f32,
}

pub type Stops = SmallVec<[GradientStop; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear,
    Composite(Composite),
    /// Solid fill of the whole viewport.
    Fill { color: Rgb, alpha: f32 },
    /// Linear gradient over the whole viewport.
    LinearFill { from: Vec2, to: Vec2, stops: Stops },
    /// Radial gradient (between `inner` and `outer` radii) over the whole viewport.
    RadialFill {
        center: Vec2,
        inner: f32,
        outer: f32,
        stops: Stops,
    },
    /// Disc of `radius` filled with a gradient fading from `alpha` at the
    /// center to 0 at `falloff`.
    Glow {
        center: Vec2,
        radius: f32,
        falloff: f32,
        color: Rgb,
        alpha: f32,
    },
    /// Round-capped polyline; `points` indexes [`DrawList::points`].
    Stroke {
        points: Range<usize>,
        width: f32,
        color: Rgb,
        alpha: f32,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DrawList {
    viewport: Viewport,
    cmds: Vec<DrawCmd>,
    points: Vec<Vec2>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's commands, keeping capacity.
    pub fn begin(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.cmds.clear();
        self.points.clear();
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn stroke(
        &mut self,
        points: impl IntoIterator<Item = Vec2>,
        width: f32,
        color: Rgb,
        alpha: f32,
    ) {
        let start = self.points.len();
        self.points.extend(points);
        let end = self.points.len();
        if end - start < 2 {
            self.points.truncate(start);
            return;
        }
        self.cmds.push(DrawCmd::Stroke {
            points: start..end,
            width,
            color,
            alpha,
        });
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn points(&self, range: Range<usize>) -> &[Vec2] {
        &self.points[range]
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.cmds.iter().filter(|&c| pred(c)).count()
    }
}
