use chroma_core::{Composite, DrawCmd, DrawList, GradientStop, Rgb};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replays a [`DrawList`] onto a Canvas 2D context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    pixel_ratio: f64,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("getContext failed: {:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("unexpected context type: {:?}", e)))?;
        Ok(Self {
            ctx,
            pixel_ratio: 1.0,
        })
    }

    pub fn set_pixel_ratio(&mut self, dpr: f64) {
        self.pixel_ratio = dpr.max(1.0);
    }

    pub fn paint(&self, list: &DrawList) {
        let viewport = list.viewport();
        let (w, h) = (viewport.width as f64, viewport.height as f64);
        // Draw lists are in CSS pixels; the backing store is dpr-scaled.
        let dpr = self.pixel_ratio;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

        for cmd in list.commands() {
            match cmd {
                DrawCmd::Clear => self.ctx.clear_rect(0.0, 0.0, w, h),
                DrawCmd::Composite(mode) => {
                    _ = self.ctx.set_global_composite_operation(composite_op(*mode));
                }
                DrawCmd::Fill { color, alpha } => {
                    self.ctx.set_fill_style_str(&color.css_rgba(*alpha));
                    self.ctx.fill_rect(0.0, 0.0, w, h);
                }
                DrawCmd::LinearFill { from, to, stops } => {
                    let g = self.ctx.create_linear_gradient(
                        from.x as f64,
                        from.y as f64,
                        to.x as f64,
                        to.y as f64,
                    );
                    add_stops(&g, stops);
                    self.ctx.set_fill_style_canvas_gradient(&g);
                    self.ctx.fill_rect(0.0, 0.0, w, h);
                }
                DrawCmd::RadialFill {
                    center,
                    inner,
                    outer,
                    stops,
                } => {
                    if let Some(g) = self.radial(*center, *inner, *outer) {
                        add_stops(&g, stops);
                        self.ctx.set_fill_style_canvas_gradient(&g);
                        self.ctx.fill_rect(0.0, 0.0, w, h);
                    }
                }
                DrawCmd::Glow {
                    center,
                    radius,
                    falloff,
                    color,
                    alpha,
                } => self.glow(*center, *radius, *falloff, *color, *alpha),
                DrawCmd::Stroke {
                    points,
                    width,
                    color,
                    alpha,
                } => self.stroke(list.points(points.clone()), *width, *color, *alpha),
            }
        }
        _ = self.ctx.set_global_composite_operation("source-over");
    }

    fn radial(&self, center: Vec2, inner: f32, outer: f32) -> Option<web::CanvasGradient> {
        let (cx, cy) = (center.x as f64, center.y as f64);
        match self.ctx.create_radial_gradient(
            cx,
            cy,
            inner.max(0.0) as f64,
            cx,
            cy,
            outer.max(0.0) as f64,
        ) {
            Ok(g) => Some(g),
            Err(e) => {
                log::debug!("[render] radial gradient rejected: {:?}", e);
                None
            }
        }
    }

    fn glow(&self, center: Vec2, radius: f32, falloff: f32, color: Rgb, alpha: f32) {
        let Some(g) = self.radial(center, 0.0, falloff) else {
            return;
        };
        _ = g.add_color_stop(0.0, &color.css_rgba(alpha));
        _ = g.add_color_stop(1.0, &color.css_rgba(0.0));
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
        self.ctx.fill();
    }

    fn stroke(&self, points: &[Vec2], width: f32, color: Rgb, alpha: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.set_line_cap("round");
        self.ctx.set_stroke_style_str(&color.css_rgba(alpha));
        self.ctx.stroke();
    }
}

#[inline]
fn composite_op(mode: Composite) -> &'static str {
    match mode {
        Composite::SourceOver => "source-over",
        Composite::Lighter => "lighter",
    }
}

fn add_stops(gradient: &web::CanvasGradient, stops: &[GradientStop]) {
    for stop in stops {
        _ = gradient.add_color_stop(stop.offset, &stop.color.css_rgba(stop.alpha));
    }
}
