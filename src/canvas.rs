use crate::core::{CircleStyle, Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    // Last fill colour handed to the context, so repeated fills skip the CSS round-trip.
    // Resizing the canvas resets context state, so `fill_rect` always refreshes it.
    fill_cache: Option<Rgba>,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            fill_cache: None,
        }
    }

    fn set_fill(&mut self, color: Rgba, force: bool) {
        if !force && self.fill_cache == Some(color) {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.fill_cache = Some(color);
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_shadow_blur(0.0);
        self.set_fill(color, true);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &CircleStyle) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.set_fill(style.fill, false);
        match &style.glow {
            Some(glow) => {
                self.ctx.set_shadow_blur(glow.blur as f64);
                self.ctx.set_shadow_color(&glow.color.to_css());
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
        self.ctx.fill();
        self.ctx.close_path();
    }
}
