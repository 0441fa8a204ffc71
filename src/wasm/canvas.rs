use web_sys::CanvasRenderingContext2d;

use crate::config::GlowLayer;
use crate::frame::{Stroke, Surface};
use crate::geometry::{Segment, Viewport};
use crate::ramp::Rgb;

/// [`Surface`] backed by a canvas 2d context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn stroke_segment(&mut self, segment: &Segment, stroke: &Stroke) {
        let style = if stroke.alpha >= 1.0 {
            stroke.color.to_css()
        } else {
            stroke.color.to_css_alpha(stroke.alpha)
        };
        self.ctx.set_stroke_style_str(&style);
        self.ctx.set_line_width(stroke.width);
        self.ctx.begin_path();
        self.ctx.move_to(segment.side1.x, segment.side1.y);
        self.ctx.line_to(segment.side2.x, segment.side2.y);
        self.ctx.stroke();
    }

    fn begin_glow(&mut self, layer: &GlowLayer) {
        self.ctx.save();
        // "lighter" adds source and destination colours
        if let Err(e) = self.ctx.set_global_composite_operation("lighter") {
            log::warn!("additive blending unavailable: {:?}", e);
        }
        self.ctx.set_shadow_blur(layer.blur);
        self.ctx.set_shadow_color(&Rgb::WHITE.to_css_alpha(layer.alpha));
    }

    fn end_glow(&mut self) {
        self.ctx.restore();
    }
}
