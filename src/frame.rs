//! One render pass over a flow field.
//!
//! The pass only reads state: segments and colours are whatever the tracker
//! last wrote. Drawing goes through [`Surface`] so the same pass drives the
//! browser canvas and the recording surface used in tests.

use crate::config::{FieldConfig, GlowLayer};
use crate::field::FlowField;
use crate::geometry::{Segment, Viewport};
use crate::ramp::Rgb;

/// Line style for a single stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub alpha: f64,
    pub width: f64,
}

/// 2D drawing target.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);

    fn stroke_segment(&mut self, segment: &Segment, stroke: &Stroke);

    /// Start an additive, blurred composite. Strokes until [`Surface::end_glow`]
    /// add light on top of what is already drawn.
    fn begin_glow(&mut self, layer: &GlowLayer);

    fn end_glow(&mut self);
}

/// Fixed style taken from configuration at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    pub line_width: f64,
    pub glow_layers: Vec<GlowLayer>,
}

impl From<&FieldConfig> for RenderStyle {
    fn from(cfg: &FieldConfig) -> Self {
        Self {
            line_width: cfg.line_width,
            glow_layers: cfg.glow_layers.clone(),
        }
    }
}

/// Per-frame switches, sampled by the frame loop before each pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameFlags {
    pub glow: bool,
    pub clear: bool,
}

impl Default for FrameFlags {
    fn default() -> Self {
        Self {
            glow: false,
            clear: true,
        }
    }
}

pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    field: &FlowField,
    style: &RenderStyle,
    flags: FrameFlags,
) {
    if flags.clear {
        surface.clear(field.viewport());
    }

    for (segment, vector) in field.segments().iter().zip(field.vectors()) {
        if !segment.is_finite() {
            continue;
        }
        let stroke = Stroke {
            color: vector.color,
            alpha: 1.0,
            width: style.line_width,
        };
        surface.stroke_segment(segment, &stroke);
    }

    if flags.glow {
        for layer in &style.glow_layers {
            let stroke = Stroke {
                color: Rgb::WHITE,
                alpha: layer.alpha,
                width: layer.width,
            };
            surface.begin_glow(layer);
            for segment in field.segments().iter().filter(|s| s.is_finite()) {
                surface.stroke_segment(segment, &stroke);
            }
            surface.end_glow();
        }
    }
}

/// Surface that records draw calls instead of painting them.
///
/// Test helper: lets render passes be compared and inspected without a
/// canvas. Nothing in the browser path uses it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

/// One call recorded by [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Viewport),
    Stroke(Segment, Stroke),
    BeginGlow(GlowLayer),
    EndGlow,
}

impl Surface for Recorder {
    fn clear(&mut self, viewport: Viewport) {
        self.ops.push(DrawOp::Clear(viewport));
    }

    fn stroke_segment(&mut self, segment: &Segment, stroke: &Stroke) {
        self.ops.push(DrawOp::Stroke(*segment, *stroke));
    }

    fn begin_glow(&mut self, layer: &GlowLayer) {
        self.ops.push(DrawOp::BeginGlow(*layer));
    }

    fn end_glow(&mut self) {
        self.ops.push(DrawOp::EndGlow);
    }
}

impl Recorder {
    pub fn strokes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Stroke(..)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;

    fn setup() -> (FlowField, RenderStyle) {
        let cfg = FieldConfig::default();
        let field = FlowField::new(&cfg, Viewport::new(1000.0, 800.0)).unwrap();
        (field, RenderStyle::from(&cfg))
    }

    #[test]
    fn plain_frame_clears_then_strokes_each_point() {
        let (field, style) = setup();
        let mut rec = Recorder::default();
        render_frame(&mut rec, &field, &style, FrameFlags::default());
        assert_eq!(rec.ops[0], DrawOp::Clear(field.viewport()));
        assert_eq!(rec.strokes(), field.len());
        assert_eq!(rec.ops.len(), field.len() + 1);
    }

    #[test]
    fn strokes_use_vector_colour_and_line_width() {
        let (mut field, style) = setup();
        field.pointer_moved(Vec2::new(120.0, 80.0));
        let mut rec = Recorder::default();
        render_frame(&mut rec, &field, &style, FrameFlags::default());
        for (op, (seg, v)) in rec.ops[1..]
            .iter()
            .zip(field.segments().iter().zip(field.vectors()))
        {
            match op {
                DrawOp::Stroke(s, stroke) => {
                    assert_eq!(s, seg);
                    assert_eq!(stroke.color, v.color);
                    assert_eq!(stroke.width, 1.0);
                }
                other => panic!("unexpected op {other:?}"),
            }
        }
    }

    #[test]
    fn repeated_frames_are_identical() {
        let (mut field, style) = setup();
        field.pointer_moved(Vec2::new(300.0, 300.0));
        let flags = FrameFlags {
            glow: true,
            clear: true,
        };
        let mut a = Recorder::default();
        let mut b = Recorder::default();
        render_frame(&mut a, &field, &style, flags);
        render_frame(&mut b, &field, &style, flags);
        assert_eq!(a, b);
    }

    #[test]
    fn trails_mode_never_clears() {
        let (field, style) = setup();
        let mut rec = Recorder::default();
        let flags = FrameFlags {
            glow: false,
            clear: false,
        };
        render_frame(&mut rec, &field, &style, flags);
        render_frame(&mut rec, &field, &style, flags);
        assert!(!rec.ops.iter().any(|op| matches!(op, DrawOp::Clear(_))));
        assert_eq!(rec.strokes(), 2 * field.len());
    }

    #[test]
    fn glow_adds_one_composite_per_layer() {
        let (field, style) = setup();
        let mut rec = Recorder::default();
        let flags = FrameFlags {
            glow: true,
            clear: true,
        };
        render_frame(&mut rec, &field, &style, flags);

        let begins: Vec<_> = rec
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::BeginGlow(layer) => Some(*layer),
                _ => None,
            })
            .collect();
        assert_eq!(begins, style.glow_layers);
        assert_eq!(
            rec.ops.iter().filter(|op| **op == DrawOp::EndGlow).count(),
            style.glow_layers.len()
        );
        assert_eq!(rec.strokes(), field.len() * (1 + style.glow_layers.len()));

        // glow strokes are white at the layer's width and alpha
        let first_glow = rec
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::BeginGlow(_)))
            .unwrap();
        match &rec.ops[first_glow + 1] {
            DrawOp::Stroke(_, stroke) => {
                assert_eq!(stroke.color, Rgb::WHITE);
                assert_eq!(stroke.width, 3.0);
                assert_eq!(stroke.alpha, 0.5);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn glow_toggle_takes_effect_on_next_frame() {
        let (field, style) = setup();
        let mut off = Recorder::default();
        let mut on = Recorder::default();
        render_frame(&mut off, &field, &style, FrameFlags::default());
        render_frame(
            &mut on,
            &field,
            &style,
            FrameFlags {
                glow: true,
                ..FrameFlags::default()
            },
        );
        assert!(on.strokes() > off.strokes());
    }
}
