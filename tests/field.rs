//! End-to-end behaviour of a flow field on the host: lattice, tracking and
//! rendering together.

use hexflow::frame::{DrawOp, Recorder};
use hexflow::{
    render_frame, ConfigError, FieldConfig, FieldError, FlowField, FrameFlags, RenderStyle, Vec2,
    Viewport,
};

fn field_with(cfg: &FieldConfig) -> FlowField {
    FlowField::new(cfg, Viewport::new(1280.0, 720.0)).unwrap()
}

#[test]
fn cursor_sweep_preserves_segment_invariants() {
    let cfg = FieldConfig {
        box_width: 900.0,
        box_height: 500.0,
        y_spacing: 30.0,
        deflect_length: 14.0,
        ..FieldConfig::default()
    };
    let mut field = field_with(&cfg);
    assert_eq!(field.len(), field.lattice().cols() * field.lattice().rows());

    for step in 0..50 {
        let t = step as f64 / 49.0;
        let cursor = Vec2::new(t * 1280.0, (1.0 - t) * 720.0);
        assert!(field.pointer_moved(cursor));

        for (i, seg) in field.segments().iter().enumerate() {
            let p = field.lattice().point(i).unwrap();
            assert!((seg.length() - 14.0).abs() < 1e-9);
            assert!(seg.midpoint().distance(p) < 1e-9);

            let c = field.vectors()[i].color;
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..=255.0).contains(&ch));
            }
        }
    }
}

#[test]
fn every_grid_point_as_cursor_gives_finite_output() {
    let mut field = field_with(&FieldConfig::default());
    let style = RenderStyle::from(&FieldConfig::default());
    let points = field.lattice().points().to_vec();

    for p in points {
        field.pointer_moved(p);
        let mut rec = Recorder::default();
        render_frame(
            &mut rec,
            &field,
            &style,
            FrameFlags {
                glow: true,
                clear: true,
            },
        );
        for op in &rec.ops {
            if let DrawOp::Stroke(seg, stroke) = op {
                assert!(seg.is_finite());
                assert!(!stroke.color.r.is_nan());
                assert!(!stroke.color.g.is_nan());
                assert!(!stroke.color.b.is_nan());
            }
        }
    }
}

#[test]
fn frames_between_moves_are_identical() {
    let cfg = FieldConfig::default();
    let style = RenderStyle::from(&cfg);
    let mut field = field_with(&cfg);
    field.pointer_moved(Vec2::new(10.0, 10.0));

    let mut first = Recorder::default();
    render_frame(&mut first, &field, &style, FrameFlags::default());
    let mut second = Recorder::default();
    render_frame(&mut second, &field, &style, FrameFlags::default());
    assert_eq!(first, second);

    field.pointer_moved(Vec2::new(1200.0, 700.0));
    let mut third = Recorder::default();
    render_frame(&mut third, &field, &style, FrameFlags::default());
    assert_ne!(first, third);
}

#[test]
fn configuration_from_json_builds_a_field() {
    let json = r#"{"boxWidth": 500, "boxHeight": 400, "ySpacing": 25}"#;
    let cfg = FieldConfig::from_json(json).unwrap();
    let field = field_with(&cfg);
    // 500 / (cos(pi/6) * 25) = 23.09, 400 / 25 = 16
    assert_eq!(field.lattice().cols(), 23);
    assert_eq!(field.lattice().rows(), 16);
}

#[test]
fn oversized_options_fail_instead_of_allocating() {
    let json = r#"{"boxWidth": 1e6, "boxHeight": 1e6, "ySpacing": 0.5}"#;
    let cfg = FieldConfig::from_json(json).unwrap();
    let err = FlowField::new(&cfg, Viewport::new(1280.0, 720.0)).unwrap_err();
    assert!(matches!(err, FieldError::Config(ConfigError::TooLarge { .. })));
}

#[test]
fn degenerate_box_is_rejected() {
    let cfg = FieldConfig {
        box_height: 10.0,
        ..FieldConfig::default()
    };
    let err = FlowField::new(&cfg, Viewport::new(1280.0, 720.0)).unwrap_err();
    assert!(matches!(
        err,
        FieldError::Config(ConfigError::EmptyLattice { rows: 0, .. })
    ));
}
