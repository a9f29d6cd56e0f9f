use super::*;

fn flash() -> LayerKind {
    LayerKind::Flash {
        color: Rgba8::WHITE,
    }
}

#[test]
fn builder_clamps_opacity_and_blur() {
    let l = Layer::new("flash", flash()).opacity(1.17).blur(-3.0);
    assert_eq!(l.opacity, 1.0);
    assert_eq!(l.blur_px, 0.0);
    assert_eq!(Layer::new("flash", flash()).opacity(f64::NAN).opacity, 0.0);
    assert_eq!(Layer::new("flash", flash()).opacity(-0.2).opacity, 0.0);
}

#[test]
fn transform_ops_keep_order() {
    let l = Layer::new("title", flash())
        .translate(0.0, -40.0)
        .translate(3.0, 0.0)
        .skew_x(1.5)
        .scale(0.8)
        .scale(0.5);
    assert_eq!(l.transform.len(), 5);
    assert!(matches!(l.transform[2], TransformOp::SkewX { deg } if deg == 1.5));
    assert_eq!(l.total_scale(), 0.4);
    assert_eq!(l.total_translation(), Vec2::new(3.0, -40.0));
}

#[test]
fn finish_sorts_stably_by_z() {
    let mut f = SegmentFrame::new("seg", 0, RootStyle::new(Paint::solid(Rgba8::BLACK)));
    f.push(Layer::new("a", flash()).z(5));
    f.push(Layer::new("b", flash()));
    f.push(Layer::new("c", flash()).z(5));
    f.push(Layer::new("d", flash()).z(-1));
    let f = f.finish();
    let names: Vec<_> = f.layers.iter().map(|l| l.name).collect();
    assert_eq!(names, ["d", "b", "a", "c"]);
    assert!(f.layer("c").is_some());
    assert_eq!(f.layers_named("a").count(), 1);
}

#[test]
fn gradient_stops_are_clamped() {
    let p = Paint::linear(180.0, &[(-0.5, Rgba8::BLACK), (2.0, Rgba8::WHITE)]);
    let Paint::Linear { stops, .. } = p else {
        panic!("expected linear paint");
    };
    assert_eq!(stops[0].offset, 0.0);
    assert_eq!(stops[1].offset, 1.0);
}

#[test]
fn text_style_resolves_theme_family() {
    let theme = Theme::default();
    let s = TextStyle::new(&theme, FontRole::Accent, 52.0)
        .spacing(8.0)
        .glow(theme.palette.primary);
    assert_eq!(s.family, "Playfair Display");
    assert_eq!(s.color, theme.palette.text);
    assert_eq!(s.glow, Some(theme.palette.primary));
}

#[test]
fn layout_serializes_with_tags() {
    let mut f = SegmentFrame::new("seg", 3, RootStyle::new(Paint::solid(Rgba8::BLACK)).blur(2.0));
    f.push(Layer::new("flash", flash()).scale(1.2));
    let layout = FrameLayout {
        frame: FrameIndex(3),
        segments: vec![f],
    };
    let v = serde_json::to_value(&layout).unwrap();
    assert_eq!(v["frame"], 3);
    assert_eq!(v["segments"][0]["root"]["background"]["type"], "solid");
    assert_eq!(v["segments"][0]["root"]["background"]["color"], "#000000");
    assert_eq!(v["segments"][0]["layers"][0]["kind"]["type"], "flash");
    assert_eq!(v["segments"][0]["layers"][0]["transform"][0]["op"], "scale");
    assert_eq!(layout.layer_count(), 1);
    assert!(layout.segment("seg").is_some());
}
