use super::*;
use crate::{
    eval::timeline::TimelineBuilder,
    foundation::core::{Canvas, Fps, FrameIndex, Rgba8},
    scene::layer::{Layer, LayerKind, Paint, RootStyle, SegmentFrame},
    segments::composer::{ComposeCtx, ComposeInputs, from_fn},
};

fn layout(frame: u64, opacity: f64) -> FrameLayout {
    layout_at(frame, 3, opacity)
}

fn layout_at(frame: u64, local_frame: i64, opacity: f64) -> FrameLayout {
    let mut seg = SegmentFrame::new("s", local_frame, RootStyle::new(Paint::solid(Rgba8::BLACK)));
    seg.push(Layer::new("flash", LayerKind::Flash { color: Rgba8::WHITE }).opacity(opacity));
    FrameLayout {
        frame: FrameIndex(frame),
        segments: vec![seg],
    }
}

#[test]
fn equal_layouts_share_a_fingerprint() {
    let a = fingerprint_layout(&layout(10, 0.5)).unwrap();
    assert_eq!(a, fingerprint_layout(&layout(10, 0.5)).unwrap());
    assert_eq!(a, fingerprint_layout(&layout(99, 0.5)).unwrap());
}

#[test]
fn any_change_moves_the_fingerprint() {
    let a = fingerprint_layout(&layout(10, 0.5)).unwrap();
    let b = fingerprint_layout(&layout(10, 0.25)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn displays_as_32_hex_digits() {
    let s = FrameFingerprint { hi: 1, lo: 255 }.to_string();
    assert_eq!(s, "000000000000000100000000000000ff");
}

#[test]
fn local_frame_is_not_hashed() {
    let a = fingerprint_layout(&layout_at(10, 3, 0.5)).unwrap();
    assert_eq!(a, fingerprint_layout(&layout_at(11, 4, 0.5)).unwrap());
}

#[test]
fn still_frames_of_a_static_segment_match() {
    let still = from_fn("still", |frame, _ctx: &ComposeCtx<'_>| {
        let mut seg = SegmentFrame::new("still", frame, RootStyle::new(Paint::solid(Rgba8::BLACK)));
        seg.push(Layer::new("flash", LayerKind::Flash { color: Rgba8::WHITE }).opacity(0.4));
        seg
    });
    let tl = TimelineBuilder::new(
        Fps::integer(30),
        Canvas {
            width: 1080,
            height: 1920,
        },
        10,
    )
    .append("still", 10, still)
    .build()
    .unwrap();
    let inputs = ComposeInputs::default();

    let a = tl.evaluate(FrameIndex(1), &inputs).unwrap();
    let b = tl.evaluate(FrameIndex(2), &inputs).unwrap();
    assert_ne!(a.segments[0].local_frame, b.segments[0].local_frame);
    assert_eq!(a.segments[0].layers, b.segments[0].layers);
    assert_eq!(
        fingerprint_layout(&a).unwrap(),
        fingerprint_layout(&b).unwrap()
    );
}

#[test]
fn segment_name_is_hashed() {
    let a = layout(10, 0.5);
    let mut b = a.clone();
    b.segments[0].segment = "t".to_owned();
    assert_ne!(fingerprint_layout(&a).unwrap(), fingerprint_layout(&b).unwrap());
}
