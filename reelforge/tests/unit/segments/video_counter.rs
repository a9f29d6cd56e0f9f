use super::*;
use crate::{
    locale::lang::Lang,
    segments::test_support::{opacity_of, text_of, with_ctx},
};

fn at(frame: i64) -> SegmentFrame {
    with_ctx(Lang::En, |ctx| VideoCounter::default().compose(frame, ctx))
}

#[test]
fn shows_configured_count_and_localized_labels() {
    let f = at(100);
    assert_eq!(text_of(&f, "counter"), "+10");
    assert_eq!(text_of(&f, "counter_label"), "BEATS");
    assert_eq!(text_of(&f, "counter_caption"), "High Quality & Rare");
    assert_eq!(text_of(&f, "badge"), "🔥 EXCLUSIVE");

    let pt = with_ctx(Lang::Pt, |ctx| VideoCounter::new("+25").compose(100, ctx));
    assert_eq!(text_of(&pt, "counter"), "+25");
    assert_eq!(text_of(&pt, "exclusive_label"), "⚡ EXCLUSIVO");
}

#[test]
fn first_frame_is_blurred_and_empty() {
    let f = at(0);
    assert_eq!(f.root.blur_px, 20.0);
    assert_eq!(opacity_of(&f, "counter"), 0.0);
    assert_eq!(opacity_of(&f, "video"), 0.0);
    assert_eq!(opacity_of(&f, "produce_music"), 0.0);
}

#[test]
fn counter_waits_for_its_delay() {
    for frame in [0, 3, 5] {
        let f = at(frame);
        assert_eq!(opacity_of(&f, "counter"), 0.0);
        assert!((f.layer("counter").unwrap().total_scale() - 0.3).abs() < 1e-12);
    }
    assert!(opacity_of(&at(8), "counter") > 0.0);
}

#[test]
fn settles_then_blurs_out() {
    let f = at(150);
    assert!(f.root.blur_px < 0.1);
    assert!((opacity_of(&f, "video") - 1.0).abs() < 0.01);
    assert!((at(205).root.blur_px - 30.0).abs() < 0.1);
    assert!((at(209).root.blur_px - 30.0).abs() < 0.1);
}

#[test]
fn video_plays_from_segment_start() {
    let source = |frame| match &at(frame).layer("video").unwrap().kind {
        LayerKind::Video { source_frame, src, .. } => {
            assert_eq!(src, "wave.mp4");
            *source_frame
        }
        other => panic!("unexpected {other:?}"),
    };
    assert_eq!(source(0), 0);
    assert_eq!(source(42), 42);
    assert_eq!(source(-5), 0);
}

#[test]
fn scan_lines_wrap() {
    let top = |frame, name| match &at(frame).layer(name).unwrap().kind {
        LayerKind::ScanLine { top_pct, .. } => *top_pct,
        other => panic!("unexpected {other:?}"),
    };
    assert_eq!(top(10, "scan_line"), 40.0);
    assert_eq!(top(30, "scan_line"), 0.0);
    assert_eq!(top(10, "scan_line_faint"), 90.0);
    assert_eq!(top(15, "scan_line_faint"), 10.0);
}

#[test]
fn compose_is_pure() {
    assert_eq!(at(123), at(123));
}
