use super::*;
use crate::{
    foundation::core::Rgba8,
    scene::layer::{Paint, RootStyle, SegmentFrame},
    segments::composer::{ComposeCtx, from_fn},
};

fn canvas() -> Canvas {
    Canvas {
        width: 1080,
        height: 1920,
    }
}

fn blank(name: &'static str) -> impl SegmentComposer {
    from_fn(name, |frame, _ctx: &ComposeCtx<'_>| {
        SegmentFrame::new("blank", frame, RootStyle::new(Paint::solid(Rgba8::BLACK)))
    })
}

fn two_part() -> Timeline {
    TimelineBuilder::new(Fps::integer(30), canvas(), 360)
        .append("intro", 150, blank("a"))
        .append("counter", 210, blank("b"))
        .build()
        .unwrap()
}

#[test]
fn local_frames_follow_segment_offsets() {
    let tl = two_part();
    let at = |f| tl.active_at(FrameIndex(f)).map(|a| (a.name, a.local_frame));
    assert_eq!(at(0), Some(("intro", 0)));
    assert_eq!(at(149), Some(("intro", 149)));
    assert_eq!(at(150), Some(("counter", 0)));
    assert_eq!(at(359), Some(("counter", 209)));
    assert_eq!(at(360), None);
    assert_eq!(tl.active_at(FrameIndex(150)).unwrap().index, 1);
}

#[test]
fn segments_partition_the_duration() {
    let tl = two_part();
    let total: u64 = tl.segments().iter().map(|s| s.range().len_frames()).sum();
    assert_eq!(total, tl.duration());
    for pair in tl.segments().windows(2) {
        assert_eq!(pair[0].range().end, pair[1].range().start);
    }
    assert_eq!(tl.segments()[0].range().start, FrameIndex(0));
}

#[test]
fn explicit_ranges_are_accepted_when_contiguous() {
    let tl = TimelineBuilder::new(Fps::integer(30), canvas(), 20)
        .segment("a", 0, 5, blank("a"))
        .segment("b", 5, 15, blank("b"))
        .build()
        .unwrap();
    assert_eq!(tl.segments().len(), 2);
    assert_eq!(tl.segments()[1].composer().name(), "b");
}

#[test]
fn rejects_bad_partitions() {
    let build = |b: TimelineBuilder| b.build().unwrap_err();
    let new = || TimelineBuilder::new(Fps::integer(30), canvas(), 20);

    assert!(matches!(build(new()), ReelError::Timeline(_)));
    assert!(matches!(
        build(new().segment("a", 2, 18, blank("a"))),
        ReelError::Timeline(_)
    ));
    assert!(matches!(
        build(new().segment("a", 0, 10, blank("a")).segment("b", 12, 8, blank("b"))),
        ReelError::Timeline(_)
    ));
    assert!(matches!(
        build(new().segment("a", 0, 12, blank("a")).segment("b", 10, 10, blank("b"))),
        ReelError::Timeline(_)
    ));
    assert!(matches!(
        build(new().append("a", 10, blank("a")).append("b", 0, blank("b"))),
        ReelError::Timeline(_)
    ));
    assert!(matches!(
        build(new().append("a", 10, blank("a")).append("b", 5, blank("b"))),
        ReelError::Timeline(_)
    ));
    assert!(matches!(
        build(new().append("a", 10, blank("a")).append("a", 10, blank("b"))),
        ReelError::Timeline(_)
    ));
    assert!(matches!(
        build(new().append(" ", 20, blank("a"))),
        ReelError::Timeline(_)
    ));
}

#[test]
fn evaluate_names_the_segment_and_passes_local_frame() {
    let tl = two_part();
    let inputs = ComposeInputs::default();
    let layout = tl.evaluate(FrameIndex(200), &inputs).unwrap();
    assert_eq!(layout.frame, FrameIndex(200));
    assert_eq!(layout.segments.len(), 1);
    assert_eq!(layout.segments[0].segment, "counter");
    assert_eq!(layout.segments[0].local_frame, 50);
    assert!(layout.segment("counter").is_some());
}

#[test]
fn evaluate_rejects_frames_past_the_end() {
    let tl = two_part();
    let err = tl
        .evaluate(FrameIndex(360), &ComposeInputs::default())
        .unwrap_err();
    assert!(matches!(err, ReelError::Evaluation(_)));
}

#[test]
fn evaluation_is_order_independent() {
    let tl = two_part();
    let inputs = ComposeInputs::default();
    let first = tl.evaluate(FrameIndex(10), &inputs).unwrap();
    for f in [300, 5, 359, 150] {
        tl.evaluate(FrameIndex(f), &inputs).unwrap();
    }
    assert_eq!(tl.evaluate(FrameIndex(10), &inputs).unwrap(), first);
}
