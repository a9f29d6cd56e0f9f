use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::from_start_len(u64::MAX, 2).is_err());
}

#[test]
fn local_frame_is_signed_offset_from_start() {
    let r = FrameRange::from_start_len(150, 210).unwrap();
    assert_eq!(r.local_frame(FrameIndex(149)), -1);
    assert_eq!(r.local_frame(FrameIndex(150)), 0);
    assert_eq!(r.local_frame(FrameIndex(359)), 209);
    assert_eq!(r.end, FrameIndex(360));
}

#[test]
fn clamp_handles_empty_ranges() {
    let r = FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap();
    assert_eq!(r.clamp(FrameIndex(10)), FrameIndex(3));
    let r = FrameRange::new(FrameIndex(3), FrameIndex(6)).unwrap();
    assert_eq!(r.clamp(FrameIndex(10)), FrameIndex(5));
    assert_eq!(r.clamp(FrameIndex(0)), FrameIndex(3));
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123.0);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(0, 1).is_err());
}

#[test]
fn canvas_center_is_half_size() {
    let c = Canvas {
        width: 1080,
        height: 1920,
    };
    assert_eq!(c.center(), Point::new(540.0, 960.0));
}

#[test]
fn hex_colors_parse_and_format() {
    let lime = Rgba8::from_hex("#7FFF00").unwrap();
    assert_eq!(lime, Rgba8::rgb(127, 255, 0));
    assert_eq!(lime.to_hex(), "#7fff00");

    let faded = Rgba8::from_hex("7fff0026").unwrap();
    assert_eq!(faded.a, 0x26);
    assert_eq!(faded.to_hex(), "#7fff0026");

    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}

#[test]
fn with_alpha_matches_css_rgba() {
    let c = Rgba8::rgb(127, 255, 0).with_alpha(0.15);
    assert_eq!(c.a, 38);
    assert_eq!(Rgba8::WHITE.with_alpha(2.0).a, 255);
    assert_eq!(Rgba8::WHITE.with_alpha(f64::NAN).a, 0);
}

#[test]
fn colors_serialize_as_hex_strings() {
    let s = serde_json::to_string(&Rgba8::rgb(0, 212, 255)).unwrap();
    assert_eq!(s, "\"#00d4ff\"");
    let back: Rgba8 = serde_json::from_str(&s).unwrap();
    assert_eq!(back, Rgba8::rgb(0, 212, 255));
    assert!(serde_json::from_str::<Rgba8>("\"nope\"").is_err());
}
