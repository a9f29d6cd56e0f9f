use super::*;

fn spec() -> CompositionSpec {
    CompositionSpec {
        id: "Demo".to_owned(),
        duration_frames: 90,
        fps: Fps::integer(30),
        canvas: Canvas {
            width: 1080,
            height: 1920,
        },
    }
}

#[test]
fn duration_in_seconds() {
    assert_eq!(spec().duration_secs(), 3.0);
}

#[test]
fn rejects_unusable_specs() {
    assert!(spec().validate().is_ok());

    let mut s = spec();
    s.id = "  ".to_owned();
    assert!(s.validate().is_err());

    let mut s = spec();
    s.duration_frames = 0;
    assert!(s.validate().is_err());
    assert!(s.timeline().is_err());

    let mut s = spec();
    s.canvas.height = 0;
    assert!(s.validate().is_err());

    let mut s = spec();
    s.fps = Fps { num: 30, den: 0 };
    assert!(s.validate().is_err());
}
