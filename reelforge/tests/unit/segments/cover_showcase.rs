use super::*;
use crate::{
    locale::lang::Lang,
    segments::test_support::{opacity_of, text_of, with_ctx},
};

fn at(frame: i64) -> SegmentFrame {
    with_ctx(Lang::En, |ctx| CoverShowcase.compose(frame, ctx))
}

#[test]
fn opens_blurred_zoomed_and_dark() {
    let f = at(0);
    assert_eq!(f.root.scale, 1.4);
    assert_eq!(f.root.blur_px, 30.0);
    assert_eq!(opacity_of(&f, "flash"), 0.0);
    assert_eq!(opacity_of(&f, "product_name"), 0.0);
    assert_eq!(opacity_of(&f, "tagline"), 0.0);
}

#[test]
fn flash_peaks_then_fades() {
    assert!((opacity_of(&at(6), "flash") - 0.8).abs() < 1e-9);
    assert!((opacity_of(&at(9), "flash") - 0.4).abs() < 1e-9);
    assert_eq!(opacity_of(&at(12), "flash"), 0.0);
    assert_eq!(opacity_of(&at(60), "flash"), 0.0);
}

#[test]
fn zoom_settles_after_twenty_frames() {
    assert!((at(10).root.scale - 1.2).abs() < 1e-9);
    assert_eq!(at(20).root.scale, 1.0);
    assert_eq!(at(100).root.scale, 1.0);
}

#[test]
fn negative_frames_hold_everything_at_rest() {
    let f = at(-25);
    assert_eq!(f.root.blur_px, 30.0);
    assert_eq!(opacity_of(&f, "product_name"), 0.0);
    assert_eq!(opacity_of(&f, "cover_image"), 0.0);
    assert_eq!(opacity_of(&f, "cta_text"), 0.0);
    assert_eq!(text_of(&f, "tagline"), "");
    assert_eq!(f.layer("badge").unwrap().total_scale(), 0.0);
}

#[test]
fn glitch_copies_only_inside_windows() {
    assert!(at(14).layer("glitch_green").is_some());
    assert!(at(46).layer("glitch_cyan").is_some());
    assert!(at(12).layer("glitch_green").is_none());
    assert!(at(30).layer("glitch_green").is_none());
    assert!(at(88).layer("glitch_cyan").is_none());
}

#[test]
fn tagline_types_itself_out() {
    assert_eq!(text_of(&at(35), "tagline"), "");
    let mid = text_of(&at(40), "tagline").chars().count();
    assert!(mid > 0 && mid < "PREMIUM BEATS COLLECTION".len());
    assert_eq!(text_of(&at(120), "tagline"), "PREMIUM BEATS COLLECTION");
}

#[test]
fn exit_blur_takes_over_at_the_end() {
    assert!(at(100).root.blur_px < 0.5);
    assert!((at(149).root.blur_px - 40.0).abs() < 0.5);
}

#[test]
fn uses_portuguese_copy() {
    let f = with_ctx(Lang::Pt, |ctx| CoverShowcase.compose(120, ctx));
    assert_eq!(text_of(&f, "cta_text"), "DISPONÍVEL AGORA");
    assert_eq!(text_of(&f, "badge"), "🔥 EDIÇÃO LIMITADA");
}

#[test]
fn layers_are_sorted_and_flash_is_on_top() {
    let f = at(50);
    assert!(f.layers.windows(2).all(|w| w[0].z <= w[1].z));
    assert_eq!(f.layers.last().unwrap().name, "flash");
    assert_eq!(f.layers_named("equalizer").count(), 1);
    assert_eq!(f.layers_named("equalizer_back").count(), 1);
}

#[test]
fn compose_is_pure() {
    assert_eq!(at(77), at(77));
}
