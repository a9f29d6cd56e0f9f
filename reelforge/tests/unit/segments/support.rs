use crate::{
    foundation::core::{Canvas, Fps},
    locale::lang::Lang,
    scene::layer::{LayerKind, SegmentFrame},
    segments::composer::{ComposeCtx, ComposeInputs},
};

pub(crate) fn with_ctx<R>(lang: Lang, f: impl FnOnce(&ComposeCtx<'_>) -> R) -> R {
    let inputs = ComposeInputs {
        lang,
        ..ComposeInputs::default()
    };
    let ctx = inputs.ctx(
        Fps::integer(30),
        Canvas {
            width: 1080,
            height: 1920,
        },
    );
    f(&ctx)
}

pub(crate) fn text_of<'a>(frame: &'a SegmentFrame, name: &str) -> &'a str {
    match frame.layer(name).map(|l| &l.kind) {
        Some(LayerKind::Text { text, .. }) => text,
        Some(LayerKind::Counter { value, .. }) => value,
        Some(LayerKind::Badge { text, .. }) => text,
        other => panic!("layer {name} is not text: {other:?}"),
    }
}

pub(crate) fn opacity_of(frame: &SegmentFrame, name: &str) -> f64 {
    frame
        .layer(name)
        .unwrap_or_else(|| panic!("missing layer {name}"))
        .opacity
}
