use crate::{
    animation::spring::Spring,
    foundation::core::{Canvas, Fps, Point},
    locale::{
        lang::Lang,
        strings::{LocalizedStrings, lookup},
    },
    scene::{layer::SegmentFrame, theme::Theme},
    segments::assets::AssetRefs,
};

/// Read-only inputs shared by every composer for one frame.
#[derive(Clone, Copy, Debug)]
pub struct ComposeCtx<'a> {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Look of the creative.
    pub theme: &'a Theme,
    /// Copy in the selected language.
    pub strings: &'a LocalizedStrings,
    /// Media references.
    pub assets: &'a AssetRefs,
}

impl ComposeCtx<'_> {
    /// Canvas point at `(x, y)` percent.
    pub fn pct(&self, x: f64, y: f64) -> Point {
        Point::new(
            f64::from(self.canvas.width) * x / 100.0,
            f64::from(self.canvas.height) * y / 100.0,
        )
    }

    /// Canvas center.
    pub fn center(&self) -> Point {
        self.canvas.center()
    }

    /// `spring` sampled at `frame` with this timeline's frame rate.
    pub fn spring(&self, spring: Spring, frame: i64) -> f64 {
        spring.sample(frame, self.fps)
    }
}

/// Per-evaluation inputs a host passes to [`crate::Timeline::evaluate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposeInputs {
    /// Language of the copy.
    pub lang: Lang,
    /// Look of the creative.
    pub theme: Theme,
    /// Media references.
    pub assets: AssetRefs,
}

impl ComposeInputs {
    /// Context for a timeline running at `fps` on `canvas`.
    pub fn ctx(&self, fps: Fps, canvas: Canvas) -> ComposeCtx<'_> {
        ComposeCtx {
            fps,
            canvas,
            theme: &self.theme,
            strings: lookup(self.lang),
            assets: &self.assets,
        }
    }
}

/// Builds the layers of one segment at a local frame.
///
/// Implementations must be pure: the result depends only on `local_frame` and `ctx`, so frames
/// can be evaluated in any order and any number of times. `local_frame` may lie outside the
/// segment (negative or past its end) when a host samples ahead; composers still return a frame.
pub trait SegmentComposer: Send + Sync {
    /// Kind of segment, such as `"cover_showcase"`.
    fn name(&self) -> &str;

    /// Layers at `local_frame`.
    fn compose(&self, local_frame: i64, ctx: &ComposeCtx<'_>) -> SegmentFrame;
}

/// Composer backed by a closure.
pub struct FnComposer<F> {
    name: String,
    f: F,
}

impl<F> SegmentComposer for FnComposer<F>
where
    F: Fn(i64, &ComposeCtx<'_>) -> SegmentFrame + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn compose(&self, local_frame: i64, ctx: &ComposeCtx<'_>) -> SegmentFrame {
        (self.f)(local_frame, ctx)
    }
}

/// Wrap a closure as a [`SegmentComposer`].
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnComposer<F>
where
    F: Fn(i64, &ComposeCtx<'_>) -> SegmentFrame + Send + Sync,
{
    FnComposer {
        name: name.into(),
        f,
    }
}
