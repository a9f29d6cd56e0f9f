//! reelforge evaluates frame-parametrized motion creatives.
//!
//! A creative is a [`Timeline`] of segments. Evaluating a frame finds the active segment and asks
//! its [`SegmentComposer`] for an ordered list of declarative [`Layer`]s, recomputed from scratch
//! out of springs, interpolations and periodic motion. Nothing is rasterized here; a host draws
//! the returned [`FrameLayout`].
//!
//! - Build the stock creative with [`creative_timeline`] (or your own with [`TimelineBuilder`])
//! - Evaluate any frame, in any order, with [`Timeline::evaluate`]
//! - Compare frames cheaply with [`fingerprint_layout`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod composition;
pub(crate) mod eval;
pub(crate) mod locale;
pub(crate) mod scene;
pub(crate) mod segments;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Rgba8, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{Extrapolate, InterpolateOpts, interpolate, ramp, remap};
pub use crate::animation::motion::{
    Bar, DriftField, Equalizer, FloatingParticles, Glitch, GlitchSample, Orbit, Oscillator,
    Particle, RisingParticles, Rotation, Spark, Tilt, Wave, border_light_position, typewriter,
};
pub use crate::animation::spring::{Spring, SpringConfig, settle_frames, spring};

pub use crate::locale::lang::Lang;
pub use crate::locale::strings::{FolderItem, LocalizedStrings, lookup};

pub use crate::scene::layer::{
    FrameLayout, GradientStop, Layer, LayerKind, Paint, RootStyle, SegmentFrame, Size, Stops,
    TextStyle, Transform, TransformOp, Units,
};
pub use crate::scene::theme::{FontRole, Fonts, Palette, Theme};

pub use crate::segments::assets::{AssetRefs, normalize_rel_path};
pub use crate::segments::composer::{
    ComposeCtx, ComposeInputs, FnComposer, SegmentComposer, from_fn,
};
pub use crate::segments::{ContentCounter, CoverShowcase, CtaSection, FolderList, VideoCounter};

pub use crate::eval::fingerprint::{FrameFingerprint, fingerprint_layout};
pub use crate::eval::timeline::{ActiveSegment, Timeline, TimelineBuilder, TimelineSegment};

pub use crate::composition::creative::{
    CREATIVE_ID, CounterStyle, CreativeConfig, beats_motion_creatives, creative_timeline,
};
pub use crate::composition::spec::CompositionSpec;
