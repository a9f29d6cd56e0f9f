//! Declarative layer descriptors produced by segment composers.
//!
//! A [`SegmentFrame`] is everything a renderer needs to draw one segment at one frame: a root style
//! applied to the whole segment and an ordered list of [`Layer`]s. Nothing here is retained
//! between frames.

use smallvec::SmallVec;

use crate::{
    animation::motion::{Bar, Particle, Spark},
    foundation::core::{FrameIndex, Point, Rgba8, Vec2},
    scene::theme::{FontRole, Theme},
};

/// Width and height in pixels.
pub type Size = kurbo::Size;

/// Color stop of a gradient, `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position along the gradient.
    pub offset: f64,
    /// Color at this position.
    pub color: Rgba8,
}

/// Gradient stops; four cover every gradient the creatives draw.
pub type Stops = SmallVec<[GradientStop; 4]>;

/// Fill of an area.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid {
        /// Color.
        color: Rgba8,
    },
    /// CSS `linear-gradient(angle, stops)`.
    Linear {
        /// Direction in degrees, 180 is top to bottom.
        angle_deg: f64,
        /// Stops.
        stops: Stops,
    },
    /// CSS `radial-gradient(ellipse at center, stops)`.
    Radial {
        /// Center in percent of the layer box.
        center_pct: Vec2,
        /// Stops.
        stops: Stops,
    },
}

impl Paint {
    /// Flat `color`.
    pub fn solid(color: Rgba8) -> Self {
        Self::Solid { color }
    }

    /// Linear gradient through `stops` given as `(offset, color)`.
    pub fn linear(angle_deg: f64, stops: &[(f64, Rgba8)]) -> Self {
        Self::Linear {
            angle_deg,
            stops: stops_of(stops),
        }
    }

    /// Radial gradient centered at `center_pct`.
    pub fn radial(center_pct: Vec2, stops: &[(f64, Rgba8)]) -> Self {
        Self::Radial {
            center_pct,
            stops: stops_of(stops),
        }
    }
}

fn stops_of(stops: &[(f64, Rgba8)]) -> Stops {
    stops
        .iter()
        .map(|&(offset, color)| GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        })
        .collect()
}

/// Resolved typography of a text run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// Role the family was resolved from.
    pub role: FontRole,
    /// Font family name.
    pub family: String,
    /// Font size in pixels.
    pub size_px: f64,
    /// CSS font weight.
    pub weight: u16,
    /// Fill color.
    pub color: Rgba8,
    /// Extra spacing between letters in pixels.
    pub letter_spacing: f64,
    /// Italic face.
    pub italic: bool,
    /// Color of the text glow, if any.
    pub glow: Option<Rgba8>,
}

impl TextStyle {
    /// Regular-weight text in the theme family for `role`.
    pub fn new(theme: &Theme, role: FontRole, size_px: f64) -> Self {
        Self {
            role,
            family: theme.fonts.family(role).to_owned(),
            size_px,
            weight: 400,
            color: theme.palette.text,
            letter_spacing: 0.0,
            italic: false,
            glow: None,
        }
    }

    /// Replace the weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Replace the fill color.
    pub fn color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    /// Replace the letter spacing.
    pub fn spacing(mut self, px: f64) -> Self {
        self.letter_spacing = px;
        self
    }

    /// Use the italic face.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Add a glow around the glyphs.
    pub fn glow(mut self, color: Rgba8) -> Self {
        self.glow = Some(color);
        self
    }
}

/// Units of particle positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    /// Percent of the segment box.
    Percent,
    /// Canvas pixels.
    Pixels,
}

/// What a layer draws.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerKind {
    /// Full-segment fill.
    Fill {
        /// Fill.
        paint: Paint,
    },
    /// Soft radial glow.
    Glow {
        /// Glow color at full strength.
        color: Rgba8,
        /// Extent of the glow.
        size: Size,
        /// Strength multiplier applied to `color`'s alpha.
        intensity: f64,
    },
    /// Conic light rays sweeping around a point.
    LightRays {
        /// Ray color.
        color: Rgba8,
        /// Start angle of the sweep.
        rotation_deg: f64,
        /// Sweep center in percent of the segment.
        center_pct: Vec2,
    },
    /// Decorative frosted rectangle.
    GlassPanel {
        /// Panel size.
        size: Size,
        /// Corner radius.
        corner_radius: f64,
        /// Frosted fill.
        fill: Paint,
        /// Hairline border color.
        border: Rgba8,
    },
    /// Glass frame holding content, with a glowing border.
    Card {
        /// Outer size.
        size: Size,
        /// Corner radius.
        corner_radius: f64,
        /// Border color.
        border: Rgba8,
        /// Border width.
        border_width: f64,
        /// Color of the outer glow.
        glow: Rgba8,
    },
    /// Still image.
    Image {
        /// Asset path relative to the asset root.
        src: String,
        /// Drawn size.
        size: Size,
        /// Corner radius.
        corner_radius: f64,
    },
    /// Muted looping video.
    Video {
        /// Asset path relative to the asset root.
        src: String,
        /// Drawn size.
        size: Size,
        /// Corner radius.
        corner_radius: f64,
        /// Source frame to show.
        source_frame: u64,
    },
    /// Text run; `\n` breaks lines.
    Text {
        /// Content.
        text: String,
        /// Typography.
        style: TextStyle,
    },
    /// Large counter numeral.
    Counter {
        /// Counter text, such as `+10`.
        value: String,
        /// Typography.
        style: TextStyle,
    },
    /// Light dot travelling around a card border.
    BorderLight {
        /// Center in percent of the card box.
        position_pct: Vec2,
        /// Diameter in pixels.
        diameter: f64,
        /// Light color.
        color: Rgba8,
    },
    /// Orbiting sparks, offsets relative to the layer position.
    Sparks {
        /// Sparks.
        sparks: Vec<Spark>,
        /// Spark color.
        color: Rgba8,
    },
    /// Free particles.
    Particles {
        /// Particles.
        particles: Vec<Particle>,
        /// Units of particle positions.
        units: Units,
        /// Particle color.
        color: Rgba8,
    },
    /// Equalizer bars anchored on the bottom edge.
    Equalizer {
        /// Bars, left to right.
        bars: Vec<Bar>,
        /// Bar color.
        color: Rgba8,
        /// Gap between bars in pixels.
        gap: f64,
    },
    /// Full-segment color flash.
    Flash {
        /// Flash color.
        color: Rgba8,
    },
    /// Pill badge.
    Badge {
        /// Label.
        text: String,
        /// Typography.
        style: TextStyle,
        /// Pill fill.
        fill: Paint,
    },
    /// Horizontal line sweeping over a box.
    ScanLine {
        /// Vertical position in percent of the box.
        top_pct: f64,
        /// Line thickness in pixels.
        height: f64,
        /// Line color.
        color: Rgba8,
    },
    /// Soft highlight band sweeping over a card.
    ShineSweep {
        /// Vertical position in percent of the card.
        top_pct: f64,
        /// Band height in pixels.
        height: f64,
    },
    /// Chevron pointing down.
    Arrow {
        /// Chevron box size in pixels.
        size: f64,
        /// Stroke width.
        stroke: f64,
        /// Stroke color.
        color: Rgba8,
    },
}

/// One 2D/3D transform step, applied in list order (CSS semantics).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformOp {
    /// Translation in pixels.
    Translate {
        /// Offset.
        by: Vec2,
    },
    /// Uniform scale.
    Scale {
        /// Factor.
        factor: f64,
    },
    /// Vertical mirror scale.
    ScaleY {
        /// Factor.
        factor: f64,
    },
    /// Rotation in degrees.
    Rotate {
        /// Angle.
        deg: f64,
    },
    /// Horizontal skew in degrees.
    SkewX {
        /// Angle.
        deg: f64,
    },
    /// Vertical skew in degrees.
    SkewY {
        /// Angle.
        deg: f64,
    },
    /// Perspective tilt around the X and Y axes in degrees.
    Tilt {
        /// `rotateX`.
        x_deg: f64,
        /// `rotateY`.
        y_deg: f64,
        /// Perspective distance in pixels.
        perspective: f64,
    },
}

/// Transform list; most layers need at most four steps.
pub type Transform = SmallVec<[TransformOp; 4]>;

/// One drawable element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    /// Stable element name inside its segment.
    pub name: &'static str,
    /// What is drawn.
    pub kind: LayerKind,
    /// Nominal center of the element in canvas pixels.
    pub position: Point,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Transform steps around `position`.
    pub transform: Transform,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
    /// Stacking order; higher draws later.
    pub z: i32,
}

fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl Layer {
    /// Opaque untransformed layer at the origin.
    pub fn new(name: &'static str, kind: LayerKind) -> Self {
        Self {
            name,
            kind,
            position: Point::ORIGIN,
            opacity: 1.0,
            transform: Transform::new(),
            blur_px: 0.0,
            z: 0,
        }
    }

    /// Place the element center.
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Replace the opacity; clamped into `[0, 1]`, NaN becomes 0.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = unit(opacity);
        self
    }

    /// Append a translation.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.transform.push(TransformOp::Translate {
            by: Vec2::new(x, y),
        });
        self
    }

    /// Append a uniform scale.
    pub fn scale(mut self, factor: f64) -> Self {
        self.transform.push(TransformOp::Scale { factor });
        self
    }

    /// Append a vertical scale.
    pub fn scale_y(mut self, factor: f64) -> Self {
        self.transform.push(TransformOp::ScaleY { factor });
        self
    }

    /// Append a rotation.
    pub fn rotate(mut self, deg: f64) -> Self {
        self.transform.push(TransformOp::Rotate { deg });
        self
    }

    /// Append a horizontal skew.
    pub fn skew_x(mut self, deg: f64) -> Self {
        self.transform.push(TransformOp::SkewX { deg });
        self
    }

    /// Append a vertical skew.
    pub fn skew_y(mut self, deg: f64) -> Self {
        self.transform.push(TransformOp::SkewY { deg });
        self
    }

    /// Append a perspective tilt, `tilt` as `(rotate_x, rotate_y)` degrees.
    pub fn tilt(mut self, tilt: Vec2) -> Self {
        self.transform.push(TransformOp::Tilt {
            x_deg: tilt.x,
            y_deg: tilt.y,
            perspective: 1000.0,
        });
        self
    }

    /// Replace the blur radius; negative values become 0.
    pub fn blur(mut self, px: f64) -> Self {
        self.blur_px = if px.is_nan() { 0.0 } else { px.max(0.0) };
        self
    }

    /// Replace the stacking order.
    pub fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    /// Product of every uniform scale step.
    pub fn total_scale(&self) -> f64 {
        self.transform
            .iter()
            .map(|op| match op {
                TransformOp::Scale { factor } => *factor,
                _ => 1.0,
            })
            .product()
    }

    /// Sum of every translation step.
    pub fn total_translation(&self) -> Vec2 {
        self.transform
            .iter()
            .map(|op| match op {
                TransformOp::Translate { by } => *by,
                _ => Vec2::ZERO,
            })
            .fold(Vec2::ZERO, |a, b| a + b)
    }
}

/// Style applied to a whole segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RootStyle {
    /// Segment backdrop.
    pub background: Paint,
    /// Blur over the whole segment.
    pub blur_px: f64,
    /// Opacity of the whole segment.
    pub opacity: f64,
    /// Uniform scale of the whole segment around the canvas center.
    pub scale: f64,
}

impl RootStyle {
    /// Unblurred, opaque, unscaled root over `background`.
    pub fn new(background: Paint) -> Self {
        Self {
            background,
            blur_px: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    }

    /// Replace the blur radius; negative values become 0.
    pub fn blur(mut self, px: f64) -> Self {
        self.blur_px = if px.is_nan() { 0.0 } else { px.max(0.0) };
        self
    }

    /// Replace the opacity; clamped into `[0, 1]`.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = unit(opacity);
        self
    }

    /// Replace the scale.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

/// One segment evaluated at one local frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SegmentFrame {
    /// Segment name.
    pub segment: String,
    /// Frame relative to the segment start.
    pub local_frame: i64,
    /// Whole-segment style.
    pub root: RootStyle,
    /// Layers in paint order.
    pub layers: Vec<Layer>,
}

impl SegmentFrame {
    /// Empty frame of `segment`.
    pub fn new(segment: impl Into<String>, local_frame: i64, root: RootStyle) -> Self {
        Self {
            segment: segment.into(),
            local_frame,
            root,
            layers: Vec::new(),
        }
    }

    /// Append a layer.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Append many layers.
    pub fn extend(&mut self, layers: impl IntoIterator<Item = Layer>) {
        self.layers.extend(layers);
    }

    /// Stable-sort layers by `z`, keeping insertion order among equal `z`.
    pub fn finish(mut self) -> Self {
        self.layers.sort_by_key(|l| l.z);
        self
    }

    /// First layer called `name`.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Every layer called `name`.
    pub fn layers_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Layer> + 'a {
        self.layers.iter().filter(move |l| l.name == name)
    }
}

/// Everything visible at one global frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameLayout {
    /// Global frame.
    pub frame: FrameIndex,
    /// Active segments, bottom first.
    pub segments: Vec<SegmentFrame>,
}

impl FrameLayout {
    /// Active segment called `name`.
    pub fn segment(&self, name: &str) -> Option<&SegmentFrame> {
        self.segments.iter().find(|s| s.segment == name)
    }

    /// Total layer count over all segments.
    pub fn layer_count(&self) -> usize {
        self.segments.iter().map(|s| s.layers.len()).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layer.rs"]
mod tests;
