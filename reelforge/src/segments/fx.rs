//! Sub-effects shared by several segments.
//!
//! Each builder takes the constants that differ between segments as parameters; the callers keep
//! the exact values of their own segment.

use crate::{
    animation::{
        interpolate::{ramp, remap},
        motion::{Equalizer, FloatingParticles, Orbit, Rotation, border_light_position},
    },
    foundation::core::{Point, Rgba8, Vec2},
    scene::{
        layer::{Layer, LayerKind, Paint, Size, TextStyle, Transform, TransformOp, Units},
        theme::FontRole,
    },
    segments::composer::ComposeCtx,
};

/// Dark green middle stop of the vertical backdrop gradient.
pub(crate) const BACKDROP_MID: Rgba8 = Rgba8::rgb(0x0a, 0x1a, 0x0a);

/// Black to dark green to black, top to bottom.
pub(crate) fn backdrop(ctx: &ComposeCtx<'_>) -> Paint {
    let bg = ctx.theme.palette.bg;
    Paint::linear(180.0, &[(0.0, bg), (0.5, BACKDROP_MID), (1.0, bg)])
}

/// Blur that clears as an entrance spring completes.
pub(crate) fn entrance_blur(progress: f64, from_px: f64) -> f64 {
    remap(progress, from_px, 0.0)
}

/// Clamped exit ramp from 0 to `to` over `[start, end]`.
pub(crate) fn exit_ramp(frame: f64, (start, end): (f64, f64), to: f64) -> f64 {
    ramp(frame, (start, end), (0.0, to))
}

/// Shared transform and opacity of a cluster of layers, such as a card and its decorations.
#[derive(Clone, Debug)]
pub(crate) struct Group {
    position: Point,
    transform: Transform,
    opacity: f64,
}

impl Group {
    pub(crate) fn at(position: Point) -> Self {
        Self {
            position,
            transform: Transform::new(),
            opacity: 1.0,
        }
    }

    pub(crate) fn translate(mut self, x: f64, y: f64) -> Self {
        self.transform.push(TransformOp::Translate {
            by: Vec2::new(x, y),
        });
        self
    }

    pub(crate) fn scale(mut self, factor: f64) -> Self {
        self.transform.push(TransformOp::Scale { factor });
        self
    }

    pub(crate) fn tilt(mut self, tilt: Vec2) -> Self {
        self.transform.push(TransformOp::Tilt {
            x_deg: tilt.x,
            y_deg: tilt.y,
            perspective: 1000.0,
        });
        self
    }

    pub(crate) fn skew_x(mut self, deg: f64) -> Self {
        if deg != 0.0 {
            self.transform.push(TransformOp::SkewX { deg });
        }
        self
    }

    pub(crate) fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Child layer inheriting the group transform; `opacity` is multiplied by the group's.
    pub(crate) fn layer(&self, name: &'static str, kind: LayerKind, opacity: f64) -> Layer {
        let mut l = Layer::new(name, kind)
            .at(self.position)
            .opacity(self.opacity * opacity);
        l.transform = self.transform.clone();
        l
    }
}

/// Conic rays turning at `deg_per_frame` around `center_pct`.
pub(crate) fn light_rays(
    ctx: &ComposeCtx<'_>,
    frame: f64,
    deg_per_frame: f64,
    center_pct: (f64, f64),
    opacity: f64,
) -> Layer {
    Layer::new(
        "light_rays",
        LayerKind::LightRays {
            color: ctx.theme.palette.primary.with_alpha(0.08),
            rotation_deg: frame * deg_per_frame,
            center_pct: Vec2::new(center_pct.0, center_pct.1),
        },
    )
    .at(ctx.center())
    .opacity(opacity)
    .z(1)
}

/// Elliptical primary-colored glow over the backdrop, pulsing with `pulse`.
pub(crate) fn glow_overlay(
    ctx: &ComposeCtx<'_>,
    center_pct: (f64, f64),
    size_pct: (f64, f64),
    alpha: f64,
    pulse: f64,
) -> Layer {
    let size = Size::new(
        f64::from(ctx.canvas.width) * size_pct.0 / 100.0,
        f64::from(ctx.canvas.height) * size_pct.1 / 100.0,
    );
    Layer::new(
        "glow_overlay",
        LayerKind::Glow {
            color: ctx.theme.palette.primary.with_alpha(alpha),
            size,
            intensity: 1.0,
        },
    )
    .at(ctx.pct(center_pct.0, center_pct.1))
    .opacity(pulse)
    .z(2)
}

/// Decorative frosted panel drifting with the segment float.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PanelSpec {
    pub(crate) name: &'static str,
    pub(crate) center_pct: (f64, f64),
    pub(crate) size: (f64, f64),
    pub(crate) corner_radius: f64,
    pub(crate) rotate_deg: f64,
    /// Multiplier on the segment float offset; negative drifts against it.
    pub(crate) float_mul: f64,
    /// Green tint instead of white.
    pub(crate) tinted: bool,
    pub(crate) fill_alpha: f64,
    pub(crate) border_alpha: f64,
    /// Share of the entrance spring reached as opacity.
    pub(crate) opacity: f64,
}

pub(crate) fn glass_panel(
    ctx: &ComposeCtx<'_>,
    spec: PanelSpec,
    float_y: f64,
    progress: f64,
) -> Layer {
    let p = &ctx.theme.palette;
    let tint = if spec.tinted { p.primary } else { p.text };
    Layer::new(
        spec.name,
        LayerKind::GlassPanel {
            size: Size::new(spec.size.0, spec.size.1),
            corner_radius: spec.corner_radius,
            fill: Paint::linear(
                135.0,
                &[
                    (0.0, tint.with_alpha(spec.fill_alpha)),
                    (1.0, p.text.with_alpha(0.02)),
                ],
            ),
            border: tint.with_alpha(spec.border_alpha),
        },
    )
    .at(ctx.pct(spec.center_pct.0, spec.center_pct.1))
    .rotate(spec.rotate_deg)
    .translate(0.0, float_y * spec.float_mul)
    .opacity(progress * spec.opacity)
    .z(3)
}

/// Equalizer strip on the bottom edge.
pub(crate) fn equalizer(
    ctx: &ComposeCtx<'_>,
    name: &'static str,
    eq: &Equalizer,
    frame: f64,
    strip_height: f64,
    gap: f64,
    opacity: f64,
) -> Layer {
    let y = f64::from(ctx.canvas.height) - strip_height / 2.0;
    Layer::new(
        name,
        LayerKind::Equalizer {
            bars: eq.sample(frame),
            color: ctx.theme.palette.primary,
            gap,
        },
    )
    .at(Point::new(ctx.center().x, y))
    .opacity(opacity)
    .z(4)
}

/// Percent-positioned particles drifting over the whole segment.
pub(crate) fn floating_particles(
    ctx: &ComposeCtx<'_>,
    preset: &FloatingParticles,
    frame: f64,
    opacity: f64,
) -> Layer {
    Layer::new(
        "particles",
        LayerKind::Particles {
            particles: preset.sample(frame),
            units: Units::Percent,
            color: ctx.theme.palette.primary,
        },
    )
    .at(ctx.center())
    .opacity(opacity)
    .blur(1.0)
    .z(6)
}

/// Orbiting sparks around a group.
pub(crate) fn sparks(
    ctx: &ComposeCtx<'_>,
    group: &Group,
    orbit: &Orbit,
    frame: f64,
    opacity: f64,
) -> Layer {
    group
        .layer(
            "sparks",
            LayerKind::Sparks {
                sparks: orbit.sparks(frame),
                color: ctx.theme.palette.primary,
            },
            opacity,
        )
        .z(10)
}

/// Soft glow behind a card.
pub(crate) fn card_glow(
    ctx: &ComposeCtx<'_>,
    group: &Group,
    size: Size,
    alpha: f64,
    pulse: f64,
    blur_px: f64,
) -> Layer {
    group
        .layer(
            "card_glow",
            LayerKind::Glow {
                color: ctx.theme.palette.primary.with_alpha(alpha),
                size,
                intensity: pulse,
            },
            1.0,
        )
        .blur(blur_px)
        .z(7)
}

/// Light dot circling a card border.
pub(crate) fn border_light(
    ctx: &ComposeCtx<'_>,
    group: &Group,
    rotation: Rotation,
    frame: f64,
    radius_pct: f64,
    diameter: f64,
    opacity: f64,
) -> Layer {
    group
        .layer(
            "border_light",
            LayerKind::BorderLight {
                position_pct: border_light_position(rotation.angle(frame), radius_pct),
                diameter,
                color: ctx.theme.palette.primary,
            },
            opacity,
        )
        .blur(8.0)
        .z(20)
}

/// Primary-to-glow pill badge popping in with `progress`.
pub(crate) fn badge(
    ctx: &ComposeCtx<'_>,
    group: &Group,
    text: &str,
    size_px: f64,
    offset: Vec2,
    progress: f64,
) -> Layer {
    let p = &ctx.theme.palette;
    group
        .layer(
            "badge",
            LayerKind::Badge {
                text: text.to_owned(),
                style: TextStyle::new(ctx.theme, FontRole::Body, size_px)
                    .weight(900)
                    .color(Rgba8::BLACK)
                    .spacing(2.0),
                fill: Paint::linear(135.0, &[(0.0, p.primary), (1.0, p.glow)]),
            },
            1.0,
        )
        .translate(offset.x, offset.y)
        .scale(remap(progress, 0.0, 1.0))
        .z(30)
}

/// Glass frame around the cover art, with shine and mirror reflection.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CoverCard {
    pub(crate) image_px: f64,
    pub(crate) padding: f64,
    pub(crate) corner_radius: f64,
    pub(crate) image_radius: f64,
    pub(crate) border_alpha: f64,
    pub(crate) reflection_height: f64,
    pub(crate) reflection_opacity: f64,
}

impl CoverCard {
    /// Outer size of the frame.
    pub(crate) fn size(&self) -> Size {
        let side = self.image_px + self.padding * 2.0;
        Size::new(side, side)
    }

    pub(crate) fn layers(
        &self,
        ctx: &ComposeCtx<'_>,
        group: &Group,
        pulse: f64,
    ) -> [Layer; 4] {
        let p = &ctx.theme.palette;
        let size = self.size();
        let image = Size::new(self.image_px, self.image_px);
        let src = ctx.assets.cover_image.clone();
        let below = size.height / 2.0 + 8.0 + self.reflection_height / 2.0;
        [
            group
                .layer(
                    "cover_frame",
                    LayerKind::Card {
                        size,
                        corner_radius: self.corner_radius,
                        border: p.primary.with_alpha(self.border_alpha + pulse * 0.3),
                        border_width: 2.0,
                        glow: p.primary.with_alpha(0.2 * pulse),
                    },
                    1.0,
                )
                .z(8),
            group
                .layer(
                    "cover_image",
                    LayerKind::Image {
                        src: src.clone(),
                        size: image,
                        corner_radius: self.image_radius,
                    },
                    1.0,
                )
                .z(9),
            group
                .layer(
                    "cover_shine",
                    LayerKind::Fill {
                        paint: Paint::linear(
                            180.0,
                            &[(0.0, p.text.with_alpha(0.1)), (0.5, Rgba8::TRANSPARENT)],
                        ),
                    },
                    1.0,
                )
                .z(9),
            group
                .layer(
                    "cover_reflection",
                    LayerKind::Image {
                        src,
                        size: Size::new(self.image_px, self.reflection_height),
                        corner_radius: self.image_radius,
                    },
                    self.reflection_opacity,
                )
                .translate(0.0, below)
                .scale_y(-1.0)
                .z(8),
        ]
    }
}

/// Glass card holding a large counter, its label and an optional caption.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CounterCard {
    /// Nominal outer size of the card.
    pub(crate) size: (f64, f64),
    pub(crate) padding_y: f64,
    pub(crate) count_px: f64,
    /// Counter scale at rest, before the count spring starts.
    pub(crate) count_scale_from: f64,
    pub(crate) label_spacing: f64,
    pub(crate) caption_alpha: f64,
    pub(crate) fill_alpha: f64,
    /// Alpha of the outer glow at full pulse.
    pub(crate) glow_alpha: f64,
    /// How far the outer glow extends past the card.
    pub(crate) glow_inset: f64,
    pub(crate) glow_blur: f64,
}

/// Text content and progress values for [`CounterCard::layers`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct CounterText<'a> {
    pub(crate) count: &'a str,
    pub(crate) label: &'a str,
    pub(crate) caption: Option<&'a str>,
    /// Count spring.
    pub(crate) count_progress: f64,
    /// Label and caption spring.
    pub(crate) entrance: f64,
}

impl CounterCard {
    pub(crate) fn size(&self) -> Size {
        Size::new(self.size.0, self.size.1)
    }

    /// Outer glow, card, counter, label, caption (when present) and glass shine.
    pub(crate) fn layers(
        &self,
        ctx: &ComposeCtx<'_>,
        group: &Group,
        text: CounterText<'_>,
        pulse: f64,
    ) -> Vec<Layer> {
        let p = &ctx.theme.palette;
        let size = self.size();
        let count_y = -size.height / 2.0 + self.padding_y + self.count_px / 2.0;
        let label_y = count_y + self.count_px / 2.0 + 8.0 + 30.0;
        let caption_y = label_y + 30.0 + 18.0 + 13.0;

        let mut out = Vec::with_capacity(6);
        out.push(card_glow(
            ctx,
            group,
            Size::new(
                size.width + self.glow_inset * 2.0,
                size.height + self.glow_inset * 2.0,
            ),
            self.glow_alpha,
            pulse,
            self.glow_blur,
        ));
        out.push(
            group
                .layer(
                    "counter_card",
                    LayerKind::Card {
                        size,
                        corner_radius: 30.0,
                        border: p.primary.with_alpha(0.25 + pulse * 0.25),
                        border_width: 2.0,
                        glow: p.primary.with_alpha(self.fill_alpha * pulse),
                    },
                    1.0,
                )
                .z(8),
        );
        out.push(
            group
                .layer(
                    "counter",
                    LayerKind::Counter {
                        value: text.count.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Headline, self.count_px)
                            .glow(p.primary),
                    },
                    text.count_progress,
                )
                .translate(0.0, count_y)
                .scale(remap(text.count_progress, self.count_scale_from, 1.0))
                .z(12),
        );
        out.push(
            group
                .layer(
                    "counter_label",
                    LayerKind::Text {
                        text: text.label.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Accent, 52.0)
                            .color(p.primary)
                            .spacing(self.label_spacing)
                            .glow(p.primary),
                    },
                    text.entrance,
                )
                .translate(0.0, label_y + remap(text.entrance, 20.0, 0.0))
                .z(12),
        );
        if let Some(caption) = text.caption {
            out.push(
                group
                    .layer(
                        "counter_caption",
                        LayerKind::Text {
                            text: caption.to_owned(),
                            style: TextStyle::new(ctx.theme, FontRole::Accent, 22.0)
                                .weight(600)
                                .italic()
                                .color(p.text.with_alpha(self.caption_alpha)),
                        },
                        text.entrance,
                    )
                    .translate(0.0, caption_y)
                    .z(12),
            );
        }
        out.push(
            group
                .layer(
                    "counter_shine",
                    LayerKind::Fill {
                        paint: Paint::linear(
                            180.0,
                            &[(0.0, p.text.with_alpha(0.08)), (0.45, Rgba8::TRANSPARENT)],
                        ),
                    },
                    1.0,
                )
                .z(9),
        );
        out
    }
}

/// Glass pill behind a line of text.
pub(crate) fn glass_pill(
    ctx: &ComposeCtx<'_>,
    group: &Group,
    size: Size,
    tint: Rgba8,
    border_alpha: f64,
) -> Layer {
    group
        .layer(
            "pill",
            LayerKind::GlassPanel {
                size,
                corner_radius: size.height / 2.0,
                fill: Paint::linear(
                    135.0,
                    &[(0.0, tint.with_alpha(0.12)), (1.0, tint.with_alpha(0.04))],
                ),
                border: tint.with_alpha(border_alpha),
            },
            1.0,
        )
        .z(11)
}

#[cfg(test)]
#[path = "../../tests/unit/segments/fx.rs"]
mod tests;
