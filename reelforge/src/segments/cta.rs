use crate::{
    animation::{
        interpolate::{ramp, remap},
        motion::{Equalizer, Orbit, Oscillator, Particle, RisingParticles, Rotation, Tilt},
        spring::{Spring, SpringConfig},
    },
    foundation::core::Rgba8,
    scene::{
        layer::{Layer, LayerKind, Paint, RootStyle, SegmentFrame, Size, TextStyle, Units},
        theme::FontRole,
    },
    segments::{
        composer::{ComposeCtx, SegmentComposer},
        fx::{self, CoverCard, Group},
    },
};

const ENTRANCE: Spring = Spring::new(SpringConfig::new(80.0, 14.0));
const COVER: Spring = Spring::new(SpringConfig::new(60.0, 12.0)).delayed(3);
const TEXT: Spring = Spring::new(SpringConfig::new(100.0, 14.0)).delayed(15);
const SEND: Spring = Spring::new(SpringConfig::new(120.0, 12.0)).delayed(25);
const SUB: Spring = Spring::new(SpringConfig::new(100.0, 14.0)).delayed(35);
const ARROW: Spring = Spring::new(SpringConfig::new(150.0, 12.0)).delayed(40);

const GLOW_PULSE: Oscillator = Oscillator::sine(0.3, 10.0).around(0.7);
const SEND_PULSE: Oscillator = Oscillator::sine(0.05, 6.0).around(1.0);
const SEND_GLOW: Oscillator = Oscillator::sine(0.4, 5.0).around(0.6);
const COVER_FLOAT: Oscillator = Oscillator::sine(6.0, 20.0);
const ARROW_BOUNCE: Oscillator = Oscillator::sine(12.0, 8.0);
const ARROW_BLINK: Oscillator = Oscillator::sine(0.4, 8.0).around(0.6);
const BORDER: Rotation = Rotation::new(5.0);
const ORBIT: Orbit = Orbit::ring(3.0, 340.0, 15.0);

const CARD: CoverCard = CoverCard {
    image_px: 500.0,
    padding: 10.0,
    corner_radius: 28.0,
    image_radius: 20.0,
    border_alpha: 0.4,
    reflection_height: 60.0,
    reflection_opacity: 0.12,
};

/// Closing call to action: cinematic cover, tag lines with a pulsing headline and a bouncing arrow.
#[derive(Clone, Copy, Debug, Default)]
pub struct CtaSection;

impl CtaSection {
    /// Frames the segment runs for in the creative.
    pub const DURATION: u64 = 210;
}

impl SegmentComposer for CtaSection {
    fn name(&self) -> &str {
        "cta_section"
    }

    fn compose(&self, frame: i64, ctx: &ComposeCtx<'_>) -> SegmentFrame {
        let f = frame as f64;
        let p = &ctx.theme.palette;
        let t = ctx.strings;

        let entrance = ctx.spring(ENTRANCE, frame);
        let cover = ctx.spring(COVER, frame);
        let text = ctx.spring(TEXT, frame);
        let send = ctx.spring(SEND, frame);
        let sub = ctx.spring(SUB, frame);
        let arrow = ctx.spring(ARROW, frame);

        let pulse = GLOW_PULSE.sample(f);
        let tilt = Tilt::STANDARD.sample(f);

        let root = RootStyle::new(Paint::solid(Rgba8::BLACK))
            .blur(fx::entrance_blur(entrance, 20.0))
            .opacity(ramp(f, (190.0, 205.0), (1.0, 0.0)))
            .scale(ramp(f, (0.0, 15.0), (1.3, 1.0)));
        let mut out = SegmentFrame::new(self.name(), frame, root);

        // Backdrop: the cover itself, blown up and blurred under a dark gradient.
        out.push(
            Layer::new(
                "cover_backdrop",
                LayerKind::Image {
                    src: ctx.assets.cover_image.clone(),
                    size: Size::new(f64::from(ctx.canvas.width), f64::from(ctx.canvas.height)),
                    corner_radius: 0.0,
                },
            )
            .at(ctx.center())
            .scale(1.3)
            .opacity(cover * 0.35)
            .blur(60.0)
            .z(0),
        );
        out.push(
            Layer::new(
                "dark_overlay",
                LayerKind::Fill {
                    paint: Paint::linear(
                        180.0,
                        &[
                            (0.0, Rgba8::BLACK.with_alpha(0.7)),
                            (0.4, Rgba8::BLACK.with_alpha(0.4)),
                            (0.6, Rgba8::BLACK.with_alpha(0.5)),
                            (1.0, Rgba8::BLACK.with_alpha(0.85)),
                        ],
                    ),
                },
            )
            .at(ctx.center())
            .z(0),
        );
        out.push(fx::light_rays(ctx, f, 1.5, (50.0, 40.0), entrance * 0.8));
        out.push(
            Layer::new(
                "central_glow",
                LayerKind::Glow {
                    color: p.primary.with_alpha(0.25),
                    size: Size::new(700.0, 700.0),
                    intensity: pulse,
                },
            )
            .at(ctx.pct(50.0, 25.0))
            .blur(40.0)
            .z(2),
        );
        let (accent, white) = split_rising(RisingParticles::CTA.sample(f));
        for (name, particles, color) in [
            ("particles", accent, p.primary),
            ("particles_white", white, p.text.with_alpha(0.6)),
        ] {
            out.push(
                Layer::new(
                    name,
                    LayerKind::Particles {
                        particles,
                        units: Units::Percent,
                        color,
                    },
                )
                .at(ctx.center())
                .opacity(entrance)
                .z(5),
            );
        }

        // Hero cover.
        let card = Group::at(ctx.pct(50.0, 0.0))
            .translate(0.0, 682.0 + COVER_FLOAT.sample(f))
            .tilt(tilt)
            .scale(remap(cover, 0.5, 1.0))
            .opacity(cover);
        let size = CARD.size();
        out.push(fx::sparks(ctx, &card, &ORBIT, f, cover));
        out.push(fx::card_glow(
            ctx,
            &card,
            Size::new(size.width + 60.0, size.height + 60.0),
            0.4,
            pulse,
            30.0,
        ));
        out.extend(CARD.layers(ctx, &card, pulse));
        out.push(fx::border_light(ctx, &card, BORDER, f, 52.0, 50.0, 0.9));

        // Tag lines.
        let column = Group::at(ctx.pct(50.0, 0.0)).translate(0.0, remap(text, 50.0, 0.0));
        out.push(
            column
                .layer(
                    "cta_line1",
                    LayerKind::Text {
                        text: t.cta_line1.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Body, 42.0)
                            .color(p.text.with_alpha(0.85))
                            .spacing(4.0),
                    },
                    text,
                )
                .translate(0.0, 1083.0)
                .z(12),
        );
        let headline = column
            .clone()
            .translate(0.0, 1204.0)
            .scale(remap(send, 0.3, 1.0) * SEND_PULSE.sample(f))
            .opacity(send);
        out.push(
            headline
                .layer(
                    "cta_glow",
                    LayerKind::Glow {
                        color: p.primary.with_alpha(0.3),
                        size: Size::new(620.0, 216.0),
                        intensity: SEND_GLOW.sample(f),
                    },
                    1.0,
                )
                .blur(20.0)
                .z(11),
        );
        out.push(
            headline
                .layer(
                    "cta_line2",
                    LayerKind::Text {
                        text: t.cta_line2.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Headline, 80.0)
                            .color(p.primary)
                            .spacing(4.0)
                            .glow(p.primary),
                    },
                    1.0,
                )
                .z(12),
        );
        out.push(
            column
                .layer(
                    "cta_line3",
                    LayerKind::Text {
                        text: t.cta_line3.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Body, 34.0)
                            .weight(600)
                            .color(p.text.with_alpha(0.8))
                            .spacing(6.0),
                    },
                    sub,
                )
                .translate(0.0, 1320.0 + remap(sub, 20.0, 0.0))
                .z(12),
        );
        out.push(
            column
                .layer(
                    "arrow",
                    LayerKind::Arrow {
                        size: 50.0,
                        stroke: 3.0,
                        color: p.primary,
                    },
                    arrow * ARROW_BLINK.sample(f),
                )
                .translate(0.0, 1394.0 + ARROW_BOUNCE.sample(f))
                .scale(remap(arrow, 0.0, 1.0))
                .z(12),
        );

        out.push(fx::equalizer(ctx, "equalizer", &Equalizer::DENSE, f, 70.0, 3.0, entrance * 0.4));

        out.finish()
    }
}

/// Every third rising particle glows in the accent color; the rest are white.
fn split_rising(particles: Vec<Particle>) -> (Vec<Particle>, Vec<Particle>) {
    let (accent, white): (Vec<_>, Vec<_>) =
        particles.into_iter().enumerate().partition(|(i, _)| i % 3 == 0);
    (
        accent.into_iter().map(|(_, p)| p).collect(),
        white.into_iter().map(|(_, p)| p).collect(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/segments/cta.rs"]
mod tests;
