use crate::{
    animation::{
        interpolate::remap,
        motion::{Equalizer, FloatingParticles, Orbit, Oscillator, Rotation, Tilt},
        spring::{Spring, SpringConfig},
    },
    foundation::core::{Rgba8, Vec2},
    scene::{
        layer::{Layer, LayerKind, Paint, RootStyle, SegmentFrame, Size, TextStyle},
        theme::FontRole,
    },
    segments::{
        composer::{ComposeCtx, SegmentComposer},
        fx::{self, CounterCard, CounterText, Group},
    },
};

const ENTRANCE: Spring = Spring::new(SpringConfig::new(100.0, 15.0));
const COUNT: Spring = Spring::new(SpringConfig::new(80.0, 12.0)).delayed(5);
const BADGE: Spring = Spring::new(SpringConfig::new(150.0, 12.0)).delayed(18);
const LABEL: Spring = Spring::new(SpringConfig::new(100.0, 14.0)).delayed(8);
const HEADLINE: Spring = Spring::new(SpringConfig::new(80.0, 12.0)).delayed(14);

const FLOAT: Oscillator = Oscillator::sine(5.0, 18.0);
const GLOW_PULSE: Oscillator = Oscillator::sine(0.3, 12.0).around(0.7);
const BORDER: Rotation = Rotation::new(4.0);
const ORBIT: Orbit = Orbit::ring(2.5, 220.0, 20.0);

const CARD: CounterCard = CounterCard {
    size: (520.0, 400.0),
    padding_y: 50.0,
    count_px: 180.0,
    count_scale_from: 0.3,
    label_spacing: 10.0,
    caption_alpha: 0.7,
    fill_alpha: 0.2,
    glow_alpha: 0.4,
    glow_inset: 35.0,
    glow_blur: 30.0,
};

const VIDEO_SIZE: Size = Size::new(700.0, 400.0);

/// Scan line travel in percent of the video box; the line spends the last 20 off screen.
const SCAN_LOOP: f64 = 120.0;

/// Counter card stacked over a background video preview, with a persuasive header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoCounter {
    /// Counter text, such as `+10`.
    pub count: String,
}

impl VideoCounter {
    /// Frames the segment runs for in the creative.
    pub const DURATION: u64 = 210;

    /// Counter showing `count`.
    pub fn new(count: impl Into<String>) -> Self {
        Self {
            count: count.into(),
        }
    }
}

impl Default for VideoCounter {
    fn default() -> Self {
        Self::new("+10")
    }
}

impl SegmentComposer for VideoCounter {
    fn name(&self) -> &str {
        "video_counter"
    }

    fn compose(&self, frame: i64, ctx: &ComposeCtx<'_>) -> SegmentFrame {
        let f = frame as f64;
        let p = &ctx.theme.palette;
        let t = ctx.strings;

        let entrance = ctx.spring(ENTRANCE, frame);
        let count = ctx.spring(COUNT, frame);
        let badge = ctx.spring(BADGE, frame);
        let label = ctx.spring(LABEL, frame);
        let headline = ctx.spring(HEADLINE, frame);

        let pulse = GLOW_PULSE.sample(f);
        let float_y = FLOAT.sample(f);
        let tilt = Tilt::STANDARD.sample(f);
        let scan = (f * 4.0).rem_euclid(SCAN_LOOP);
        let exit_blur = fx::exit_ramp(f, (190.0, 205.0), 30.0);

        let root = RootStyle::new(fx::backdrop(ctx))
            .blur(fx::entrance_blur(entrance, 20.0) + exit_blur);
        let mut out = SegmentFrame::new(self.name(), frame, root);

        out.push(fx::glow_overlay(ctx, (50.0, 40.0), (80.0, 60.0), 0.08, pulse));
        out.push(fx::floating_particles(ctx, &FloatingParticles::VIDEO, f, entrance));
        out.push(fx::equalizer(ctx, "equalizer", &Equalizer::STANDARD, f, 80.0, 4.0, entrance * 0.5));

        // Header.
        out.push(
            Layer::new(
                "exclusive_label",
                LayerKind::Text {
                    text: t.exclusive_label.to_owned(),
                    style: TextStyle::new(ctx.theme, FontRole::Body, 32.0)
                        .color(p.primary)
                        .spacing(8.0)
                        .glow(p.primary),
                },
            )
            .at(ctx.pct(50.0, 0.0))
            .translate(0.0, 120.0 + remap(label, -20.0, 0.0))
            .opacity(label)
            .z(20),
        );
        out.push(
            Layer::new(
                "produce_music",
                LayerKind::Text {
                    text: t.produce_music.to_owned(),
                    style: TextStyle::new(ctx.theme, FontRole::Headline, 52.0).glow(p.primary),
                },
            )
            .at(ctx.pct(50.0, 0.0))
            .translate(0.0, 205.0 + remap(headline, 30.0, 0.0))
            .opacity(headline)
            .z(20),
        );

        // Counter card, upper half of the centered stack.
        let card = Group::at(ctx.pct(50.0, 50.0))
            .translate(0.0, -220.0 + float_y)
            .tilt(tilt);
        let size = CARD.size();
        out.push(fx::sparks(ctx, &card, &ORBIT, f, entrance));
        out.extend(CARD.layers(
            ctx,
            &card,
            CounterText {
                count: &self.count,
                label: t.beats_label,
                caption: Some(t.beats_sub_label),
                count_progress: count,
                entrance,
            },
            pulse,
        ));
        out.push(fx::border_light(ctx, &card, BORDER, f, 54.0, 50.0, 0.8).blur(10.0));
        out.push(fx::badge(
            ctx,
            &card,
            t.exclusive,
            12.0,
            Vec2::new(size.width / 2.0 - 75.0, -size.height / 2.0 + 27.0),
            badge,
        ));

        // Video preview, lower half.
        let video = Group::at(ctx.pct(50.0, 50.0))
            .translate(0.0, 220.0)
            .scale(remap(entrance, 0.8, 1.0))
            .opacity(entrance);
        out.push(
            video
                .layer(
                    "video",
                    LayerKind::Video {
                        src: ctx.assets.background_video.clone(),
                        size: VIDEO_SIZE,
                        corner_radius: 24.0,
                        source_frame: u64::try_from(frame).unwrap_or(0),
                    },
                    1.0,
                )
                .z(8),
        );
        out.push(
            video
                .layer(
                    "video_vignette",
                    LayerKind::Fill {
                        paint: Paint::radial(
                            Vec2::new(50.0, 50.0),
                            &[(0.4, Rgba8::TRANSPARENT), (1.0, Rgba8::BLACK.with_alpha(0.5))],
                        ),
                    },
                    1.0,
                )
                .z(9),
        );
        out.push(
            video
                .layer(
                    "video_tint",
                    LayerKind::Glow {
                        color: p.primary.with_alpha(0.08),
                        size: VIDEO_SIZE,
                        intensity: 1.0,
                    },
                    pulse,
                )
                .z(9),
        );
        out.push(
            video
                .layer(
                    "scan_line",
                    LayerKind::ScanLine {
                        top_pct: scan,
                        height: 3.0,
                        color: p.primary.with_alpha(0.2),
                    },
                    1.0,
                )
                .z(10),
        );
        out.push(
            video
                .layer(
                    "scan_line_faint",
                    LayerKind::ScanLine {
                        top_pct: (scan + 50.0) % 100.0,
                        height: 2.0,
                        color: p.text.with_alpha(0.06),
                    },
                    1.0,
                )
                .z(10),
        );
        out.push(
            video
                .layer(
                    "video_frame",
                    LayerKind::Card {
                        size: VIDEO_SIZE,
                        corner_radius: 24.0,
                        border: p.primary.with_alpha(0.2 + pulse * 0.2),
                        border_width: 2.0,
                        glow: p.primary.with_alpha(0.1 * pulse),
                    },
                    1.0,
                )
                .z(11),
        );

        out.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segments/video_counter.rs"]
mod tests;
