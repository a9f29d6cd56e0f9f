use crate::{
    animation::{
        interpolate::{InterpolateOpts, interpolate, ramp, remap},
        motion::{Equalizer, Glitch, Orbit, Oscillator, Rotation, Tilt, typewriter},
        spring::{Spring, SpringConfig},
    },
    foundation::core::{Rgba8, Vec2},
    scene::{
        layer::{Layer, LayerKind, RootStyle, SegmentFrame, Size, TextStyle},
        theme::FontRole,
    },
    segments::{
        composer::{ComposeCtx, SegmentComposer},
        fx::{self, CoverCard, Group, PanelSpec},
    },
};

const ENTRANCE: Spring = Spring::new(SpringConfig::new(80.0, 15.0));
const TITLE: Spring = Spring::new(SpringConfig::new(100.0, 15.0)).delayed(10);
const COVER: Spring = Spring::new(SpringConfig::new(80.0, 12.0)).delayed(5);
const CTA: Spring = Spring::new(SpringConfig::new(100.0, 15.0)).delayed(25);
const GLASS: Spring = Spring::new(SpringConfig::new(60.0, 12.0)).delayed(3);
const TAGLINE: Spring = Spring::new(SpringConfig::new(120.0, 15.0)).delayed(35);
const BADGE: Spring = Spring::new(SpringConfig::new(150.0, 12.0)).delayed(20);

const FLOAT: Oscillator = Oscillator::sine(6.0, 20.0);
const GLOW_PULSE: Oscillator = Oscillator::sine(0.3, 15.0).around(0.7);
const BORDER: Rotation = Rotation::new(4.0);
const ORBIT: Orbit = Orbit::ring(2.0, 310.0, 15.0);

const CARD: CoverCard = CoverCard {
    image_px: 480.0,
    padding: 12.0,
    corner_radius: 24.0,
    image_radius: 16.0,
    border_alpha: 0.3,
    reflection_height: 80.0,
    reflection_opacity: 0.15,
};

const PANELS: [PanelSpec; 2] = [
    PanelSpec {
        name: "panel_left",
        center_pct: (4.3, 22.8),
        size: (200.0, 300.0),
        corner_radius: 30.0,
        rotate_deg: -15.0,
        float_mul: 1.5,
        tinted: false,
        fill_alpha: 0.08,
        border_alpha: 0.1,
        opacity: 0.5,
    },
    PanelSpec {
        name: "panel_right",
        center_pct: (99.7, 73.5),
        size: (180.0, 250.0),
        corner_radius: 25.0,
        rotate_deg: 20.0,
        float_mul: -1.2,
        tinted: true,
        fill_alpha: 0.06,
        border_alpha: 0.15,
        opacity: 0.4,
    },
];

/// Opening shot: flash, zoom pull-back, glitching title and the floating cover card.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoverShowcase;

impl CoverShowcase {
    /// Frames the segment runs for in the creative.
    pub const DURATION: u64 = 150;
}

impl SegmentComposer for CoverShowcase {
    fn name(&self) -> &str {
        "cover_showcase"
    }

    fn compose(&self, frame: i64, ctx: &ComposeCtx<'_>) -> SegmentFrame {
        let f = frame as f64;
        let p = &ctx.theme.palette;
        let t = ctx.strings;

        let entrance = ctx.spring(ENTRANCE, frame);
        let title = ctx.spring(TITLE, frame);
        let cover = ctx.spring(COVER, frame);
        let cta = ctx.spring(CTA, frame);
        let glass = ctx.spring(GLASS, frame);
        let tagline = ctx.spring(TAGLINE, frame);
        let badge = ctx.spring(BADGE, frame);

        let tilt = Tilt::STANDARD.sample(f);
        let float_y = FLOAT.sample(f);
        let pulse = GLOW_PULSE.sample(f);
        let flash = interpolate(f, [3.0, 6.0, 12.0], [0.0, 0.8, 0.0], InterpolateOpts::CLAMP);
        let zoom = ramp(f, (0.0, 20.0), (1.4, 1.0));
        let glitch = Glitch::<3>::TITLE.sample(f);
        let exit_blur = fx::exit_ramp(f, (130.0, 145.0), 40.0);

        let root = RootStyle::new(fx::backdrop(ctx))
            .blur(fx::entrance_blur(entrance, 30.0) + exit_blur)
            .scale(zoom);
        let mut out = SegmentFrame::new(self.name(), frame, root);

        out.push(
            Layer::new("flash", LayerKind::Flash { color: Rgba8::WHITE })
                .at(ctx.center())
                .opacity(flash)
                .z(100),
        );
        out.push(fx::light_rays(ctx, f, 0.5, (50.0, 30.0), glass));
        out.push(
            fx::equalizer(ctx, "equalizer_back", &Equalizer::STANDARD, f, 200.0, 6.0, glass * 0.5)
                .z(0),
        );
        out.push(fx::glow_overlay(ctx, (50.0, 45.0), (80.0, 50.0), 0.15, pulse));
        out.extend(PANELS.map(|spec| fx::glass_panel(ctx, spec, float_y, glass)));

        // Title block.
        let title_group = Group::at(ctx.pct(50.0, 24.0))
            .translate(glitch.offset_x, remap(title, -40.0, 0.0))
            .skew_x(glitch.skew_deg)
            .opacity(title);
        out.push(
            title_group
                .layer(
                    "highlight",
                    LayerKind::Text {
                        text: t.highlight_text.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Body, 36.0)
                            .color(p.primary)
                            .spacing(8.0)
                            .glow(p.primary),
                    },
                    1.0,
                )
                .translate(0.0, -90.0)
                .z(12),
        );
        out.push(
            title_group
                .layer(
                    "product_name",
                    LayerKind::Text {
                        text: t.product_name.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Headline, 100.0)
                            .spacing(6.0)
                            .glow(p.primary),
                    },
                    1.0,
                )
                .z(12),
        );
        if glitch.is_active() {
            for (name, color, dx, dy) in [
                ("glitch_green", Rgba8::rgba(0, 255, 0, 102), -3.0, 2.0),
                ("glitch_cyan", Rgba8::rgba(0, 200, 255, 77), 3.0, -2.0),
            ] {
                out.push(
                    title_group
                        .layer(
                            name,
                            LayerKind::Text {
                                text: t.product_name.to_owned(),
                                style: TextStyle::new(ctx.theme, FontRole::Headline, 100.0)
                                    .spacing(6.0)
                                    .color(color),
                            },
                            1.0,
                        )
                        .translate(dx, dy)
                        .z(13),
                );
            }
        }
        out.push(
            title_group
                .layer(
                    "product_subtitle",
                    LayerKind::Text {
                        text: t.product_subtitle.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Headline, 48.0)
                            .color(p.text.with_alpha(0.6))
                            .spacing(16.0),
                    },
                    1.0,
                )
                .translate(0.0, 80.0)
                .z(12),
        );

        // Cover card.
        let card = Group::at(ctx.pct(50.0, 50.0))
            .scale(remap(cover, 0.8, 1.0))
            .translate(0.0, float_y)
            .tilt(tilt)
            .opacity(cover);
        let card_size = CARD.size();
        out.push(fx::sparks(ctx, &card, &ORBIT, f, 1.0));
        out.push(fx::card_glow(
            ctx,
            &card,
            Size::new(card_size.width + 40.0, card_size.height + 40.0),
            0.4,
            pulse,
            30.0,
        ));
        out.extend(CARD.layers(ctx, &card, pulse));
        out.push(fx::border_light(ctx, &card, BORDER, f, 52.0, 40.0, 0.8));
        out.push(fx::badge(
            ctx,
            &card,
            t.limited_edition,
            13.0,
            Vec2::new(card_size.width / 2.0 - 60.0, -card_size.height / 2.0 + 35.0),
            badge,
        ));

        // Typewriter tagline.
        out.push(
            Layer::new(
                "tagline",
                LayerKind::Text {
                    text: typewriter(t.tagline, tagline).to_owned(),
                    style: TextStyle::new(ctx.theme, FontRole::Body, 20.0)
                        .weight(600)
                        .color(p.primary)
                        .spacing(4.0)
                        .glow(p.primary),
                },
            )
            .at(ctx.pct(50.0, 70.0))
            .opacity(tagline)
            .z(12),
        );

        // Call to action on a glass pill.
        let cta_group = Group::at(ctx.pct(50.0, 76.0))
            .translate(0.0, remap(cta, 30.0, 0.0))
            .scale(remap(cta, 0.8, 1.0))
            .opacity(cta);
        out.push(fx::glass_pill(
            ctx,
            &cta_group,
            Size::new(760.0, 110.0),
            p.text,
            0.15,
        ));
        out.push(
            cta_group
                .layer(
                    "cta_text",
                    LayerKind::Text {
                        text: t.cta_text.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Accent, 72.0)
                            .color(p.primary)
                            .spacing(10.0)
                            .glow(p.primary),
                    },
                    1.0,
                )
                .z(12),
        );

        out.push(fx::equalizer(ctx, "equalizer", &Equalizer::STANDARD, f, 80.0, 4.0, 0.5));

        out.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segments/cover_showcase.rs"]
mod tests;
