use crate::{
    animation::{
        interpolate::{ramp, remap},
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
        fx::{self, CoverCard, Group, PanelSpec},
    },
};

const ENTRANCE: Spring = Spring::new(SpringConfig::new(100.0, 15.0));
const GLASS: Spring = Spring::new(SpringConfig::new(60.0, 12.0)).delayed(5);
const BADGE: Spring = Spring::new(SpringConfig::new(150.0, 12.0)).delayed(20);
const ITEM: Spring = Spring::new(SpringConfig::new(100.0, 14.0));

const ITEM_DELAY: i64 = 12;
const ITEM_STAGGER: i64 = 5;

const FLOAT: Oscillator = Oscillator::sine(4.0, 22.0);
const GLOW_PULSE: Oscillator = Oscillator::sine(0.3, 15.0).around(0.7);
const BREATHE: Oscillator = Oscillator::sine(0.015, 25.0).around(1.0);
const BORDER: Rotation = Rotation::new(4.0);
const ORBIT: Orbit = Orbit::ring(2.0, 290.0, 15.0);

const COVER: CoverCard = CoverCard {
    image_px: 500.0,
    padding: 10.0,
    corner_radius: 24.0,
    image_radius: 16.0,
    border_alpha: 0.3,
    reflection_height: 80.0,
    reflection_opacity: 0.15,
};

const PANELS: [PanelSpec; 2] = [
    PanelSpec {
        name: "panel_left",
        center_pct: (-3.7, 15.3),
        size: (180.0, 280.0),
        corner_radius: 30.0,
        rotate_deg: -18.0,
        float_mul: 1.5,
        tinted: false,
        fill_alpha: 0.05,
        border_alpha: 0.08,
        opacity: 0.35,
    },
    PanelSpec {
        name: "panel_right",
        center_pct: (103.1, 84.3),
        size: (150.0, 220.0),
        corner_radius: 25.0,
        rotate_deg: 22.0,
        float_mul: -1.0,
        tinted: true,
        fill_alpha: 0.04,
        border_alpha: 0.1,
        opacity: 0.3,
    },
];

const LIST_WIDTH: f64 = 650.0;
const LIST_PADDING_Y: f64 = 30.0;
const ROW_HEIGHT: f64 = 104.0;
const ROW_GAP: f64 = 12.0;
const COLUMN_GAP: f64 = 30.0;

/// Header, cover card and a staggered list of what the pack contains.
#[derive(Clone, Copy, Debug, Default)]
pub struct FolderList;

impl FolderList {
    /// Frames the segment runs for in the creative.
    pub const DURATION: u64 = 180;

    /// Spring driving row `i`; rows enter one after another.
    pub fn item_spring(i: usize) -> Spring {
        let stagger = i64::try_from(i).unwrap_or(i64::MAX).saturating_mul(ITEM_STAGGER);
        ITEM.delayed(ITEM_DELAY.saturating_add(stagger))
    }
}

impl SegmentComposer for FolderList {
    fn name(&self) -> &str {
        "folder_list"
    }

    fn compose(&self, frame: i64, ctx: &ComposeCtx<'_>) -> SegmentFrame {
        let f = frame as f64;
        let p = &ctx.theme.palette;
        let t = ctx.strings;

        let entrance = ctx.spring(ENTRANCE, frame);
        let glass = ctx.spring(GLASS, frame);
        let badge = ctx.spring(BADGE, frame);

        let pulse = GLOW_PULSE.sample(f);
        let float_y = FLOAT.sample(f);
        let breathe = BREATHE.sample(f);
        let tilt = Tilt::STANDARD.sample(f);
        let shine = ramp(f, (15.0, 60.0), (-100.0, 120.0));
        let exit_blur = fx::exit_ramp(f, (160.0, 175.0), 40.0);

        let root = RootStyle::new(fx::backdrop(ctx))
            .blur(fx::entrance_blur(entrance, 20.0) + exit_blur);
        let mut out = SegmentFrame::new(self.name(), frame, root);

        out.push(fx::light_rays(ctx, f, 0.6, (50.0, 35.0), glass));
        out.push(fx::glow_overlay(ctx, (50.0, 55.0), (80.0, 60.0), 0.12, pulse));
        out.push(fx::floating_particles(ctx, &FloatingParticles::FOLDER, f, glass));
        out.extend(PANELS.map(|spec| fx::glass_panel(ctx, spec, float_y, glass)));

        // Header.
        let header = Group::at(ctx.pct(50.0, 0.0))
            .translate(0.0, remap(entrance, -30.0, 0.0))
            .opacity(entrance);
        out.push(
            header
                .layer(
                    "header_line1",
                    LayerKind::Text {
                        text: t.header_line1.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Headline, 72.0)
                            .glow(p.primary),
                    },
                    1.0,
                )
                .translate(0.0, 50.0 + 40.0)
                .z(12),
        );
        out.push(
            header
                .layer(
                    "header_line2",
                    LayerKind::Text {
                        text: t.header_line2.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Accent, 64.0)
                            .color(p.primary)
                            .glow(p.primary),
                    },
                    1.0,
                )
                .translate(0.0, 50.0 + 80.0 + 35.0)
                .z(12),
        );

        // Centered column: cover card over the list card.
        let rows = t.folder_list.len() as f64;
        let list_height =
            LIST_PADDING_Y * 2.0 + rows * ROW_HEIGHT + (rows - 1.0).max(0.0) * ROW_GAP;
        let cover_block = COVER.size().height + 8.0 + COVER.reflection_height;
        let column_height = cover_block + COLUMN_GAP + list_height;
        let top = ctx.center().y + 30.0 - column_height / 2.0;

        let cover_y = top + COVER.size().height / 2.0;
        let cover = Group::at(ctx.pct(50.0, 0.0))
            .translate(0.0, cover_y + float_y)
            .scale(remap(glass, 0.7, 1.0))
            .tilt(tilt)
            .opacity(glass);
        let size = COVER.size();
        out.push(fx::sparks(ctx, &cover, &ORBIT, f, glass));
        out.push(fx::card_glow(
            ctx,
            &cover,
            Size::new(size.width + 50.0, size.height + 50.0),
            0.4,
            pulse,
            30.0,
        ));
        out.extend(COVER.layers(ctx, &cover, pulse));
        out.push(fx::border_light(ctx, &cover, BORDER, f, 52.0, 40.0, 0.8));
        out.push(fx::badge(
            ctx,
            &cover,
            t.limited_edition,
            13.0,
            Vec2::new(size.width / 2.0 - 80.0, -size.height / 2.0 + 35.0),
            badge,
        ));

        let list_y = top + cover_block + COLUMN_GAP + list_height / 2.0;
        let list = Group::at(ctx.pct(50.0, 0.0))
            .translate(0.0, list_y + float_y)
            .scale(breathe);
        let list_size = Size::new(LIST_WIDTH, list_height);
        out.push(
            list.layer(
                "list_glow",
                LayerKind::Glow {
                    color: p.primary.with_alpha(0.3),
                    size: Size::new(LIST_WIDTH + 50.0, list_height + 50.0),
                    intensity: pulse,
                },
                1.0,
            )
            .blur(20.0)
            .z(7),
        );
        out.push(
            list.layer(
                "list_card",
                LayerKind::Card {
                    size: list_size,
                    corner_radius: 28.0,
                    border: p.primary.with_alpha(0.2 + pulse * 0.2),
                    border_width: 2.0,
                    glow: p.primary.with_alpha(0.12 * pulse),
                },
                1.0,
            )
            .z(8),
        );
        for (i, item) in t.folder_list.iter().enumerate() {
            let progress = ctx.spring(Self::item_spring(i), frame);
            let row_y = -list_height / 2.0
                + LIST_PADDING_Y
                + i as f64 * (ROW_HEIGHT + ROW_GAP)
                + ROW_HEIGHT / 2.0;
            let row = list
                .clone()
                .translate(remap(progress, -50.0, 0.0), row_y)
                .scale(remap(progress, 0.9, 1.0))
                .opacity(progress);
            out.push(
                row.layer(
                    "folder_row",
                    LayerKind::GlassPanel {
                        size: Size::new(LIST_WIDTH - 80.0, ROW_HEIGHT),
                        corner_radius: 20.0,
                        fill: Paint::linear(
                            135.0,
                            &[
                                (0.0, p.primary.with_alpha(0.15)),
                                (1.0, p.primary.with_alpha(0.05)),
                            ],
                        ),
                        border: p.primary.with_alpha(0.5 + pulse * 0.3),
                    },
                    1.0,
                )
                .z(9),
            );
            out.push(
                row.layer(
                    "folder_icon",
                    LayerKind::Text {
                        text: item.icon.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Body, 50.0).glow(p.primary),
                    },
                    1.0,
                )
                .translate(-(LIST_WIDTH - 80.0) / 2.0 + 30.0 + 30.0, 0.0)
                .z(10),
            );
            out.push(
                row.layer(
                    "folder_name",
                    LayerKind::Text {
                        text: item.name.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Body, 36.0)
                            .weight(700)
                            .color(p.primary)
                            .spacing(2.0)
                            .glow(p.primary),
                    },
                    1.0,
                )
                .translate(60.0, 0.0)
                .z(10),
            );
        }
        out.push(
            list.layer(
                "shine_sweep",
                LayerKind::ShineSweep {
                    top_pct: shine,
                    height: 60.0,
                },
                1.0,
            )
            .skew_y(-2.0)
            .z(11),
        );
        out.push(
            list.layer(
                "list_shine",
                LayerKind::Fill {
                    paint: Paint::linear(
                        180.0,
                        &[(0.0, p.text.with_alpha(0.06)), (0.4, Rgba8::TRANSPARENT)],
                    ),
                },
                1.0,
            )
            .z(11),
        );

        // Footer pill.
        let footer = Group::at(ctx.pct(50.0, 100.0)).translate(0.0, -80.0 - 20.0);
        out.push(fx::glass_pill(ctx, &footer, Size::new(420.0, 68.0), p.primary, 0.2 + pulse * 0.2));
        out.push(
            footer
                .layer(
                    "all_included",
                    LayerKind::Text {
                        text: t.all_included.to_owned(),
                        style: TextStyle::new(ctx.theme, FontRole::Accent, 30.0)
                            .color(p.primary)
                            .spacing(6.0)
                            .glow(p.primary),
                    },
                    1.0,
                )
                .z(12),
        );

        out.push(fx::equalizer(ctx, "equalizer", &Equalizer::STANDARD, f, 80.0, 4.0, entrance * 0.5));

        out.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segments/folder_list.rs"]
mod tests;
