use crate::{
    animation::{
        motion::{Equalizer, Oscillator},
        spring::{Spring, SpringConfig},
    },
    scene::layer::{RootStyle, SegmentFrame},
    segments::{
        composer::{ComposeCtx, SegmentComposer},
        fx::{self, CounterCard, CounterText, Group, PanelSpec},
    },
};

const ENTRANCE: Spring = Spring::new(SpringConfig::new(100.0, 15.0));
const COUNT: Spring = Spring::new(SpringConfig::new(80.0, 12.0)).delayed(5);
const GLASS: Spring = Spring::new(SpringConfig::new(60.0, 12.0)).delayed(3);

const FLOAT: Oscillator = Oscillator::sine(5.0, 18.0);
const GLOW_PULSE: Oscillator = Oscillator::sine(0.3, 12.0).around(0.7);

const CARD: CounterCard = CounterCard {
    size: (480.0, 380.0),
    padding_y: 50.0,
    count_px: 160.0,
    count_scale_from: 0.5,
    label_spacing: 8.0,
    caption_alpha: 0.6,
    fill_alpha: 0.15,
    glow_alpha: 0.35,
    glow_inset: 30.0,
    glow_blur: 25.0,
};

const PANELS: [PanelSpec; 2] = [
    PanelSpec {
        name: "panel_right",
        center_pct: (102.6, 16.3),
        size: (160.0, 240.0),
        corner_radius: 25.0,
        rotate_deg: 25.0,
        float_mul: 1.3,
        tinted: false,
        fill_alpha: 0.06,
        border_alpha: 0.08,
        opacity: 0.4,
    },
    PanelSpec {
        name: "panel_left",
        center_pct: (-1.5, 79.8),
        size: (140.0, 200.0),
        corner_radius: 20.0,
        rotate_deg: -20.0,
        float_mul: -1.0,
        tinted: true,
        fill_alpha: 0.05,
        border_alpha: 0.12,
        opacity: 0.35,
    },
];

/// Glass counter card without video; a short alternate to [`super::VideoCounter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentCounter {
    /// Counter text, such as `+10`.
    pub count: String,
    /// Line under the counter.
    pub label: String,
    /// Optional italic caption under the label.
    pub caption: Option<String>,
}

impl ContentCounter {
    /// Frames the segment is designed to run for; it blurs out over its last 15.
    pub const DURATION: u64 = 70;

    /// Counter showing `count` over `label`, without caption.
    pub fn new(count: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            count: count.into(),
            label: label.into(),
            caption: None,
        }
    }

    /// Add an italic caption under the label.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl SegmentComposer for ContentCounter {
    fn name(&self) -> &str {
        "content_counter"
    }

    fn compose(&self, frame: i64, ctx: &ComposeCtx<'_>) -> SegmentFrame {
        let f = frame as f64;

        let entrance = ctx.spring(ENTRANCE, frame);
        let count = ctx.spring(COUNT, frame);
        let glass = ctx.spring(GLASS, frame);

        let pulse = GLOW_PULSE.sample(f);
        let float_y = FLOAT.sample(f);
        let exit_blur = fx::exit_ramp(f, (55.0, 70.0), 30.0);

        let root = RootStyle::new(fx::backdrop(ctx))
            .blur(fx::entrance_blur(entrance, 20.0) + exit_blur);
        let mut out = SegmentFrame::new(self.name(), frame, root);

        out.push(fx::light_rays(ctx, f, 0.8, (50.0, 40.0), glass));
        out.push(fx::glow_overlay(ctx, (50.0, 50.0), (70.0, 60.0), 0.18, pulse));
        out.extend(PANELS.map(|spec| fx::glass_panel(ctx, spec, float_y, glass)));

        let card = Group::at(ctx.center()).translate(0.0, float_y);
        out.extend(CARD.layers(
            ctx,
            &card,
            CounterText {
                count: &self.count,
                label: &self.label,
                caption: self.caption.as_deref(),
                count_progress: count,
                entrance,
            },
            pulse,
        ));

        out.push(fx::equalizer(ctx, "equalizer", &Equalizer::STANDARD, f, 80.0, 4.0, entrance * 0.5));

        out.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segments/content_counter.rs"]
mod tests;
