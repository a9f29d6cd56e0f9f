use std::{fs::File, io::BufReader, path::Path};

use crate::{
    composition::spec::CompositionSpec,
    eval::timeline::Timeline,
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    locale::{lang::Lang, strings::lookup},
    scene::theme::Theme,
    segments::{
        ContentCounter, CoverShowcase, CtaSection, FolderList, VideoCounter,
        assets::AssetRefs,
        composer::ComposeInputs,
    },
};

/// Host identifier of the creative.
pub const CREATIVE_ID: &str = "BeatsMotionCreatives";

const FPS: Fps = Fps::integer(30);
const CANVAS: Canvas = Canvas {
    width: 1080,
    height: 1920,
};

/// Which counter segment follows the cover showcase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterStyle {
    /// Counter card over a background video preview.
    #[default]
    Video,
    /// Shorter glass counter card without video.
    Glass,
}

impl CounterStyle {
    /// Frames the counter segment runs for.
    pub fn duration(self) -> u64 {
        match self {
            Self::Video => VideoCounter::DURATION,
            Self::Glass => ContentCounter::DURATION,
        }
    }
}

/// Everything a host may change about the creative.
///
/// Every field is optional in JSON; missing fields keep the values of the stock creative.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreativeConfig {
    /// Language of the copy.
    pub lang: Lang,
    /// Media references.
    pub assets: AssetRefs,
    /// Counter text, such as `+10`.
    pub counter: String,
    /// Counter segment variant.
    pub counter_style: CounterStyle,
    /// Look of the creative.
    pub theme: Theme,
}

impl Default for CreativeConfig {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            assets: AssetRefs::default(),
            counter: "+10".to_owned(),
            counter_style: CounterStyle::default(),
            theme: Theme::default(),
        }
    }
}

impl CreativeConfig {
    /// Parse and validate a config from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse creative config JSON: {e}")))?;
        cfg.validated()
    }

    /// Parse and validate a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open creative config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every field and normalize asset paths.
    pub fn validated(mut self) -> ReelResult<Self> {
        if self.counter.trim().is_empty() {
            return Err(ReelError::validation("counter text must be non-empty"));
        }
        self.assets = self.assets.validated()?;
        self.theme.validate()?;
        Ok(self)
    }

    /// Composition declaration for this config.
    pub fn composition(&self) -> CompositionSpec {
        CompositionSpec {
            id: CREATIVE_ID.to_owned(),
            duration_frames: CoverShowcase::DURATION
                + self.counter_style.duration()
                + FolderList::DURATION
                + CtaSection::DURATION,
            fps: FPS,
            canvas: CANVAS,
        }
    }

    /// Per-frame inputs for [`Timeline::evaluate`].
    pub fn inputs(&self) -> ComposeInputs {
        ComposeInputs {
            lang: self.lang,
            theme: self.theme.clone(),
            assets: self.assets.clone(),
        }
    }
}

/// The stock creative: 25 seconds at 30 fps on a 1080x1920 portrait canvas.
pub fn beats_motion_creatives() -> CompositionSpec {
    CreativeConfig::default().composition()
}

/// Timeline of the creative: cover showcase, counter, folder list and closing call to action.
pub fn creative_timeline(config: &CreativeConfig) -> ReelResult<Timeline> {
    let spec = config.composition();
    let builder = spec
        .timeline()?
        .append("cover_showcase", CoverShowcase::DURATION, CoverShowcase);
    let builder = match config.counter_style {
        CounterStyle::Video => builder.append(
            "video_counter",
            VideoCounter::DURATION,
            VideoCounter::new(config.counter.clone()),
        ),
        CounterStyle::Glass => {
            let t = lookup(config.lang);
            builder.append(
                "content_counter",
                ContentCounter::DURATION,
                ContentCounter::new(config.counter.clone(), t.beats_label)
                    .with_caption(t.beats_sub_label),
            )
        }
    };
    builder
        .append("folder_list", FolderList::DURATION, FolderList)
        .append("cta_section", CtaSection::DURATION, CtaSection)
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/composition/creative.rs"]
mod tests;
