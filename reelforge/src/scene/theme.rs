use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::Rgba8,
    error::{ReelError, ReelResult},
};

/// Named colors of a creative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Backdrop.
    pub bg: Rgba8,
    /// Main accent.
    pub primary: Rgba8,
    /// Secondary accent. Carried for config compatibility with the creative's color table; no
    /// segment draws with it.
    pub secondary: Rgba8,
    /// Body copy.
    pub text: Rgba8,
    /// Softer accent for glows and shadows.
    pub glow: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg: Rgba8::BLACK,
            primary: Rgba8::rgb(0x7f, 0xff, 0x00),
            secondary: Rgba8::rgb(0x00, 0xd4, 0xff),
            text: Rgba8::WHITE,
            glow: Rgba8::rgb(0x4a, 0xde, 0x80),
        }
    }
}

/// Role of a text run, resolved to a family through [`Fonts`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    /// Display headlines.
    Headline,
    /// Serif accents.
    Accent,
    /// Body copy and labels.
    Body,
}

/// Font families by role. Families are names only; loading them is the host's job.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Fonts {
    /// Headline family.
    pub headline: String,
    /// Accent family.
    pub accent: String,
    /// Body family.
    pub body: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            headline: "Cinzel".to_owned(),
            accent: "Playfair Display".to_owned(),
            body: "Montserrat".to_owned(),
        }
    }
}

impl Fonts {
    /// Family for `role`.
    pub fn family(&self, role: FontRole) -> &str {
        match role {
            FontRole::Headline => &self.headline,
            FontRole::Accent => &self.accent,
            FontRole::Body => &self.body,
        }
    }
}

/// Immutable look of a creative, built once and passed by reference to every composer.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Colors.
    pub palette: Palette,
    /// Typefaces.
    pub fonts: Fonts,
}

impl Theme {
    /// Parse a theme from JSON. Missing fields keep their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let theme: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse theme JSON: {e}")))?;
        theme.validate()?;
        Ok(theme)
    }

    /// Parse a theme from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open theme JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject themes that cannot be drawn.
    pub fn validate(&self) -> ReelResult<()> {
        for (role, family) in [
            ("headline", &self.fonts.headline),
            ("accent", &self.fonts.accent),
            ("body", &self.fonts.body),
        ] {
            if family.trim().is_empty() {
                return Err(ReelError::validation(format!(
                    "theme font family '{role}' must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/theme.rs"]
mod tests;
