use std::path::{Path, PathBuf};

use crate::foundation::error::{ReelError, ReelResult};

/// Media referenced by the creative, as paths relative to a static asset directory.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetRefs {
    /// Square cover art.
    pub cover_image: String,
    /// Background preview clip.
    pub background_video: String,
}

impl Default for AssetRefs {
    fn default() -> Self {
        Self {
            cover_image: "cover.png".to_owned(),
            background_video: "wave.mp4".to_owned(),
        }
    }
}

impl AssetRefs {
    /// Normalize both paths, rejecting absolute paths and `..` components.
    pub fn validated(&self) -> ReelResult<Self> {
        Ok(Self {
            cover_image: normalize_rel_path(&self.cover_image)?,
            background_video: normalize_rel_path(&self.background_video)?,
        })
    }

    /// `(field, path)` pairs.
    pub fn entries(&self) -> [(&'static str, &str); 2] {
        [
            ("cover_image", self.cover_image.as_str()),
            ("background_video", self.background_video.as_str()),
        ]
    }

    /// Join every reference onto `root`. Pure path arithmetic; nothing is read.
    pub fn resolve(&self, root: impl AsRef<Path>) -> [(&'static str, PathBuf); 2] {
        let root = root.as_ref();
        self.entries().map(|(k, p)| (k, root.join(p)))
    }
}

/// Normalize a relative asset path to `/`-separated form.
pub fn normalize_rel_path(source: &str) -> ReelResult<String> {
    let s = source.trim().replace('\\', "/");
    if s.starts_with('/') {
        return Err(ReelError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(ReelError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ReelError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ReelError::validation(
            "asset path must contain a file name",
        ));
    }
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/segments/assets.rs"]
mod tests;
