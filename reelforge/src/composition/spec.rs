use crate::{
    eval::timeline::TimelineBuilder,
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
};

/// Declared identity and format of a composition, as a host registers it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompositionSpec {
    /// Identifier the host lists the composition under.
    pub id: String,
    /// Total length in frames.
    pub duration_frames: u64,
    /// Frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
}

impl CompositionSpec {
    /// Reject specs that cannot back a timeline.
    pub fn validate(&self) -> ReelResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReelError::validation("composition id must be non-empty"));
        }
        if self.duration_frames == 0 {
            return Err(ReelError::validation("composition duration must be > 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::validation("fps must have non-zero num and den"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_frames as f64)
    }

    /// Empty timeline builder with this spec's format.
    pub fn timeline(&self) -> ReelResult<TimelineBuilder> {
        self.validate()?;
        Ok(TimelineBuilder::new(self.fps, self.canvas, self.duration_frames))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/spec.rs"]
mod tests;
