use crate::{
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    scene::layer::FrameLayout,
    segments::composer::{ComposeInputs, SegmentComposer},
};

/// One top-level segment: a named frame range and the composer that draws it.
pub struct TimelineSegment {
    name: String,
    range: FrameRange,
    composer: Box<dyn SegmentComposer>,
}

impl TimelineSegment {
    /// Segment name, unique within its timeline.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frames the segment occupies.
    pub fn range(&self) -> FrameRange {
        self.range
    }

    /// Composer drawing the segment.
    pub fn composer(&self) -> &dyn SegmentComposer {
        self.composer.as_ref()
    }
}

impl std::fmt::Debug for TimelineSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineSegment")
            .field("name", &self.name)
            .field("range", &self.range)
            .field("composer", &self.composer.name())
            .finish()
    }
}

/// Segment active at a global frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveSegment<'a> {
    /// Position of the segment in the timeline.
    pub index: usize,
    /// Segment name.
    pub name: &'a str,
    /// Frame relative to the segment start.
    pub local_frame: i64,
}

/// Builder for [`Timeline`].
///
/// Ranges are collected as given and checked together in [`TimelineBuilder::build`].
pub struct TimelineBuilder {
    fps: Fps,
    canvas: Canvas,
    duration: u64,
    segments: Vec<(String, u64, u64, Box<dyn SegmentComposer>)>,
}

impl TimelineBuilder {
    /// Start a timeline of `duration` frames at `fps` on `canvas`.
    pub fn new(fps: Fps, canvas: Canvas, duration: u64) -> Self {
        Self {
            fps,
            canvas,
            duration,
            segments: Vec::new(),
        }
    }

    /// Add a segment covering `[start, start + duration)`.
    pub fn segment(
        mut self,
        name: impl Into<String>,
        start: u64,
        duration: u64,
        composer: impl SegmentComposer + 'static,
    ) -> Self {
        let composer: Box<dyn SegmentComposer> = Box::new(composer);
        self.segments.push((name.into(), start, duration, composer));
        self
    }

    /// Add a segment starting where the previous one ends.
    pub fn append(
        self,
        name: impl Into<String>,
        duration: u64,
        composer: impl SegmentComposer + 'static,
    ) -> Self {
        let start = self
            .segments
            .last()
            .map_or(0, |(_, s, d, _)| s.saturating_add(*d));
        self.segment(name, start, duration, composer)
    }

    /// Validate the ranges and build the timeline.
    ///
    /// Segments must be non-empty, uniquely named, start at frame 0, follow each other without
    /// gap or overlap, and end exactly at the declared duration.
    pub fn build(self) -> ReelResult<Timeline> {
        if self.segments.is_empty() {
            return Err(ReelError::timeline("timeline has no segments"));
        }

        let mut segments: Vec<TimelineSegment> = Vec::with_capacity(self.segments.len());
        let mut cursor = 0u64;
        for (name, start, duration, composer) in self.segments {
            if name.trim().is_empty() {
                return Err(ReelError::timeline("segment name must be non-empty"));
            }
            if segments.iter().any(|s| s.name == name) {
                return Err(ReelError::timeline(format!("duplicate segment '{name}'")));
            }
            if duration == 0 {
                return Err(ReelError::timeline(format!("segment '{name}' is empty")));
            }
            if start != cursor {
                let what = if start < cursor { "overlaps" } else { "leaves a gap before" };
                return Err(ReelError::timeline(format!(
                    "segment '{name}' starts at {start} and {what} frame {cursor}"
                )));
            }
            let end = start.checked_add(duration).ok_or_else(|| {
                ReelError::timeline(format!("segment '{name}' ends past u64::MAX"))
            })?;
            segments.push(TimelineSegment {
                name,
                range: FrameRange {
                    start: FrameIndex(start),
                    end: FrameIndex(end),
                },
                composer,
            });
            cursor = end;
        }

        if cursor != self.duration {
            return Err(ReelError::timeline(format!(
                "segments cover {cursor} frames but the timeline declares {}",
                self.duration
            )));
        }

        tracing::debug!(
            segments = segments.len(),
            duration = self.duration,
            fps = self.fps.as_f64(),
            "timeline built"
        );

        Ok(Timeline {
            fps: self.fps,
            canvas: self.canvas,
            duration: self.duration,
            segments,
        })
    }
}

/// Contiguous sequence of segments partitioning `[0, duration)`.
///
/// Evaluation keeps no state: any frame can be evaluated at any time, in any order, and the
/// result depends only on the frame and the [`ComposeInputs`].
#[derive(Debug)]
pub struct Timeline {
    fps: Fps,
    canvas: Canvas,
    duration: u64,
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Total length in frames.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Segments in timeline order.
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Segment containing `frame`, or `None` past the end.
    pub fn active_at(&self, frame: FrameIndex) -> Option<ActiveSegment<'_>> {
        let index = self
            .segments
            .partition_point(|s| s.range.end.0 <= frame.0);
        let seg = self.segments.get(index)?;
        seg.range.contains(frame).then(|| ActiveSegment {
            index,
            name: &seg.name,
            local_frame: seg.range.local_frame(frame),
        })
    }

    #[tracing::instrument(skip(self, inputs), fields(lang = %inputs.lang))]
    /// Evaluate the layers visible at `frame`.
    pub fn evaluate(&self, frame: FrameIndex, inputs: &ComposeInputs) -> ReelResult<FrameLayout> {
        let active = self.active_at(frame).ok_or_else(|| {
            ReelError::evaluation(format!(
                "frame {} is outside the timeline of {} frames",
                frame.0, self.duration
            ))
        })?;
        let seg = &self.segments[active.index];
        let ctx = inputs.ctx(self.fps, self.canvas);
        let mut out = seg.composer.compose(active.local_frame, &ctx);
        out.segment.clone_from(&seg.name);
        Ok(FrameLayout {
            frame,
            segments: vec![out],
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/timeline.rs"]
mod tests;
