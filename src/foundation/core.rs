use std::ops::Range;

/// Zero-based position on the output timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

/// Half-open run of frames `[start, end)` on the output timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame of the run.
    pub start: FrameIndex,
    /// One past the last frame of the run.
    pub end: FrameIndex,
}

impl FrameRange {
    /// `len` frames beginning at `start`.
    pub fn span(start: usize, len: usize) -> Self {
        Self {
            start: FrameIndex(start),
            end: FrameIndex(start.saturating_add(len)),
        }
    }

    /// The first `len` frames of the timeline.
    pub fn leading(len: usize) -> Self {
        Self::span(0, len)
    }

    /// Frame indices as a std range; inverted bounds yield an empty range.
    pub fn frames(self) -> Range<usize> {
        self.start.0..self.end.0.max(self.start.0)
    }

    /// Number of frames in the run.
    pub fn len_frames(self) -> usize {
        self.frames().len()
    }

    /// `true` when the run holds no frames.
    pub fn is_empty(self) -> bool {
        self.frames().is_empty()
    }

    /// `true` when `f` falls inside the run.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.frames().contains(&f.0)
    }

    /// Intersection with a timeline of `len` frames; runs past the end collapse
    /// onto `len`.
    pub fn clip_to(self, len: usize) -> Self {
        let start = self.start.0.min(len);
        let end = self.end.0.clamp(start, len);
        Self {
            start: FrameIndex(start),
            end: FrameIndex(end),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
