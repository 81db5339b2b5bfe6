use crate::{
    envelope::generator::{
        Envelope, EnvelopeOptions, EnvelopeRequest, generate_with, portion_length,
    },
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::CrossfadeResult,
};

/// Envelopes for every image of a sequence, in image order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CrossfadePlan {
    /// Frames on the output timeline.
    pub number_of_frames: usize,
    /// Images in the sequence.
    pub number_of_images: usize,
    /// Placement options every envelope was generated with.
    #[serde(default)]
    pub options: EnvelopeOptions,
    /// `envelopes[k]` belongs to image `k + 1`.
    pub envelopes: Vec<Envelope>,
}

impl CrossfadePlan {
    /// Generate the envelope of every image; fails on the first contract violation.
    #[tracing::instrument(level = "debug")]
    pub fn build(
        number_of_frames: usize,
        number_of_images: usize,
        options: EnvelopeOptions,
    ) -> CrossfadeResult<Self> {
        let envelopes = (1..=number_of_images.max(1))
            .map(|image_number| {
                let req = EnvelopeRequest::new(number_of_frames, number_of_images, image_number);
                generate_with(&req, options)
            })
            .collect::<CrossfadeResult<Vec<_>>>()?;

        Ok(Self {
            number_of_frames,
            number_of_images,
            options,
            envelopes,
        })
    }

    /// Envelope of the 1-based `image_number`.
    pub fn envelope(&self, image_number: usize) -> Option<&Envelope> {
        image_number
            .checked_sub(1)
            .and_then(|i| self.envelopes.get(i))
    }

    /// Sum of all images' weights at `frame`.
    pub fn weight_sum(&self, frame: FrameIndex) -> f64 {
        self.envelopes
            .iter()
            .filter_map(|e| e.get(frame))
            .sum()
    }

    /// [`Self::weight_sum`] for every frame of the timeline.
    pub fn weight_sums(&self) -> Vec<f64> {
        (0..self.number_of_frames)
            .map(|f| self.weight_sum(FrameIndex(f)))
            .collect()
    }

    /// Frames where adjacent envelopes are complementary and sum to 1.0.
    ///
    /// Frames at or past `end` belong to the truncated tail: they sum to 0.0 in
    /// [`TailMode::Truncate`](crate::TailMode::Truncate) and carry only the last
    /// image's weight in `AnchorEnd`.
    pub fn covered_frames(&self) -> FrameRange {
        let portion = portion_length(self.number_of_frames, self.number_of_images);
        FrameRange::leading(self.number_of_images.saturating_sub(1) * portion)
            .clip_to(self.number_of_frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/envelope/plan.rs"]
mod tests;
