use crate::{
    envelope::ramp::Ramp,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{CrossfadeError, CrossfadeResult},
};

/// Shortest portion that still holds both anchors of a ramp.
pub const MIN_PORTION_LENGTH: usize = 2;

/// How the last image's rising portion is placed when `(frames - 1)` does not
/// divide evenly by `(images - 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailMode {
    /// Place the last portion right after the previous image's, leaving any
    /// remainder frames at 0.0 for every image.
    #[default]
    Truncate,
    /// Place the last portion so it ends on the final frame. Changes output.
    AnchorEnd,
}

/// Tail placement used by [`generate`].
pub const DEFAULT_TAIL_MODE: TailMode = TailMode::Truncate;

/// Knobs that alter envelope placement. The default reproduces reference output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnvelopeOptions {
    /// Placement of the last image's rise.
    #[serde(default)]
    pub tail: TailMode,
}

/// Which portions an image contributes, by its position in the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageRole {
    /// Image 1: a single falling portion at the start of the timeline.
    First,
    /// Any image between the first and last: a rise followed by a fall.
    Middle,
    /// The final image: a single rising portion.
    Last,
}

const FALL: &[Ramp] = &[Ramp::Falling];
const RISE: &[Ramp] = &[Ramp::Rising];
const RISE_FALL: &[Ramp] = &[Ramp::Rising, Ramp::Falling];

impl ImageRole {
    fn portions(self) -> &'static [Ramp] {
        match self {
            Self::First => FALL,
            Self::Middle => RISE_FALL,
            Self::Last => RISE,
        }
    }
}

/// Inputs of one envelope: timeline length, sequence length, and the 1-based image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnvelopeRequest {
    /// Frames on the output timeline.
    pub number_of_frames: usize,
    /// Images in the sequence.
    pub number_of_images: usize,
    /// Image the envelope is for, in `1..=number_of_images`.
    pub image_number: usize,
}

impl EnvelopeRequest {
    /// Bundle the three inputs without checking them.
    pub fn new(number_of_frames: usize, number_of_images: usize, image_number: usize) -> Self {
        Self {
            number_of_frames,
            number_of_images,
            image_number,
        }
    }

    /// Check the request against the generator's domain.
    ///
    /// Requires `number_of_frames >= 1`, `number_of_images >= 2`,
    /// `1 <= image_number <= number_of_images`, and a portion length of at least
    /// [`MIN_PORTION_LENGTH`], i.e. `number_of_frames >= 2 * (number_of_images - 1) + 1`.
    /// Shorter portions cannot carry both the 0.0 and 1.0 anchors.
    pub fn validate(&self) -> CrossfadeResult<()> {
        if self.number_of_frames == 0 {
            return Err(CrossfadeError::contract("number_of_frames must be >= 1"));
        }
        if self.number_of_images < 2 {
            return Err(CrossfadeError::contract(format!(
                "number_of_images must be >= 2, got {}",
                self.number_of_images
            )));
        }
        if !(1..=self.number_of_images).contains(&self.image_number) {
            return Err(CrossfadeError::contract(format!(
                "image_number must be in 1..={}, got {}",
                self.number_of_images, self.image_number
            )));
        }
        let portion = self.portion_length();
        if portion < MIN_PORTION_LENGTH {
            return Err(CrossfadeError::contract(format!(
                "portion length {portion} is below {MIN_PORTION_LENGTH}: \
                 {} frames are too few for {} images",
                self.number_of_frames, self.number_of_images
            )));
        }
        Ok(())
    }

    /// Role of the image. The first image wins when it is also the last,
    /// matching the branch order hosts already depend on.
    pub fn role(&self) -> ImageRole {
        if self.image_number == 1 {
            ImageRole::First
        } else if self.image_number == self.number_of_images {
            ImageRole::Last
        } else {
            ImageRole::Middle
        }
    }

    /// See [`portion_length`].
    pub fn portion_length(&self) -> usize {
        portion_length(self.number_of_frames, self.number_of_images)
    }

    /// Frames the envelope's portions are written to, before clipping to the timeline.
    pub fn window(&self, options: EnvelopeOptions) -> FrameRange {
        let portion = self.portion_length();
        let role = self.role();
        let start = match role {
            ImageRole::First => 0,
            ImageRole::Middle => self.image_number.saturating_sub(2) * portion,
            ImageRole::Last => match options.tail {
                TailMode::Truncate => self.number_of_images.saturating_sub(2) * portion,
                TailMode::AnchorEnd => self.number_of_frames.saturating_sub(portion),
            },
        };
        FrameRange::span(start, role.portions().len() * portion)
    }
}

/// Frames per rise or fall: `floor((frames - 1) / (images - 1))`.
///
/// Zero when `number_of_images < 2`; [`generate`] rejects such requests before
/// they get here.
pub fn portion_length(number_of_frames: usize, number_of_images: usize) -> usize {
    number_of_frames
        .saturating_sub(1)
        .checked_div(number_of_images.saturating_sub(1))
        .unwrap_or(0)
}

/// Per-frame weights of one image across the whole timeline.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Envelope {
    /// One weight per frame, 0.0 outside the image's portions.
    pub weights: Vec<f64>,
}

impl Envelope {
    /// An envelope of `number_of_frames` zero weights.
    pub fn zeros(number_of_frames: usize) -> Self {
        Self {
            weights: vec![0.0; number_of_frames],
        }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// `true` for a zero-frame envelope.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weights as a slice, indexed by frame.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Weight at `frame`, or `None` past the end of the timeline.
    pub fn get(&self, frame: FrameIndex) -> Option<f64> {
        self.weights.get(frame.0).copied()
    }

    /// Largest weight, 0.0 for an all-zero envelope.
    pub fn peak(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max)
    }

    /// Smallest range holding every nonzero weight.
    pub fn support(&self) -> Option<FrameRange> {
        let first = self.weights.iter().position(|&w| w != 0.0)?;
        let last = self.weights.iter().rposition(|&w| w != 0.0)?;
        Some(FrameRange::span(first, last + 1 - first))
    }

    fn write_at(&mut self, start: usize, values: &[f64]) {
        let Some(dst) = self.weights.get_mut(start..) else {
            return;
        };
        for (d, v) in dst.iter_mut().zip(values) {
            *d = *v;
        }
    }
}

impl From<Envelope> for Vec<f64> {
    fn from(e: Envelope) -> Self {
        e.weights
    }
}

/// Envelope for `image_number` (1-based) of `number_of_images`, with the default tail mode.
pub fn generate(
    number_of_frames: usize,
    number_of_images: usize,
    image_number: usize,
) -> CrossfadeResult<Envelope> {
    generate_with(
        &EnvelopeRequest::new(number_of_frames, number_of_images, image_number),
        EnvelopeOptions::default(),
    )
}

/// Envelope for `req`, placed according to `options`.
///
/// Fails with [`CrossfadeError::Contract`] when [`EnvelopeRequest::validate`] does.
#[tracing::instrument(level = "debug")]
pub fn generate_with(req: &EnvelopeRequest, options: EnvelopeOptions) -> CrossfadeResult<Envelope> {
    req.validate()?;

    let portion = req.portion_length();
    let role = req.role();
    let window = req.window(options);
    tracing::debug!(portion, ?role, start = window.start.0, "placing envelope");

    let curve: Vec<f64> = role
        .portions()
        .iter()
        .flat_map(|r| r.sample(portion))
        .collect();

    let mut env = Envelope::zeros(req.number_of_frames);
    env.write_at(window.start.0, &curve);
    Ok(env)
}

#[cfg(test)]
#[path = "../../tests/unit/envelope/generator.rs"]
mod tests;
