use crate::foundation::error::{CrossfadeError, CrossfadeResult};

/// Slots a host exposes for image inputs.
pub const DEFAULT_MASK_CAPACITY: usize = 10;

/// Fixed-length mask whose first `number_of_images` slots are active.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivationMask {
    /// `bits[i]` is `true` iff slot `i` holds an image.
    pub bits: Vec<bool>,
}

impl ActivationMask {
    /// Mask of [`DEFAULT_MASK_CAPACITY`] slots.
    pub fn new(number_of_images: usize) -> Self {
        Self::with_capacity(number_of_images, DEFAULT_MASK_CAPACITY)
    }

    /// Mask of `capacity` slots; images beyond the capacity are dropped.
    pub fn with_capacity(number_of_images: usize, capacity: usize) -> Self {
        Self {
            bits: (0..capacity).map(|i| i < number_of_images).collect(),
        }
    }

    /// Slots as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// `true` for a zero-capacity mask.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of active slots.
    pub fn active_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// See [`at`].
    pub fn at(&self, index: i64) -> CrossfadeResult<bool> {
        at(&self.bits, index)
    }
}

impl From<ActivationMask> for Vec<bool> {
    fn from(m: ActivationMask) -> Self {
        m.bits
    }
}

/// Default-capacity mask as a plain vector: element `i` is `i < number_of_images`.
pub fn mask(number_of_images: usize) -> Vec<bool> {
    ActivationMask::new(number_of_images).into()
}

/// `mask[index]`, with negative or too-large indices rejected rather than wrapped.
pub fn at(mask: &[bool], index: i64) -> CrossfadeResult<bool> {
    usize::try_from(index)
        .ok()
        .and_then(|i| mask.get(i).copied())
        .ok_or_else(|| CrossfadeError::index_out_of_range(index, mask.len()))
}

#[cfg(test)]
#[path = "../../tests/unit/mask/activation.rs"]
mod tests;
