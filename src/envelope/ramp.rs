/// Direction of a single portion of an envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ramp {
    /// 0 -> 1, the image fading in.
    Rising,
    /// 1 -> 0, the image fading out.
    Falling,
}

impl Ramp {
    /// `(start, end)` values of the ramp.
    pub fn anchors(self) -> (f64, f64) {
        match self {
            Self::Rising => (0.0, 1.0),
            Self::Falling => (1.0, 0.0),
        }
    }

    /// `num_points` evenly spaced samples between the anchors.
    pub fn sample(self, num_points: usize) -> Vec<f64> {
        let (start, end) = self.anchors();
        ramp(start, end, num_points)
    }
}

/// Evenly spaced samples from `start` to `end`, both inclusive.
///
/// A cubic fit through collinear samples is the line itself, so this is the
/// exact shape a two-anchor cubic interpolation produces. The last sample is
/// pinned to `end` so endpoints never drift by rounding.
pub fn ramp(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    match num_points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/envelope/ramp.rs"]
mod tests;
