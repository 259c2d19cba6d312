/// Errors from invalid filter parameters.
///
/// Out-of-range values are rejected here, at configuration time, rather
/// than clamped during filtering.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FilterConfigError {
    #[error("min_confidence must be within [0, 1], got {0}")]
    ConfidenceOutOfRange(f32),
    #[error("plane_distance must be finite and non-negative, got {0}")]
    InvalidPlaneDistance(f32),
}

/// Validated parameters for [`filter_depth`](crate::filter_depth).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    min_confidence: f32,
    plane_distance: f32,
}

impl FilterConfig {
    /// Samples below `min_confidence` are discarded; samples within
    /// `plane_distance` of a tracked surface (and inside its extent) are
    /// discarded as belonging to that surface.
    pub fn new(min_confidence: f32, plane_distance: f32) -> Result<Self, FilterConfigError> {
        if !min_confidence.is_finite() || !(0.0..=1.0).contains(&min_confidence) {
            return Err(FilterConfigError::ConfidenceOutOfRange(min_confidence));
        }
        if !plane_distance.is_finite() || plane_distance < 0.0 {
            return Err(FilterConfigError::InvalidPlaneDistance(plane_distance));
        }

        Ok(Self {
            min_confidence,
            plane_distance,
        })
    }

    pub fn min_confidence(&self) -> f32 {
        self.min_confidence
    }

    pub fn plane_distance(&self) -> f32 {
        self.plane_distance
    }
}

impl Default for FilterConfig {
    /// Half-confidence cutoff and a 5 cm plane exclusion band.
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
            plane_distance: 0.05,
        }
    }
}
