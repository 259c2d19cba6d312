/// Errors from invalid clustering parameters.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ClusterConfigError {
    #[error("proximity_threshold must be finite and positive, got {0}")]
    InvalidProximityThreshold(f32),
    #[error("min_cluster_size must be at least 1")]
    ZeroMinClusterSize,
}

/// Validated parameters for [`cluster_samples`](crate::cluster_samples).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConfig {
    proximity_threshold: f32,
    min_cluster_size: usize,
}

impl ClusterConfig {
    /// A point joins the nearest cluster whose centroid is within
    /// `proximity_threshold` (inclusive); clusters smaller than
    /// `min_cluster_size` are dropped from the output.
    pub fn new(
        proximity_threshold: f32,
        min_cluster_size: usize,
    ) -> Result<Self, ClusterConfigError> {
        if !proximity_threshold.is_finite() || proximity_threshold <= 0.0 {
            return Err(ClusterConfigError::InvalidProximityThreshold(
                proximity_threshold,
            ));
        }
        if min_cluster_size == 0 {
            return Err(ClusterConfigError::ZeroMinClusterSize);
        }

        Ok(Self {
            proximity_threshold,
            min_cluster_size,
        })
    }

    pub fn proximity_threshold(&self) -> f32 {
        self.proximity_threshold
    }

    pub fn min_cluster_size(&self) -> usize {
        self.min_cluster_size
    }
}

impl Default for ClusterConfig {
    /// Quarter-meter merge radius; single-point clusters kept.
    fn default() -> Self {
        Self {
            proximity_threshold: 0.25,
            min_cluster_size: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClusterConfig, ClusterConfigError};

    #[test]
    fn accepts_valid_parameters() {
        let config = ClusterConfig::new(0.1, 2).unwrap();
        assert_eq!(config.proximity_threshold(), 0.1);
        assert_eq!(config.min_cluster_size(), 2);
    }

    #[test]
    fn rejects_non_positive_threshold() {
        assert_eq!(
            ClusterConfig::new(0.0, 1),
            Err(ClusterConfigError::InvalidProximityThreshold(0.0))
        );
        assert_eq!(
            ClusterConfig::new(-0.5, 1),
            Err(ClusterConfigError::InvalidProximityThreshold(-0.5))
        );
    }

    #[test]
    fn rejects_non_finite_threshold() {
        assert!(ClusterConfig::new(f32::NAN, 1).is_err());
        assert!(ClusterConfig::new(f32::INFINITY, 1).is_err());
    }

    #[test]
    fn rejects_zero_min_cluster_size() {
        assert_eq!(
            ClusterConfig::new(0.1, 0),
            Err(ClusterConfigError::ZeroMinClusterSize)
        );
    }
}
