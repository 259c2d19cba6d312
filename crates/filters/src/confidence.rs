use depthclusters_core::SampleCloud;

/// Drops unreliable and invalid samples.
///
/// A sample is kept when its confidence is at least `min_confidence`, all
/// position components are finite, and the position is not the origin.
/// A zero raw depth reading unprojects to the origin, so an all-zero
/// position marks a pixel with no measurement.
pub fn confidence_filter(cloud: &SampleCloud, min_confidence: f32) -> SampleCloud {
    if cloud.is_empty() {
        return SampleCloud::new();
    }

    let mut keep = Vec::new();
    for i in 0..cloud.len() {
        let p = cloud.point(i);
        if !p.iter().all(|v| v.is_finite()) {
            continue;
        }
        if p == [0.0, 0.0, 0.0] {
            continue;
        }

        let c = cloud.confidence[i];
        if c.is_finite() && c >= min_confidence {
            keep.push(i);
        }
    }

    cloud.select(&keep)
}

#[cfg(test)]
mod tests {
    use super::confidence_filter;
    use depthclusters_core::SampleCloud;
    use proptest::prelude::*;

    fn sample_cloud() -> SampleCloud {
        SampleCloud::from_xyz_confidence(
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![1.0, 1.0, 1.0, 1.0, 1.0],
            vec![2.0, 2.0, 2.0, 2.0, 2.0],
            vec![0.1, 0.3, 0.5, 0.7, 0.9],
        )
    }

    #[test]
    fn drops_low_confidence_samples() {
        let result = confidence_filter(&sample_cloud(), 0.5);
        assert_eq!(result.len(), 3);
        assert_eq!(result.confidence, vec![0.5, 0.7, 0.9]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let result = confidence_filter(&sample_cloud(), 0.9);
        assert_eq!(result.len(), 1);
        assert_eq!(result.x, vec![5.0]);
    }

    #[test]
    fn zero_threshold_keeps_everything_valid() {
        let result = confidence_filter(&sample_cloud(), 0.0);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn drops_non_finite_positions() {
        let cloud = SampleCloud::from_xyz_confidence(
            vec![1.0, f32::NAN, f32::INFINITY],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
        );
        let result = confidence_filter(&cloud, 0.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result.x, vec![1.0]);
    }

    #[test]
    fn drops_origin_samples_as_zero_depth() {
        let cloud = SampleCloud::from_xyz_confidence(
            vec![0.0, 0.5],
            vec![0.0, 0.5],
            vec![0.0, 0.5],
            vec![1.0, 1.0],
        );
        let result = confidence_filter(&cloud, 0.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result.point(0), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn drops_nan_confidence() {
        let cloud = SampleCloud::from_xyz_confidence(
            vec![1.0, 2.0],
            vec![1.0, 1.0],
            vec![1.0, 1.0],
            vec![f32::NAN, 0.8],
        );
        let result = confidence_filter(&cloud, 0.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result.x, vec![2.0]);
    }

    #[test]
    fn empty_cloud_passes_through() {
        let result = confidence_filter(&SampleCloud::new(), 0.5);
        assert!(result.is_empty());
    }

    proptest! {
        #[test]
        fn retained_samples_meet_the_threshold(
            samples in prop::collection::vec(
                (-100.0f32..100.0, -100.0f32..100.0, 0.1f32..100.0, 0.0f32..=1.0),
                0..300
            ),
            threshold in 0.0f32..=1.0,
        ) {
            let cloud = SampleCloud::from_xyz_confidence(
                samples.iter().map(|s| s.0).collect(),
                samples.iter().map(|s| s.1).collect(),
                samples.iter().map(|s| s.2).collect(),
                samples.iter().map(|s| s.3).collect(),
            );
            let result = confidence_filter(&cloud, threshold);
            prop_assert!(result.len() <= cloud.len());
            for &c in &result.confidence {
                prop_assert!(c >= threshold);
            }
        }
    }
}
