use crate::{confidence_filter, plane_surface_removal, FilterConfig};
use depthclusters_core::{PlaneSurface, SampleCloud};

/// Cleans one frame's raw depth samples for clustering.
///
/// Applies the confidence/validity pass, then removes samples that belong
/// to a tracked plane surface. A sample lying exactly on a plane inside
/// its extent is therefore removed whenever its confidence would otherwise
/// have kept it. Empty input or an empty plane set is fine; the result is
/// simply empty or pass-through.
pub fn filter_depth(
    cloud: &SampleCloud,
    planes: &[PlaneSurface],
    config: &FilterConfig,
) -> SampleCloud {
    let reliable = confidence_filter(cloud, config.min_confidence());
    plane_surface_removal(&reliable, planes, config.plane_distance())
}
