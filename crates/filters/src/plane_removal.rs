use depthclusters_core::{PlaneSurface, SampleCloud};

/// Drops samples that belong to a tracked flat surface.
///
/// A sample is removed when it lies within `max_distance` of some plane
/// and its in-plane projection falls inside that plane's polygon extent.
/// What remains is the depth that sticks out of the known floors, walls,
/// and tables, which is what the clusterer boxes up.
///
/// An empty plane set passes the cloud through unchanged.
pub fn plane_surface_removal(
    cloud: &SampleCloud,
    planes: &[PlaneSurface],
    max_distance: f32,
) -> SampleCloud {
    if cloud.is_empty() || planes.is_empty() {
        return cloud.clone();
    }

    let mut keep = Vec::new();
    for i in 0..cloud.len() {
        let p = cloud.point(i);
        let on_surface = planes.iter().any(|plane| {
            plane.distance_to_point(&p) <= max_distance && plane.contains_projection(&p)
        });
        if !on_surface {
            keep.push(i);
        }
    }

    cloud.select(&keep)
}
