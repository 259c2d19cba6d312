#![forbid(unsafe_code)]

//! Per-frame depth filtering and proximity clustering for AR obstacle
//! boxes.
//!
//! Each frame the host renderer decodes a depth image into a
//! [`SampleCloud`], cleans it against the tracked [`PlaneSurface`]s, and
//! groups what remains into clusters, drawing one [`Aabb`] per cluster.
//! Both stages are stateless pure functions of the frame's input: clusters
//! are recomputed from scratch every frame, which keeps identity tracking
//! out of the picture at the cost of some box flicker across frames. That
//! flicker is a known limitation, not something this crate tries to smooth
//! over.

pub use depthclusters_cluster::{
    cluster_samples, ClusterConfig, ClusterConfigError, PointCluster,
};
pub use depthclusters_core::{Aabb, DepthSample, PlaneSurface, SampleCloud};
pub use depthclusters_depth::{
    decode, decode_strided, CameraIntrinsics, DepthImage, DEPTH_UNIT_METERS,
};
pub use depthclusters_filters::{
    confidence_filter, filter_depth, plane_surface_removal, FilterConfig, FilterConfigError,
};

/// Per-frame pipeline facade holding the validated configuration.
///
/// The renderer calls [`filtered_points`](Self::filtered_points) when it
/// wants the cleaned depth for visualization and
/// [`cluster_boxes`](Self::cluster_boxes) for the boxes themselves. The
/// processor carries no per-frame state; invocations on different frames
/// are independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameProcessor {
    filter: FilterConfig,
    cluster: ClusterConfig,
}

impl FrameProcessor {
    pub fn new(filter: FilterConfig, cluster: ClusterConfig) -> Self {
        Self { filter, cluster }
    }

    pub fn filter_config(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn cluster_config(&self) -> &ClusterConfig {
        &self.cluster
    }

    /// The frame's depth samples that survive the confidence, validity,
    /// and plane-surface passes.
    pub fn filtered_points(
        &self,
        cloud: &SampleCloud,
        planes: &[PlaneSurface],
    ) -> SampleCloud {
        filter_depth(cloud, planes, &self.filter)
    }

    /// One axis-aligned bounding box per cluster of nearby filtered
    /// samples. The renderer applies the camera view/projection transform
    /// when drawing them.
    pub fn cluster_boxes(&self, cloud: &SampleCloud, planes: &[PlaneSurface]) -> Vec<Aabb> {
        let filtered = self.filtered_points(cloud, planes);
        cluster_samples(&filtered, &self.cluster)
            .into_iter()
            .map(|c| c.aabb)
            .collect()
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            cluster: ClusterConfig::default(),
        }
    }
}
