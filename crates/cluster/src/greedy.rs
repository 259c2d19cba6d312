use crate::grid::CentroidGrid;
use crate::ClusterConfig;
use depthclusters_core::{Aabb, SampleCloud};

/// A group of spatially contiguous depth samples and its bounding box.
///
/// `indices` point into the filtered cloud the clusterer was given, in
/// insertion order. Every cluster has at least one member and no index
/// appears in two clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCluster {
    pub indices: Vec<usize>,
    pub centroid: [f32; 3],
    pub aabb: Aabb,
}

/// Running accumulator for one active cluster.
struct ClusterAccum {
    sx: f32,
    sy: f32,
    sz: f32,
    indices: Vec<usize>,
    aabb: Aabb,
}

impl ClusterAccum {
    fn seed(index: usize, p: [f32; 3]) -> Self {
        let mut aabb = Aabb::empty();
        aabb.expand_with_point(p);
        Self {
            sx: p[0],
            sy: p[1],
            sz: p[2],
            indices: vec![index],
            aabb,
        }
    }

    fn centroid(&self) -> [f32; 3] {
        let n = self.indices.len() as f32;
        [self.sx / n, self.sy / n, self.sz / n]
    }

    fn push(&mut self, index: usize, p: [f32; 3]) {
        self.sx += p[0];
        self.sy += p[1];
        self.sz += p[2];
        self.indices.push(index);
        self.aabb.expand_with_point(p);
    }
}

/// Groups filtered depth samples into spatial clusters, one AABB each.
///
/// Single greedy pass in input order: each point joins the nearest active
/// cluster whose running centroid is within the proximity threshold
/// (inclusive), otherwise it seeds a new cluster. Joining updates the
/// cluster's centroid (arithmetic mean of its members, so the reference
/// does not drift toward the first point seen) and expands its AABB.
/// Equidistant candidates resolve to the earliest-created cluster.
///
/// Clusters smaller than `min_cluster_size` are dropped after the pass.
/// Output order is cluster creation order. The pass is a pure function of
/// the input sequence and config; identical calls produce identical output.
///
/// Non-finite points are skipped; they belong to no cluster. Nearest-
/// centroid lookups go through a uniform grid keyed at the threshold, so
/// per-point cost scales with local cluster density rather than the total
/// cluster count.
pub fn cluster_samples(cloud: &SampleCloud, config: &ClusterConfig) -> Vec<PointCluster> {
    if cloud.is_empty() {
        return Vec::new();
    }

    let threshold = config.proximity_threshold();
    let r2 = threshold * threshold;

    let mut accums: Vec<ClusterAccum> = Vec::new();
    let mut grid = CentroidGrid::new(threshold);
    let mut candidates = Vec::new();

    for i in 0..cloud.len() {
        let p = cloud.point(i);
        if !p.iter().all(|v| v.is_finite()) {
            continue;
        }

        grid.candidates(&p, &mut candidates);

        let mut best: Option<(f32, usize)> = None;
        for &c in &candidates {
            let centroid = accums[c].centroid();
            let dx = centroid[0] - p[0];
            let dy = centroid[1] - p[1];
            let dz = centroid[2] - p[2];
            let d2 = dx * dx + dy * dy + dz * dz;
            if d2 > r2 {
                continue;
            }
            let closer = match best {
                None => true,
                Some((bd2, bc)) => d2 < bd2 || (d2 == bd2 && c < bc),
            };
            if closer {
                best = Some((d2, c));
            }
        }

        match best {
            Some((_, c)) => {
                let old = accums[c].centroid();
                accums[c].push(i, p);
                let new = accums[c].centroid();
                grid.relocate(c, &old, &new);
            }
            None => {
                accums.push(ClusterAccum::seed(i, p));
                grid.insert(accums.len() - 1, &p);
            }
        }
    }

    accums
        .into_iter()
        .filter(|a| a.indices.len() >= config.min_cluster_size())
        .map(|a| PointCluster {
            centroid: a.centroid(),
            indices: a.indices,
            aabb: a.aabb,
        })
        .collect()
}
