use hashbrown::HashMap;

/// Uniform hash grid over cluster centroids.
///
/// Cell edge equals the proximity threshold, so every centroid within the
/// threshold of a query point lives in the 27-cell neighborhood of the
/// query's cell. Centroids move as clusters absorb points; [`relocate`]
/// moves a cluster between cells when its centroid crosses a boundary.
///
/// [`relocate`]: Self::relocate
pub(crate) struct CentroidGrid {
    cell: f32,
    cells: HashMap<(i32, i32, i32), Vec<usize>>,
}

impl CentroidGrid {
    pub(crate) fn new(cell: f32) -> Self {
        debug_assert!(cell.is_finite() && cell > 0.0);
        Self {
            cell,
            cells: HashMap::new(),
        }
    }

    fn key(&self, p: &[f32; 3]) -> (i32, i32, i32) {
        (
            (p[0] / self.cell).floor() as i32,
            (p[1] / self.cell).floor() as i32,
            (p[2] / self.cell).floor() as i32,
        )
    }

    pub(crate) fn insert(&mut self, cluster: usize, centroid: &[f32; 3]) {
        let key = self.key(centroid);
        self.cells.entry(key).or_default().push(cluster);
    }

    pub(crate) fn relocate(&mut self, cluster: usize, old: &[f32; 3], new: &[f32; 3]) {
        let old_key = self.key(old);
        let new_key = self.key(new);
        if old_key == new_key {
            return;
        }

        if let Some(bucket) = self.cells.get_mut(&old_key) {
            if let Some(pos) = bucket.iter().position(|&c| c == cluster) {
                bucket.swap_remove(pos);
            }
            if bucket.is_empty() {
                self.cells.remove(&old_key);
            }
        }
        self.cells.entry(new_key).or_default().push(cluster);
    }

    /// Collects into `out` every cluster whose centroid could be within one
    /// cell edge of `p`. Candidate order is arbitrary; callers must decide
    /// ties on (distance, cluster index), not on encounter order.
    ///
    /// Keys saturate at the i32 range for extreme coordinates, so the
    /// neighborhood offsets use saturating adds too. Saturation can alias
    /// far-apart cells onto the same key; that only over-collects, and the
    /// caller's exact distance check rejects the impostors.
    pub(crate) fn candidates(&self, p: &[f32; 3], out: &mut Vec<usize>) {
        out.clear();
        let (kx, ky, kz) = self.key(p);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let key = (
                        kx.saturating_add(dx),
                        ky.saturating_add(dy),
                        kz.saturating_add(dz),
                    );
                    if let Some(bucket) = self.cells.get(&key) {
                        out.extend_from_slice(bucket);
                    }
                }
            }
        }
    }
}
