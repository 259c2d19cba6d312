use crate::{Aabb, DepthSample};

/// One frame's worth of depth samples in structure-of-arrays layout.
///
/// Every sample carries a confidence channel in `[0, 1]`. The cloud is
/// built fresh each frame and never mutated after construction; filtering
/// produces a new cloud via [`select`](Self::select).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleCloud {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    pub confidence: Vec<f32>,
}

impl SampleCloud {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            confidence: Vec::new(),
        }
    }

    pub fn from_xyz_confidence(
        x: Vec<f32>,
        y: Vec<f32>,
        z: Vec<f32>,
        confidence: Vec<f32>,
    ) -> Self {
        assert_eq!(x.len(), y.len(), "x and y must have same length");
        assert_eq!(x.len(), z.len(), "x and z must have same length");
        assert_eq!(
            x.len(),
            confidence.len(),
            "x and confidence must have same length"
        );

        Self {
            x,
            y,
            z,
            confidence,
        }
    }

    pub fn from_samples(samples: &[DepthSample]) -> Self {
        let mut x = Vec::with_capacity(samples.len());
        let mut y = Vec::with_capacity(samples.len());
        let mut z = Vec::with_capacity(samples.len());
        let mut confidence = Vec::with_capacity(samples.len());

        for s in samples {
            x.push(s.x);
            y.push(s.y);
            z.push(s.z);
            confidence.push(s.confidence);
        }

        Self {
            x,
            y,
            z,
            confidence,
        }
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.x.len(), self.y.len());
        debug_assert_eq!(self.x.len(), self.z.len());
        debug_assert_eq!(self.x.len(), self.confidence.len());
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn point(&self, i: usize) -> [f32; 3] {
        [self.x[i], self.y[i], self.z[i]]
    }

    pub fn sample(&self, i: usize) -> DepthSample {
        DepthSample::new(self.x[i], self.y[i], self.z[i], self.confidence[i])
    }

    pub fn iter_points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| [*x, *y, *z])
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.iter_points())
    }

    /// Builds a new cloud containing the samples at the given indices, in
    /// the given order.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut x = Vec::with_capacity(indices.len());
        let mut y = Vec::with_capacity(indices.len());
        let mut z = Vec::with_capacity(indices.len());
        let mut confidence = Vec::with_capacity(indices.len());

        for &idx in indices {
            assert!(idx < self.len(), "index out of bounds in select");
            x.push(self.x[idx]);
            y.push(self.y[idx]);
            z.push(self.z[idx]);
            confidence.push(self.confidence[idx]);
        }

        Self {
            x,
            y,
            z,
            confidence,
        }
    }

    /// Interleaves positions as `[x0, y0, z0, x1, ...]` for upload to a
    /// vertex buffer when visualizing the raw filtered depth.
    pub fn to_interleaved_xyz(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.len() * 3);
        for i in 0..self.len() {
            out.push(self.x[i]);
            out.push(self.y[i]);
            out.push(self.z[i]);
        }
        out
    }
}

impl Default for SampleCloud {
    fn default() -> Self {
        Self::new()
    }
}
