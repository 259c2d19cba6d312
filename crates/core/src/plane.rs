/// A tracked flat physical surface (floor, wall, table) with a bounded
/// extent.
///
/// The plane is given by a unit `normal` and a `center` point on the
/// plane. Its physical extent is a polygon expressed as 2D vertices in a
/// plane-local tangent frame derived deterministically from the normal.
/// Surfaces are owned by the external tracking system; this type is a
/// read-only per-frame snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneSurface {
    normal: [f32; 3],
    center: [f32; 3],
    basis_u: [f32; 3],
    basis_v: [f32; 3],
    polygon: Vec<[f32; 2]>,
}

impl PlaneSurface {
    /// Builds a plane surface from a normal, a point on the plane, and a
    /// polygon extent in the plane-local frame (see [`local_coords`]).
    ///
    /// The normal is normalized internally. A polygon with fewer than 3
    /// vertices has no area, so such a surface never contains any
    /// projection.
    ///
    /// # Panics
    ///
    /// Panics if `normal` is zero-length or non-finite.
    ///
    /// [`local_coords`]: Self::local_coords
    pub fn new(normal: [f32; 3], center: [f32; 3], polygon: Vec<[f32; 2]>) -> Self {
        let len =
            (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
        assert!(
            len.is_finite() && len > 1e-10,
            "plane normal must be finite and non-zero"
        );
        let n = [normal[0] / len, normal[1] / len, normal[2] / len];

        let (basis_u, basis_v) = tangent_basis(&n);

        Self {
            normal: n,
            center,
            basis_u,
            basis_v,
            polygon,
        }
    }

    pub fn normal(&self) -> [f32; 3] {
        self.normal
    }

    pub fn center(&self) -> [f32; 3] {
        self.center
    }

    pub fn polygon(&self) -> &[[f32; 2]] {
        &self.polygon
    }

    /// Absolute distance from a point to the infinite plane.
    #[inline]
    pub fn distance_to_point(&self, point: &[f32; 3]) -> f32 {
        let d = [
            point[0] - self.center[0],
            point[1] - self.center[1],
            point[2] - self.center[2],
        ];
        (self.normal[0] * d[0] + self.normal[1] * d[1] + self.normal[2] * d[2]).abs()
    }

    /// Coordinates of a point's orthogonal projection onto the plane,
    /// expressed in the plane-local tangent frame.
    pub fn local_coords(&self, point: &[f32; 3]) -> [f32; 2] {
        let d = [
            point[0] - self.center[0],
            point[1] - self.center[1],
            point[2] - self.center[2],
        ];
        [
            self.basis_u[0] * d[0] + self.basis_u[1] * d[1] + self.basis_u[2] * d[2],
            self.basis_v[0] * d[0] + self.basis_v[1] * d[1] + self.basis_v[2] * d[2],
        ]
    }

    /// Whether the point's in-plane projection falls inside the polygon
    /// extent (even-odd crossing test). Points exactly on an edge count as
    /// inside, which errs toward discarding plane-adjacent depth samples.
    pub fn contains_projection(&self, point: &[f32; 3]) -> bool {
        if self.polygon.len() < 3 || !point.iter().all(|v| v.is_finite()) {
            return false;
        }

        let [px, py] = self.local_coords(point);

        let mut inside = false;
        let n = self.polygon.len();
        let mut j = n - 1;
        for i in 0..n {
            let [xi, yi] = self.polygon[i];
            let [xj, yj] = self.polygon[j];

            // Edge hit counts as inside.
            if on_segment(px, py, xi, yi, xj, yj) {
                return true;
            }

            if (yi > py) != (yj > py) {
                let cross = (xj - xi) * (py - yi) / (yj - yi) + xi;
                if px < cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Orthonormal tangent vectors for a unit normal, derived from the world
/// axis least aligned with it so the basis is stable across frames.
fn tangent_basis(n: &[f32; 3]) -> ([f32; 3], [f32; 3]) {
    let abs = [n[0].abs(), n[1].abs(), n[2].abs()];
    let axis: [f32; 3] = if abs[0] <= abs[1] && abs[0] <= abs[2] {
        [1.0, 0.0, 0.0]
    } else if abs[1] <= abs[2] {
        [0.0, 1.0, 0.0]
    } else {
        [0.0, 0.0, 1.0]
    };

    // u = normalize(axis x n), v = n x u
    let u = [
        axis[1] * n[2] - axis[2] * n[1],
        axis[2] * n[0] - axis[0] * n[2],
        axis[0] * n[1] - axis[1] * n[0],
    ];
    let len = (u[0] * u[0] + u[1] * u[1] + u[2] * u[2]).sqrt();
    let u = [u[0] / len, u[1] / len, u[2] / len];
    let v = [
        n[1] * u[2] - n[2] * u[1],
        n[2] * u[0] - n[0] * u[2],
        n[0] * u[1] - n[1] * u[0],
    ];
    (u, v)
}

fn on_segment(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> bool {
    let cross = (x1 - x0) * (py - y0) - (y1 - y0) * (px - x0);
    if cross.abs() > 1e-6 {
        return false;
    }
    px >= x0.min(x1) - 1e-6
        && px <= x0.max(x1) + 1e-6
        && py >= y0.min(y1) - 1e-6
        && py <= y0.max(y1) + 1e-6
}
