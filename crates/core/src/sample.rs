/// A single depth-sensor reading reconstructed into 3D.
///
/// Positions are in a consistent camera/world frame; `confidence` is the
/// sensor's estimate of reliability in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub confidence: f32,
}

impl DepthSample {
    pub fn new(x: f32, y: f32, z: f32, confidence: f32) -> Self {
        Self {
            x,
            y,
            z,
            confidence,
        }
    }

    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}
