use depthclusters_core::SampleCloud;
use nalgebra::{Isometry3, Point3};

/// Meters per raw sensor unit for 16-bit millimeter depth images.
pub const DEPTH_UNIT_METERS: f32 = 1e-3;

/// One frame's raw depth map: a dense grid of 16-bit depth values in
/// sensor units plus a per-pixel 8-bit confidence map.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthImage {
    width: usize,
    height: usize,
    depth: Vec<u16>,
    confidence: Vec<u8>,
}

impl DepthImage {
    /// # Panics
    ///
    /// Panics if either buffer length differs from `width * height`.
    pub fn new(width: usize, height: usize, depth: Vec<u16>, confidence: Vec<u8>) -> Self {
        assert_eq!(
            depth.len(),
            width * height,
            "depth buffer must have width * height values"
        );
        assert_eq!(
            confidence.len(),
            width * height,
            "confidence buffer must have width * height values"
        );

        Self {
            width,
            height,
            depth,
            confidence,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth_at(&self, x: usize, y: usize) -> u16 {
        self.depth[y * self.width + x]
    }

    pub fn confidence_at(&self, x: usize, y: usize) -> u8 {
        self.confidence[y * self.width + x]
    }
}

/// Pinhole camera intrinsics of the depth sensor, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    pub fx: f32,
    pub fy: f32,
    pub cx: f32,
    pub cy: f32,
}

/// Decodes every pixel of a depth image into a sample cloud.
///
/// See [`decode_strided`].
pub fn decode(
    image: &DepthImage,
    intrinsics: &CameraIntrinsics,
    depth_scale: f32,
    camera_to_world: &Isometry3<f32>,
) -> SampleCloud {
    decode_strided(image, intrinsics, depth_scale, camera_to_world, 1)
}

/// Decodes a depth image into a sample cloud, visiting every `stride`-th
/// pixel along both axes.
///
/// Each pixel with a non-zero raw depth is unprojected through the pinhole
/// model into the camera frame (`z = raw * depth_scale`, in meters for
/// millimeter sensors when `depth_scale == DEPTH_UNIT_METERS`), then mapped
/// by `camera_to_world` into the consuming frame. The 8-bit confidence is
/// scaled into `[0, 1]`. Zero-depth pixels carry no measurement and are
/// skipped.
///
/// # Panics
///
/// Panics if `stride` is zero.
pub fn decode_strided(
    image: &DepthImage,
    intrinsics: &CameraIntrinsics,
    depth_scale: f32,
    camera_to_world: &Isometry3<f32>,
    stride: usize,
) -> SampleCloud {
    assert!(stride > 0, "stride must be at least 1");

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut z = Vec::new();
    let mut confidence = Vec::new();

    for py in (0..image.height()).step_by(stride) {
        for px in (0..image.width()).step_by(stride) {
            let raw = image.depth_at(px, py);
            if raw == 0 {
                continue;
            }

            let depth = raw as f32 * depth_scale;
            let cam = Point3::new(
                (px as f32 - intrinsics.cx) * depth / intrinsics.fx,
                (py as f32 - intrinsics.cy) * depth / intrinsics.fy,
                depth,
            );
            let world = camera_to_world * cam;

            x.push(world.x);
            y.push(world.y);
            z.push(world.z);
            confidence.push(image.confidence_at(px, py) as f32 / 255.0);
        }
    }

    SampleCloud::from_xyz_confidence(x, y, z, confidence)
}
