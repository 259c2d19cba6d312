#![forbid(unsafe_code)]

pub mod image;

pub use image::{decode, decode_strided, CameraIntrinsics, DepthImage, DEPTH_UNIT_METERS};
