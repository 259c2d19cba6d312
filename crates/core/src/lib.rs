#![forbid(unsafe_code)]

pub mod bbox;
pub mod cloud;
pub mod plane;
pub mod sample;

pub use bbox::Aabb;
pub use cloud::SampleCloud;
pub use plane::PlaneSurface;
pub use sample::DepthSample;
