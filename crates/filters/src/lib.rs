#![forbid(unsafe_code)]

pub mod confidence;
pub mod config;
pub mod depth_filter;
pub mod plane_removal;

pub use confidence::confidence_filter;
pub use config::{FilterConfig, FilterConfigError};
pub use depth_filter::filter_depth;
pub use plane_removal::plane_surface_removal;
