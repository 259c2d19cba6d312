#![forbid(unsafe_code)]

pub mod config;
pub mod greedy;
mod grid;

pub use config::{ClusterConfig, ClusterConfigError};
pub use greedy::{cluster_samples, PointCluster};
