//! fastcalo-kernels: Host-side lane dispatch for hit storage.
//!
//! This crate runs per-lane work over fastcalo hit storage:
//! - **Lanes** - apply a closure to every hit, one lane per instance
//! - **Radius** - evaluate transverse radii and separate degenerate lanes
//!
#![warn(missing_docs)]

mod config;
mod lanes;
mod radius;

pub use config::LaneConfig;
pub use lanes::{for_each_batch_lane, for_each_lane};
pub use radius::{batch_radii, radii, split_degenerate, RadiusPartition};

// Re-export core types
pub use fastcalo_core::{FlatSimHit, HitPosition, ShowerCenter, SimHit, SimHitBatch};
