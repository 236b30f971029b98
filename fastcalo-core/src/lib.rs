//! fastcalo-core: Hit records for fast calorimeter shower simulation.
//!
//! This crate provides the value types that parallel shower kernels fill
//! one lane at a time: the hit record itself, its packed kernel layout,
//! and Structure-of-Arrays storage for a bounded set of lanes.
//!

pub mod error;
pub mod flat;
pub mod hit;
pub mod soa;

pub use error::{Error, Result};
pub use flat::FlatSimHit;
pub use hit::{HitPosition, ShowerCenter, SimHit};
pub use soa::SimHitBatch;
