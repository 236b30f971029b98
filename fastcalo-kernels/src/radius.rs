//! Transverse radius evaluation across lanes.
//!
//! Radii are computed with the unguarded per-hit formula; a barrel hit at
//! eta = 0 shows up as a non-finite value. [`split_degenerate`] is the
//! filtering step downstream consumers apply before aggregating.

use crate::LaneConfig;
use fastcalo_core::{FlatSimHit, Result, SimHit, SimHitBatch};
use log::{debug, warn};
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Radii split into finite values and degenerate lanes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadiusPartition {
    /// `(lane, r)` for every lane with a finite radius, in lane order.
    pub finite: Vec<(usize, f32)>,
    /// Lanes whose radius is infinite or NaN, in lane order.
    pub degenerate: Vec<usize>,
}

impl RadiusPartition {
    /// Returns true when no lane was degenerate.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.degenerate.is_empty()
    }
}

/// Evaluates `r()` for every hit, preserving lane order.
#[must_use]
pub fn radii(hits: &[SimHit], config: &LaneConfig) -> Vec<f32> {
    debug!("evaluating radii for {} lanes", hits.len());
    if config.parallel {
        hits.par_iter()
            .with_min_len(config.min_lanes_per_task.max(1))
            .map(SimHit::r)
            .collect()
    } else {
        hits.iter().map(SimHit::r).collect()
    }
}

#[inline]
fn flat_radius(primary_a: f32, primary_b: f32, z: f32, is_cartesian: bool) -> f32 {
    FlatSimHit {
        primary_a,
        primary_b,
        z,
        is_cartesian,
        ..FlatSimHit::default()
    }
    .r()
}

/// Evaluates radii directly from the columns of a batch.
///
/// # Errors
///
/// Returns [`fastcalo_core::Error::ColumnLengthMismatch`] if the columns
/// disagree on the lane count.
pub fn batch_radii(batch: &SimHitBatch, config: &LaneConfig) -> Result<Vec<f32>> {
    batch.validate()?;
    debug!("evaluating radii for {} batch lanes", batch.len());
    let radii = if config.parallel {
        (
            batch.primary_a.par_iter(),
            batch.primary_b.par_iter(),
            batch.z.par_iter(),
            batch.is_cartesian.par_iter(),
        )
            .into_par_iter()
            .with_min_len(config.min_lanes_per_task.max(1))
            .map(|(&a, &b, &z, &cartesian)| flat_radius(a, b, z, cartesian))
            .collect()
    } else {
        batch
            .primary_a
            .iter()
            .zip(&batch.primary_b)
            .zip(&batch.z)
            .zip(&batch.is_cartesian)
            .map(|(((&a, &b), &z), &cartesian)| flat_radius(a, b, z, cartesian))
            .collect()
    };
    Ok(radii)
}

/// Evaluates radii and separates finite lanes from degenerate ones.
#[must_use]
pub fn split_degenerate(hits: &[SimHit], config: &LaneConfig) -> RadiusPartition {
    let mut partition = RadiusPartition::default();
    for (lane, r) in radii(hits, config).into_iter().enumerate() {
        if r.is_finite() {
            partition.finite.push((lane, r));
        } else {
            partition.degenerate.push(lane);
        }
    }

    if !partition.is_clean() {
        warn!(
            "{} of {} lanes have a non-finite radius",
            partition.degenerate.len(),
            hits.len()
        );
    }
    partition
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn mixed_hits() -> Vec<SimHit> {
        let mut barrel = SimHit::new();
        barrel.set_be_hit(1.0, 0.0, 10.0, 1.0);
        let mut flat_eta = SimHit::new();
        flat_eta.set_be_hit(0.0, 0.0, 10.0, 1.0);
        vec![
            SimHit::cartesian(3.0, 4.0, 4700.0, 1.0),
            barrel,
            flat_eta,
            SimHit::cartesian(0.0, 0.0, 4700.0, 1.0),
        ]
    }

    #[test]
    fn test_radii_order() {
        let hits = mixed_hits();
        for config in [LaneConfig::sequential(), LaneConfig::new().with_min_lanes_per_task(1)] {
            let r = radii(&hits, &config);
            assert_eq!(r.len(), 4);
            assert_eq!(r[0], 5.0);
            assert_eq!(r[1], 10.0 / 1.0_f32.sinh());
            assert!(r[2].is_infinite());
            assert_eq!(r[3], 0.0);
        }
    }

    #[test]
    fn test_split_degenerate() {
        let partition = split_degenerate(&mixed_hits(), &LaneConfig::sequential());
        assert!(!partition.is_clean());
        assert_eq!(partition.degenerate, vec![2]);
        let lanes: Vec<usize> = partition.finite.iter().map(|(lane, _)| *lane).collect();
        assert_eq!(lanes, vec![0, 1, 3]);
    }

    #[test]
    fn test_batch_radii_short_column() {
        let mut batch = SimHitBatch::from_hits(&mixed_hits());
        assert_eq!(batch_radii(&batch, &LaneConfig::sequential()).unwrap().len(), 4);

        batch.is_cartesian.pop();
        for config in [LaneConfig::sequential(), LaneConfig::default()] {
            assert_eq!(
                batch_radii(&batch, &config),
                Err(fastcalo_core::Error::ColumnLengthMismatch {
                    column: "is_cartesian",
                    expected: 4,
                    found: 3,
                })
            );
        }
    }

    #[test]
    fn test_split_clean() {
        let hits = [SimHit::cartesian(1.0, 0.0, 0.0, 0.0)];
        let partition = split_degenerate(&hits, &LaneConfig::default());
        assert!(partition.is_clean());
        assert_eq!(partition.finite, vec![(0, 1.0)]);
    }
}
