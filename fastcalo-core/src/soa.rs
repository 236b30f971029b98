//! Structure of Arrays (`SoA`) storage for simulation lanes.
//!
//! `SimHitBatch` keeps one column per field of [`FlatSimHit`], so a kernel
//! that only needs energies or radii streams through contiguous memory.
//! Each index is one lane; lanes never share state.
//!
//! The columns are public, so a batch is only usable when they all agree on
//! the lane count. [`SimHitBatch::validate`] checks that, and the `serde`
//! feature rejects mismatched columns at deserialization time.

use crate::error::{Error, Result};
use crate::flat::FlatSimHit;
use crate::hit::SimHit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bounded set of hit lanes stored in Structure of Arrays (`SoA`) format.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "BatchColumns")
)]
pub struct SimHitBatch {
    /// Eta (barrel/end-cap) or x (FCal) per lane.
    pub primary_a: Vec<f32>,
    /// Phi (barrel/end-cap) or y (FCal) per lane.
    pub primary_b: Vec<f32>,
    /// Longitudinal coordinate per lane.
    pub z: Vec<f32>,
    /// Deposited energy per lane.
    pub energy: Vec<f32>,
    /// Coordinate system flag per lane.
    pub is_cartesian: Vec<bool>,
    /// Shower center radius per lane.
    pub center_r: Vec<f32>,
    /// Shower center z per lane.
    pub center_z: Vec<f32>,
    /// Shower center eta per lane.
    pub center_eta: Vec<f32>,
    /// Shower center phi per lane.
    pub center_phi: Vec<f32>,
}

impl SimHitBatch {
    /// Creates a new empty batch with specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            primary_a: Vec::with_capacity(capacity),
            primary_b: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
            energy: Vec::with_capacity(capacity),
            is_cartesian: Vec::with_capacity(capacity),
            center_r: Vec::with_capacity(capacity),
            center_z: Vec::with_capacity(capacity),
            center_eta: Vec::with_capacity(capacity),
            center_phi: Vec::with_capacity(capacity),
        }
    }

    /// Creates a batch of `count` default-constructed lanes.
    #[must_use]
    pub fn lanes(count: usize) -> Self {
        Self {
            primary_a: vec![0.0; count],
            primary_b: vec![0.0; count],
            z: vec![0.0; count],
            energy: vec![0.0; count],
            is_cartesian: vec![false; count],
            center_r: vec![0.0; count],
            center_z: vec![0.0; count],
            center_eta: vec![0.0; count],
            center_phi: vec![0.0; count],
        }
    }

    /// Builds a batch from a slice of hits, preserving order.
    #[must_use]
    pub fn from_hits(hits: &[SimHit]) -> Self {
        let mut batch = Self::with_capacity(hits.len());
        for hit in hits {
            batch.push(*hit);
        }
        batch
    }

    /// Returns the number of lanes in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary_a.len()
    }

    /// Returns true if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary_a.is_empty()
    }

    /// Clears all columns.
    pub fn clear(&mut self) {
        self.primary_a.clear();
        self.primary_b.clear();
        self.z.clear();
        self.energy.clear();
        self.is_cartesian.clear();
        self.center_r.clear();
        self.center_z.clear();
        self.center_eta.clear();
        self.center_phi.clear();
    }

    /// Appends all lanes from another batch to this one.
    pub fn append(&mut self, other: &SimHitBatch) {
        self.primary_a.extend_from_slice(&other.primary_a);
        self.primary_b.extend_from_slice(&other.primary_b);
        self.z.extend_from_slice(&other.z);
        self.energy.extend_from_slice(&other.energy);
        self.is_cartesian.extend_from_slice(&other.is_cartesian);
        self.center_r.extend_from_slice(&other.center_r);
        self.center_z.extend_from_slice(&other.center_z);
        self.center_eta.extend_from_slice(&other.center_eta);
        self.center_phi.extend_from_slice(&other.center_phi);
    }

    /// Pushes a single hit as a new lane.
    pub fn push(&mut self, hit: SimHit) {
        let flat = FlatSimHit::from(hit);
        self.primary_a.push(flat.primary_a);
        self.primary_b.push(flat.primary_b);
        self.z.push(flat.z);
        self.energy.push(flat.energy);
        self.is_cartesian.push(flat.is_cartesian);
        self.center_r.push(flat.center_r);
        self.center_z.push(flat.center_z);
        self.center_eta.push(flat.center_eta);
        self.center_phi.push(flat.center_phi);
    }

    /// Checks that every column holds `self.len()` lanes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnLengthMismatch`] naming the first column whose
    /// length differs from `primary_a`.
    pub fn validate(&self) -> Result<()> {
        let expected = self.len();
        let columns = [
            ("primary_b", self.primary_b.len()),
            ("z", self.z.len()),
            ("energy", self.energy.len()),
            ("is_cartesian", self.is_cartesian.len()),
            ("center_r", self.center_r.len()),
            ("center_z", self.center_z.len()),
            ("center_eta", self.center_eta.len()),
            ("center_phi", self.center_phi.len()),
        ];
        match columns.into_iter().find(|&(_, found)| found != expected) {
            Some((column, found)) => Err(Error::ColumnLengthMismatch {
                column,
                expected,
                found,
            }),
            None => Ok(()),
        }
    }

    /// Returns the packed form of one lane.
    ///
    /// `None` when any column is too short to hold `lane`.
    #[must_use]
    pub fn get_flat(&self, lane: usize) -> Option<FlatSimHit> {
        Some(FlatSimHit {
            primary_a: *self.primary_a.get(lane)?,
            primary_b: *self.primary_b.get(lane)?,
            z: *self.z.get(lane)?,
            energy: *self.energy.get(lane)?,
            is_cartesian: *self.is_cartesian.get(lane)?,
            center_r: *self.center_r.get(lane)?,
            center_z: *self.center_z.get(lane)?,
            center_eta: *self.center_eta.get(lane)?,
            center_phi: *self.center_phi.get(lane)?,
        })
    }

    /// Returns the hit stored in one lane.
    #[must_use]
    pub fn get(&self, lane: usize) -> Option<SimHit> {
        self.get_flat(lane).map(SimHit::from)
    }

    /// Overwrites one lane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnLengthMismatch`] if the columns disagree on the
    /// lane count, and [`Error::LaneOutOfRange`] if `lane >= self.len()`.
    pub fn set(&mut self, lane: usize, hit: SimHit) -> Result<()> {
        self.validate()?;
        let len = self.len();
        if lane >= len {
            return Err(Error::LaneOutOfRange { lane, len });
        }
        let flat = FlatSimHit::from(hit);
        self.primary_a[lane] = flat.primary_a;
        self.primary_b[lane] = flat.primary_b;
        self.z[lane] = flat.z;
        self.energy[lane] = flat.energy;
        self.is_cartesian[lane] = flat.is_cartesian;
        self.center_r[lane] = flat.center_r;
        self.center_z[lane] = flat.center_z;
        self.center_eta[lane] = flat.center_eta;
        self.center_phi[lane] = flat.center_phi;
        Ok(())
    }

    /// Returns one lane, shower center included, to the default state.
    ///
    /// # Errors
    ///
    /// Same as [`SimHitBatch::set`].
    pub fn reset_lane(&mut self, lane: usize) -> Result<()> {
        self.set(lane, SimHit::default())
    }

    /// Iterates over the lanes as hit records.
    ///
    /// Stops at the first lane missing from a short column.
    pub fn iter(&self) -> impl Iterator<Item = SimHit> + '_ {
        (0..self.len()).map_while(move |lane| self.get(lane))
    }

    /// Copies every lane out into a vector of hits.
    #[must_use]
    pub fn to_hits(&self) -> Vec<SimHit> {
        self.iter().collect()
    }
}

/// Wire form of [`SimHitBatch`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct BatchColumns {
    primary_a: Vec<f32>,
    primary_b: Vec<f32>,
    z: Vec<f32>,
    energy: Vec<f32>,
    is_cartesian: Vec<bool>,
    center_r: Vec<f32>,
    center_z: Vec<f32>,
    center_eta: Vec<f32>,
    center_phi: Vec<f32>,
}

#[cfg(feature = "serde")]
impl TryFrom<BatchColumns> for SimHitBatch {
    type Error = Error;

    fn try_from(columns: BatchColumns) -> Result<Self> {
        let batch = Self {
            primary_a: columns.primary_a,
            primary_b: columns.primary_b,
            z: columns.z,
            energy: columns.energy,
            is_cartesian: columns.is_cartesian,
            center_r: columns.center_r,
            center_z: columns.center_z,
            center_eta: columns.center_eta,
            center_phi: columns.center_phi,
        };
        batch.validate()?;
        Ok(batch)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::hit::ShowerCenter;

    #[test]
    fn test_batch_operations() {
        let mut batch = SimHitBatch::with_capacity(10);
        assert!(batch.is_empty());

        batch.push(SimHit::cylindrical(0.5, 1.0, 20.0));
        assert_eq!(batch.len(), 1);
        assert!(!batch.is_cartesian[0]);
        assert_eq!(batch.energy[0], 20.0);

        batch.push(SimHit::cartesian(3.0, 4.0, 4700.0, 2.0));
        assert_eq!(batch.len(), 2);
        assert!(batch.is_cartesian[1]);

        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }

    #[test]
    fn test_lanes_are_default() {
        let batch = SimHitBatch::lanes(4);
        assert_eq!(batch.len(), 4);
        assert!(batch.iter().all(|hit| hit == SimHit::default()));
    }

    #[test]
    fn test_get_set_lane() {
        let mut batch = SimHitBatch::lanes(3);
        let mut hit = SimHit::cartesian(1.0, 2.0, 3.0, 4.0);
        hit.set_center(ShowerCenter::new(5.0, 6.0, 0.7, 0.8));

        batch.set(1, hit).unwrap();
        assert_eq!(batch.get(1), Some(hit));
        assert_eq!(batch.get(0), Some(SimHit::default()));
        assert_eq!(batch.get(3), None);
        assert_eq!(
            batch.set(3, hit),
            Err(Error::LaneOutOfRange { lane: 3, len: 3 })
        );
    }

    #[test]
    fn test_reset_lane() {
        let mut hit = SimHit::cylindrical(1.0, 2.0, 3.0);
        hit.set_center_r(100.0);
        let mut batch = SimHitBatch::from_hits(&[hit, hit]);

        batch.reset_lane(0).unwrap();
        assert_eq!(batch.get(0), Some(SimHit::default()));
        assert_eq!(batch.get(1), Some(hit));
        assert!(batch.reset_lane(2).is_err());
    }

    #[test]
    fn test_mismatched_columns() {
        let mut batch = SimHitBatch::from_hits(&[
            SimHit::cylindrical(0.5, 0.1, 1.0),
            SimHit::cartesian(3.0, 4.0, 5.0, 6.0),
        ]);
        assert_eq!(batch.validate(), Ok(()));

        batch.center_z.pop();
        assert_eq!(batch.len(), 2);
        assert_eq!(
            batch.validate(),
            Err(Error::ColumnLengthMismatch {
                column: "center_z",
                expected: 2,
                found: 1,
            })
        );
        assert!(batch.get(0).is_some());
        assert_eq!(batch.get(1), None);
        assert_eq!(batch.get_flat(1), None);
        assert_eq!(batch.iter().count(), 1);
        assert_eq!(batch.to_hits().len(), 1);
        assert!(matches!(
            batch.set(0, SimHit::default()),
            Err(Error::ColumnLengthMismatch { .. })
        ));
    }

    #[test]
    fn test_append_and_to_hits() {
        let first = [SimHit::cylindrical(0.1, 0.2, 1.0)];
        let second = [
            SimHit::cartesian(1.0, 1.0, 1.0, 1.0),
            SimHit::cylindrical(2.0, 0.0, 3.0),
        ];
        let mut batch = SimHitBatch::from_hits(&first);
        batch.append(&SimHitBatch::from_hits(&second));

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.to_hits(), vec![first[0], second[0], second[1]]);
    }
}
