//! Packed flag-plus-pair layout of a hit for kernel buffers.
//!
//! [`FlatSimHit`] stores the coordinate pair in two untyped slots and uses
//! `is_cartesian` to say how to read them. It exists only as a memory
//! layout; convert to [`SimHit`] for anything beyond copying and `r()`.

use crate::hit::{HitPosition, ShowerCenter, SimHit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `#[repr(C)]` encoding of a [`SimHit`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlatSimHit {
    /// Eta in barrel and end-caps, x in FCal.
    pub primary_a: f32,
    /// Phi in barrel and end-caps, y in FCal.
    pub primary_b: f32,
    pub z: f32,
    pub energy: f32,
    /// Selects the interpretation of `primary_a`/`primary_b`.
    pub is_cartesian: bool,
    pub center_r: f32,
    pub center_z: f32,
    pub center_eta: f32,
    pub center_phi: f32,
}

impl FlatSimHit {
    /// Transverse radius evaluated on the packed fields.
    ///
    /// Same formula as [`SimHit::r`], including the unguarded `eta == 0` case.
    #[inline]
    #[must_use]
    pub fn r(&self) -> f32 {
        if self.is_cartesian {
            (self.primary_a * self.primary_a + self.primary_b * self.primary_b).sqrt()
        } else {
            self.z / self.primary_a.sinh()
        }
    }

    /// Decoded transverse position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> HitPosition {
        if self.is_cartesian {
            HitPosition::Cartesian {
                x: self.primary_a,
                y: self.primary_b,
            }
        } else {
            HitPosition::Cylindrical {
                eta: self.primary_a,
                phi: self.primary_b,
            }
        }
    }
}

impl From<SimHit> for FlatSimHit {
    #[inline]
    fn from(hit: SimHit) -> Self {
        let (primary_a, primary_b) = hit.position().primary();
        let center = hit.center();
        Self {
            primary_a,
            primary_b,
            z: hit.z(),
            energy: hit.energy(),
            is_cartesian: hit.is_cartesian(),
            center_r: center.r,
            center_z: center.z,
            center_eta: center.eta,
            center_phi: center.phi,
        }
    }
}

impl From<FlatSimHit> for SimHit {
    #[inline]
    fn from(flat: FlatSimHit) -> Self {
        SimHit::from_parts(
            flat.position(),
            flat.z,
            flat.energy,
            ShowerCenter::new(flat.center_r, flat.center_z, flat.center_eta, flat.center_phi),
        )
    }
}
