//! Hit record for calorimeter energy deposits.
//!
//! A [`SimHit`] stores one energy deposit produced by a shower kernel lane.
//! The barrel and end-cap regions describe positions by pseudorapidity and
//! azimuth, the forward calorimeter (FCal) by planar x/y; [`HitPosition`]
//! carries whichever of the two applies so the radius formula always
//! matches the stored coordinates.
//!
//! Every method here is allocation-free and touches only `self`, so a hit
//! can live in per-lane storage inside a parallel kernel.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transverse position of a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HitPosition {
    /// Barrel and end-cap: pseudorapidity and azimuth.
    Cylindrical { eta: f32, phi: f32 },
    /// Forward calorimeter: planar coordinates.
    Cartesian { x: f32, y: f32 },
}

impl Default for HitPosition {
    fn default() -> Self {
        Self::Cylindrical { eta: 0.0, phi: 0.0 }
    }
}

impl HitPosition {
    /// Returns true for forward calorimeter positions.
    #[inline]
    #[must_use]
    pub const fn is_cartesian(&self) -> bool {
        matches!(self, Self::Cartesian { .. })
    }

    /// Returns the raw coordinate pair: `(eta, phi)` or `(x, y)`.
    #[inline]
    #[must_use]
    pub const fn primary(&self) -> (f32, f32) {
        match *self {
            Self::Cylindrical { eta, phi } => (eta, phi),
            Self::Cartesian { x, y } => (x, y),
        }
    }

    /// Returns the same variant with the second coordinate replaced.
    #[inline]
    #[must_use]
    pub const fn with_secondary(self, value: f32) -> Self {
        match self {
            Self::Cylindrical { eta, .. } => Self::Cylindrical { eta, phi: value },
            Self::Cartesian { x, .. } => Self::Cartesian { x, y: value },
        }
    }

    /// Computes the transverse radius for a hit at longitudinal position `z`.
    ///
    /// Cartesian: `sqrt(x^2 + y^2)`. Cylindrical: `z / sinh(eta)`, from
    /// `z = r * sinh(eta)`.
    ///
    /// The cylindrical branch is not guarded: `eta == 0` yields an infinite
    /// radius (or NaN when `z` is also zero).
    #[inline]
    #[must_use]
    pub fn transverse_radius(&self, z: f32) -> f32 {
        match *self {
            Self::Cartesian { x, y } => (x * x + y * y).sqrt(),
            Self::Cylindrical { eta, .. } => z / eta.sinh(),
        }
    }
}

/// Extrapolated shower center, always in cylindrical coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShowerCenter {
    /// Radius.
    pub r: f32,
    /// Longitudinal position.
    pub z: f32,
    /// Pseudorapidity.
    pub eta: f32,
    /// Azimuth.
    pub phi: f32,
}

impl ShowerCenter {
    /// Creates a new shower center.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, z: f32, eta: f32, phi: f32) -> Self {
        Self { r, z, eta, phi }
    }
}

/// A single simulated calorimeter hit.
///
/// The default value is a zero-energy cylindrical hit at the origin with a
/// zero shower center.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimHit {
    position: HitPosition,
    z: f32,
    energy: f32,
    center: ShowerCenter,
}

impl SimHit {
    /// Creates a zeroed cylindrical hit, same as `SimHit::default()`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: HitPosition::Cylindrical { eta: 0.0, phi: 0.0 },
            z: 0.0,
            energy: 0.0,
            center: ShowerCenter::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Creates a barrel/end-cap hit with `z = 0`.
    #[inline]
    #[must_use]
    pub const fn cylindrical(eta: f32, phi: f32, energy: f32) -> Self {
        Self {
            position: HitPosition::Cylindrical { eta, phi },
            z: 0.0,
            energy,
            center: ShowerCenter::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Creates a forward calorimeter hit.
    #[inline]
    #[must_use]
    pub const fn cartesian(x: f32, y: f32, z: f32, energy: f32) -> Self {
        Self {
            position: HitPosition::Cartesian { x, y },
            z,
            energy,
            center: ShowerCenter::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Creates a hit from its parts.
    #[inline]
    #[must_use]
    pub const fn from_parts(
        position: HitPosition,
        z: f32,
        energy: f32,
        center: ShowerCenter,
    ) -> Self {
        Self {
            position,
            z,
            energy,
            center,
        }
    }

    /// Overwrites position and energy with a barrel/end-cap deposit.
    ///
    /// The shower center is left untouched.
    #[inline]
    pub fn set_be_hit(&mut self, eta: f32, phi: f32, z: f32, energy: f32) {
        self.position = HitPosition::Cylindrical { eta, phi };
        self.z = z;
        self.energy = energy;
    }

    /// Overwrites position and energy with a forward calorimeter deposit.
    ///
    /// The shower center is left untouched.
    #[inline]
    pub fn set_fcal_hit(&mut self, x: f32, y: f32, z: f32, energy: f32) {
        self.position = HitPosition::Cartesian { x, y };
        self.z = z;
        self.energy = energy;
    }

    /// Returns every field, shower center included, to the default state.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> HitPosition {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn is_cartesian(&self) -> bool {
        self.position.is_cartesian()
    }

    /// Returns the first coordinate. Only meaningful for cylindrical hits.
    #[inline]
    #[must_use]
    pub const fn eta(&self) -> f32 {
        self.position.primary().0
    }

    /// Returns the second coordinate. Only meaningful for cylindrical hits.
    #[inline]
    #[must_use]
    pub const fn phi(&self) -> f32 {
        self.position.primary().1
    }

    /// Returns the first coordinate. Only meaningful for FCal hits.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.position.primary().0
    }

    /// Returns the second coordinate. Only meaningful for FCal hits.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.position.primary().1
    }

    #[inline]
    #[must_use]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// Returns the deposited energy.
    #[inline]
    #[must_use]
    pub const fn energy(&self) -> f32 {
        self.energy
    }

    #[inline]
    pub fn set_energy(&mut self, energy: f32) {
        self.energy = energy;
    }

    /// Overwrites the second coordinate (phi, or y for FCal hits).
    ///
    /// The coordinate system is unchanged.
    #[inline]
    pub fn set_phi(&mut self, phi: f32) {
        self.position = self.position.with_secondary(phi);
    }

    /// Transverse radius of the hit.
    ///
    /// FCal hits use the planar distance, barrel/end-cap hits `z / sinh(eta)`.
    /// A cylindrical hit at `eta == 0` returns a non-finite value; use
    /// [`SimHit::checked_r`] to reject it.
    #[inline]
    #[must_use]
    pub fn r(&self) -> f32 {
        self.position.transverse_radius(self.z)
    }

    /// Transverse radius, rejecting non-finite results.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateRadius`] for a cylindrical hit and
    /// [`Error::NonFiniteRadius`] for an FCal hit when the radius is
    /// infinite or NaN.
    #[inline]
    pub fn checked_r(&self) -> Result<f32> {
        let r = self.r();
        if r.is_finite() {
            return Ok(r);
        }
        match self.position {
            HitPosition::Cylindrical { eta, .. } => {
                Err(Error::DegenerateRadius { eta, z: self.z })
            }
            HitPosition::Cartesian { x, y } => Err(Error::NonFiniteRadius { x, y }),
        }
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> ShowerCenter {
        self.center
    }

    #[inline]
    pub fn set_center(&mut self, center: ShowerCenter) {
        self.center = center;
    }

    #[inline]
    #[must_use]
    pub const fn center_r(&self) -> f32 {
        self.center.r
    }

    #[inline]
    #[must_use]
    pub const fn center_z(&self) -> f32 {
        self.center.z
    }

    #[inline]
    #[must_use]
    pub const fn center_eta(&self) -> f32 {
        self.center.eta
    }

    #[inline]
    #[must_use]
    pub const fn center_phi(&self) -> f32 {
        self.center.phi
    }

    #[inline]
    pub fn set_center_r(&mut self, r: f32) {
        self.center.r = r;
    }

    #[inline]
    pub fn set_center_z(&mut self, z: f32) {
        self.center.z = z;
    }

    #[inline]
    pub fn set_center_eta(&mut self, eta: f32) {
        self.center.eta = eta;
    }

    #[inline]
    pub fn set_center_phi(&mut self, phi: f32) {
        self.center.phi = phi;
    }
}
