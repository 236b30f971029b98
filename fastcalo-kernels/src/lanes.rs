//! Per-lane dispatch over hit storage.

use crate::LaneConfig;
use fastcalo_core::{FlatSimHit, Result, SimHit, SimHitBatch};
use log::debug;
use rayon::prelude::*;

/// Calls `f(lane, &mut hit)` exactly once for every lane.
///
/// Lanes are disjoint, so `f` sees only its own hit. With
/// `config.parallel` the lanes are spread over the rayon pool in chunks of
/// at least `config.min_lanes_per_task`; call order is then unspecified.
pub fn for_each_lane<F>(hits: &mut [SimHit], config: &LaneConfig, f: F)
where
    F: Fn(usize, &mut SimHit) + Sync + Send,
{
    debug!(
        "dispatching {} lanes ({})",
        hits.len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    if config.parallel {
        hits.par_iter_mut()
            .with_min_len(config.min_lanes_per_task.max(1))
            .enumerate()
            .for_each(|(lane, hit)| f(lane, hit));
    } else {
        hits.iter_mut()
            .enumerate()
            .for_each(|(lane, hit)| f(lane, hit));
    }
}

/// Same contract as [`for_each_lane`] on Structure of Arrays storage.
///
/// Each lane is decoded from the columns, handed to `f`, and encoded back in
/// place.
///
/// # Errors
///
/// Returns [`fastcalo_core::Error::ColumnLengthMismatch`] without touching
/// any lane if the columns disagree on the lane count.
pub fn for_each_batch_lane<F>(batch: &mut SimHitBatch, config: &LaneConfig, f: F) -> Result<()>
where
    F: Fn(usize, &mut SimHit) + Sync + Send,
{
    batch.validate()?;
    debug!(
        "dispatching {} batch lanes ({})",
        batch.len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    if config.parallel {
        (
            batch.primary_a.par_iter_mut(),
            batch.primary_b.par_iter_mut(),
            batch.z.par_iter_mut(),
            batch.energy.par_iter_mut(),
            batch.is_cartesian.par_iter_mut(),
            batch.center_r.par_iter_mut(),
            batch.center_z.par_iter_mut(),
            batch.center_eta.par_iter_mut(),
            batch.center_phi.par_iter_mut(),
        )
            .into_par_iter()
            .enumerate()
            .with_min_len(config.min_lanes_per_task.max(1))
            .for_each(|(lane, (a, b, z, energy, cartesian, cr, cz, ceta, cphi))| {
                let mut hit = SimHit::from(FlatSimHit {
                    primary_a: *a,
                    primary_b: *b,
                    z: *z,
                    energy: *energy,
                    is_cartesian: *cartesian,
                    center_r: *cr,
                    center_z: *cz,
                    center_eta: *ceta,
                    center_phi: *cphi,
                });
                f(lane, &mut hit);
                let flat = FlatSimHit::from(hit);
                *a = flat.primary_a;
                *b = flat.primary_b;
                *z = flat.z;
                *energy = flat.energy;
                *cartesian = flat.is_cartesian;
                *cr = flat.center_r;
                *cz = flat.center_z;
                *ceta = flat.center_eta;
                *cphi = flat.center_phi;
            });
    } else {
        for lane in 0..batch.len() {
            if let Some(mut hit) = batch.get(lane) {
                f(lane, &mut hit);
                batch.set(lane, hit)?;
            }
        }
    }
    Ok(())
}
