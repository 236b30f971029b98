#![cfg(feature = "serde")]
#![allow(clippy::float_cmp)]
use fastcalo_core::{FlatSimHit, HitPosition, SimHit, SimHitBatch};

#[test]
fn test_flat_hit_field_names() {
    let flat = FlatSimHit::from(SimHit::cartesian(3.0, 4.0, 4700.0, 2.5));
    let value = serde_json::to_value(flat).unwrap();

    assert_eq!(value["primary_a"], 3.0);
    assert_eq!(value["primary_b"], 4.0);
    assert_eq!(value["z"], 4700.0);
    assert_eq!(value["energy"], 2.5);
    assert_eq!(value["is_cartesian"], true);
    assert_eq!(value["center_r"], 0.0);
}

#[test]
fn test_position_is_tagged() {
    let value = serde_json::to_value(HitPosition::Cylindrical { eta: 0.5, phi: 1.0 }).unwrap();
    assert_eq!(value["Cylindrical"]["eta"], 0.5);
    assert_eq!(value["Cylindrical"]["phi"], 1.0);
}

#[test]
fn test_batch_from_json() {
    let mut hit = SimHit::default();
    hit.set_be_hit(1.0, 2.0, 3.0, 4.0);
    let batch = SimHitBatch::from_hits(&[hit, SimHit::cartesian(5.0, 6.0, 7.0, 8.0)]);

    let json = serde_json::to_string(&batch).unwrap();
    let decoded: SimHitBatch = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.is_cartesian, vec![false, true]);
    assert_eq!(decoded.get(0), Some(hit));
}

#[test]
fn test_batch_rejects_short_columns() {
    let json = r#"{
        "primary_a": [1.0, 2.0],
        "primary_b": [0.5, 0.5],
        "z": [10.0, 20.0],
        "energy": [1.0, 1.0],
        "is_cartesian": [false, true],
        "center_r": [0.0],
        "center_z": [0.0],
        "center_eta": [0.0],
        "center_phi": [0.0]
    }"#;

    let err = serde_json::from_str::<SimHitBatch>(json).unwrap_err();
    assert!(err.to_string().contains("column center_r has 1 lanes, expected 2"));
}
