use crate::common::*;
use stscan::{detect, DetectionResult};

fn fixtures() -> Vec<Vec<u8>> {
    vec![
        empty_rsc(36),
        devpac_object("VDIBIND.O"),
        degas(32_034, 0, &ST_PALETTE),
        degas_compressed(1),
        read_sample("source/h/portab.h"),
        read_sample("source/txt/readme.txt"),
        vec![0xA5; 777],
        Vec::new(),
    ]
}

#[test]
fn json_output_is_stable_for_same_input() {
    for data in fixtures() {
        let j1 = serde_json::to_string(&detect(&data)).expect("json1");
        let j2 = serde_json::to_string(&detect(&data)).expect("json2");
        assert_eq!(j1, j2, "JSON outputs differ across identical runs");
    }
}

#[test]
fn json_round_trips_and_uses_tags() {
    let r = detect(&devpac_object("VDIBIND.O"));
    let json = serde_json::to_value(&r).expect("json");
    assert_eq!(json["extension"], "O");
    assert_eq!(json["extra"]["EmbeddedName"], "VDIBIND");

    let back: DetectionResult = serde_json::from_value(json).expect("from json");
    assert_eq!(back, r);
}

#[test]
fn unmatched_result_serializes_without_extension() {
    let json = serde_json::to_value(detect(&[])).expect("json");
    assert_eq!(json["matched"], false);
    assert!(json["extension"].is_null());
    assert_eq!(json["reason"], "Empty file");
}
