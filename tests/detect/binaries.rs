use crate::common::*;
use stscan::{detect, Extension};

#[test]
fn empty_rsc_header_is_resource() {
    let r = detect(&empty_rsc(36));
    assert!(r.matched);
    assert_eq!(r.extension, Some(Extension::Rsc));
    assert_eq!(r.confidence, 100);
}

#[test]
fn rsc_size_field_flip_falls_through() {
    let original = empty_rsc(36);
    for byte in [34, 35] {
        for bit in 0..8 {
            let mut data = original.clone();
            data[byte] ^= 1 << bit;
            assert_ne!(detect(&data).extension, Some(Extension::Rsc));
        }
    }
}

#[test]
fn turbo_c_object_exact_size() {
    let r = detect(&turbo_c_object(120, 40, 16));
    assert_eq!(r.extension, Some(Extension::Tco));
    assert_eq!(r.confidence, 100);

    let mut padded = turbo_c_object(120, 40, 16);
    padded.push(0);
    assert_ne!(detect(&padded).extension, Some(Extension::Tco));
}

#[test]
fn devpac_object_carries_embedded_name() {
    let r = detect(&devpac_object("GEMFUNC.O"));
    assert_eq!(r.extension, Some(Extension::Object));
    assert_eq!(r.confidence, 95);
    assert_eq!(r.embedded_name(), Some("GEMFUNC"));
}

#[test]
fn gemdos_valid_relocation_dominates_tagged_symbols() {
    let tagged = [0x8000_0000u32; 8];
    let r = detect(&gemdos(256, 64, &tagged, &be32(0x20)));
    assert_eq!(r.extension, Some(Extension::Prg));
    assert_eq!(r.confidence, 92);
}

#[test]
fn gemdos_invalid_relocation_with_tagged_symbols_is_object() {
    let mut values = vec![0x8000_0010u32; 7];
    values.extend([0x10u32; 14]);
    // 7 of the first 20 tagged
    let r = detect(&gemdos(256, 64, &values, &be32(0x0001_0000)));
    assert_eq!(r.extension, Some(Extension::Object));
    assert_eq!(r.confidence, 98);
}

#[test]
fn gemdos_few_tagged_symbols_stay_program() {
    let mut values = vec![0x8000_0010u32; 6];
    values.extend([0x10u32; 14]);
    // 6 of 20 is below one third
    let r = detect(&gemdos(256, 64, &values, &be32(0x0001_0000)));
    assert_eq!(r.extension, Some(Extension::Prg));
}

#[test]
fn gemdos_without_symbols_is_program() {
    let r = detect(&gemdos(32, 0, &[], &be32(0)));
    assert_eq!(r.extension, Some(Extension::Prg));
    assert_eq!(r.reason, "GEMDOS executable (PRG/TOS/TTP/ACC)");
}

#[test]
fn headerless_32000_byte_binary_is_art() {
    let mut data = vec![0u8; 32_000];
    data[100] = 0xFF;
    let r = detect(&data);
    assert_eq!(r.extension, Some(Extension::Art));
    assert_eq!(r.confidence, 60);
}

#[test]
fn unknown_binary_is_unmatched() {
    let data: Vec<u8> = (0..=255u8).cycle().take(5000).collect();
    let r = detect(&data);
    assert!(!r.matched);
    assert_eq!(r.reason, "No matching file type detected");
}

#[test]
fn defined_symbol_types_do_not_count_as_tags() {
    // ordinary linked program: every symbol is a defined text label
    let values: Vec<u32> = (0..20).map(|i| 0x10 + i * 4).collect();
    let r = detect(&gemdos(256, 64, &values, &[]));
    assert_eq!(r.extension, Some(Extension::Prg));
    assert_eq!(r.confidence, 92);
}
