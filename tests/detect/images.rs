use crate::common::*;
use stscan::{detect, Extension};

#[test]
fn degas_low_res_with_black_palette() {
    let r = detect(&degas(32_034, 0, &[0; 16]));
    assert!(r.matched);
    assert_eq!(r.extension, Some(Extension::Pi1));
    assert_eq!(r.confidence, 100);
}

#[test]
fn degas_elite_uncompressed_high_res() {
    let r = detect(&degas(32_066, 2, &ST_PALETTE));
    assert_eq!(r.extension, Some(Extension::Pi3));
    assert!(r.reason.contains("DEGAS Elite"));
}

#[test]
fn degas_tolerates_a_few_corrupt_palette_words() {
    let mut palette = ST_PALETTE;
    palette[3] = 0xF000;
    palette[9] = 0xFFFF;
    assert_eq!(
        detect(&degas(32_034, 1, &palette)).extension,
        Some(Extension::Pi2)
    );
}

#[test]
fn fixed_size_formats_refuse_other_lengths() {
    for size in [32_033, 32_035, 32_065, 32_067, 32_127, 32_129] {
        let r = detect(&degas(size, 0, &ST_PALETTE));
        assert!(
            !matches!(
                r.extension,
                Some(Extension::Pi1 | Extension::Pi2 | Extension::Pi3 | Extension::Neo)
            ),
            "size {} matched {:?}",
            size,
            r.extension
        );
    }
}

#[test]
fn neochrome_picture() {
    let r = detect(&neochrome(0));
    assert_eq!(r.extension, Some(Extension::Neo));
    assert_eq!(r.confidence, 100);
}

#[test]
fn degas_compressed_decodes_to_a_full_screen() {
    for (res, ext) in [(0, Extension::Pc1), (1, Extension::Pc2), (2, Extension::Pc3)] {
        let r = detect(&degas_compressed(res));
        assert_eq!(r.extension, Some(ext), "{}", r.reason);
        assert_eq!(r.confidence, 100);
    }
}

#[test]
fn degas_compressed_short_stream_is_rejected() {
    let mut data = degas_compressed(0);
    // drop the last scanline and the animation tables
    data.truncate(data.len() - 32 - 35);
    data.extend([0u8; 32]);
    let r = detect(&data);
    assert!(!matches!(
        r.extension,
        Some(Extension::Pc1 | Extension::Pc2 | Extension::Pc3)
    ));
}

#[test]
fn stad_picture() {
    let r = detect(&stad(0x00));
    assert_eq!(r.extension, Some(Extension::Pac));
    assert_eq!(r.confidence, 100);
}

#[test]
fn stad_that_decodes_short_is_rejected() {
    let mut data = stad(0x00);
    data.truncate(data.len() - 4);
    assert_ne!(detect(&data).extension, Some(Extension::Pac));
}

#[test]
fn gem_img_header() {
    let mut data = Vec::new();
    for w in [1u16, 8, 1, 2, 85, 85, 640, 400] {
        data.extend(be16(w));
    }
    data.extend(vec![0x80u8; 200]);
    let r = detect(&data);
    assert_eq!(r.extension, Some(Extension::Img));
    assert_eq!(r.confidence, 90);
}
