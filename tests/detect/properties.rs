use crate::common::*;
use stscan::config::{DetectorConfig, KnownSize};
use stscan::decompress::{decode_scanline, decode_stad, StadControls};
use stscan::detectors::Detector;
use stscan::text::markers::scorer;
use stscan::text::TextProfile;
use stscan::{Cascade, Extension};

#[test]
fn packbits_round_trip_and_truncation() {
    let expected: Vec<u8> = [vec![1, 2, 3], vec![0xEE; 40], vec![4, 5]].concat();
    let stream = [0x02, 1, 2, 3, 0xD9, 0xEE, 0x01, 4, 5];
    let (line, consumed) = decode_scanline(&stream, 0, expected.len()).unwrap();
    assert_eq!(line, expected);
    assert_eq!(consumed, stream.len());

    for cut in 1..stream.len() {
        assert!(decode_scanline(&stream[..cut], 0, expected.len()).is_err());
    }
}

#[test]
fn stad_end_marker_stops_short() {
    let controls = StadControls {
        id: 0x9B,
        pack: 0x02,
        special: 0x00,
    };
    let data = [0x11, 0x9B, 0x02, 3, 0x22, 0x9B, 0x00, 0x33, 0x44];
    assert!(decode_stad(&data, 0, controls, 6).is_err());
    assert_eq!(
        decode_stad(&data, 0, controls, 4).unwrap(),
        vec![0x11, 0x22, 0x22, 0x22]
    );
}

#[test]
fn include_directive_lowers_assembly_score() {
    let body = "\tSECTION TEXT\nstart:\tmove.w #$4c,-(sp)\n\ttrap #1\n";
    let with_include = format!("#include \"gemdos.i\"\n{}", body);
    let s = scorer(Extension::S).unwrap();
    let plain = s.score(body, &TextProfile::new(body, body.len()));
    let included = s.score(&with_include, &TextProfile::new(&with_include, with_include.len()));
    assert!(included < plain, "{} !< {}", included, plain);
}

#[test]
fn more_c_markers_never_lower_the_c_score() {
    let s = scorer(Extension::C).unwrap();
    let steps = [
        "x = 1;\n",
        "#include <stdio.h>\nx = 1;\n",
        "#include <stdio.h>\nint main()\n{\n x = 1;\n}\n",
        "#include <stdio.h>\nint main()\n{\n x = 1;\n printf(\"%d\", x);\n return 0;\n}\n",
    ];
    let scores: Vec<u32> = steps
        .iter()
        .map(|t| s.score(t, &TextProfile::new(t, t.len())))
        .collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]), "{:?}", scores);
}

#[test]
fn cascade_is_a_detector() {
    let cascade: Box<dyn Detector> = Box::new(Cascade::standard());
    assert_eq!(cascade.name(), "cascade");
    assert_eq!(cascade.detect(&empty_rsc(36)).extension, Some(Extension::Rsc));
}

#[test]
fn custom_known_size() {
    let mut config = DetectorConfig::default();
    config.fallback.known_sizes.push(KnownSize {
        size: 153_600,
        extension: Extension::Img,
        confidence: 40,
        description: "raw Falcon true-colour screen".to_string(),
    });
    let cascade = Cascade::with_config(config).unwrap();
    let r = cascade.detect(&vec![0u8; 153_600]);
    assert_eq!(r.extension, Some(Extension::Img));
    assert_eq!(r.confidence, 40);
}

#[test]
fn stricter_text_threshold_changes_the_verdict() {
    let mut data = read_sample("source/c/hello.c");
    // 2 controls in ~430 bytes
    data.extend([0x01, 0x02]);
    assert_eq!(stscan::detect(&data).extension, Some(Extension::C));

    let mut config = DetectorConfig::default();
    config.text.max_binary_ratio = 0.0;
    let r = Cascade::with_config(config).unwrap().detect(&data);
    assert!(!r.matched);
}
