#![no_main]
use libfuzzer_sys::fuzz_target;
use stscan::decompress::{decode_scanlines, decode_stad, StadControls, SCREEN_BYTES};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let controls = StadControls {
        id: data[0],
        pack: data[1],
        special: data[2],
    };
    if let Ok(screen) = decode_stad(data, 3, controls, SCREEN_BYTES) {
        assert_eq!(screen.len(), SCREEN_BYTES);
    }
    if let Ok(screen) = decode_scanlines(data, 0, 200, 160) {
        assert_eq!(screen.len(), SCREEN_BYTES);
    }
});
