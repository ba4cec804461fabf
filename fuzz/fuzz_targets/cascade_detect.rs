#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let r = stscan::detect(data);
    assert!(r.confidence <= 100);
    assert!(!r.reason.is_empty());
    if !r.matched {
        assert!(r.extension.is_none());
    }
});
