use crate::common::read_sample;
use stscan::{detect, Extension};

fn check(path: &str, extension: Extension, confidence: u8) -> stscan::DetectionResult {
    let r = detect(&read_sample(path));
    assert!(r.matched, "{}: {}", path, r.reason);
    assert_eq!(r.extension, Some(extension), "{}: {}", path, r.reason);
    assert_eq!(r.confidence, confidence, "{}: {}", path, r.reason);
    r
}

#[test]
fn c_source_sample() {
    let r = check("source/c/hello.c", Extension::C, 92);
    assert_eq!(r.reason, "C score: 22");
    assert_eq!(r.embedded_name(), Some("hello"));
}

#[test]
fn header_sample() {
    let r = check("source/h/portab.h", Extension::H, 88);
    assert_eq!(r.embedded_name(), Some("PORTAB"));
}

#[test]
fn assembly_sample() {
    let r = check("source/s/startup.s", Extension::S, 95);
    // `;` comments are not a filename convention
    assert_eq!(r.embedded_name(), None);
}

#[test]
fn desktop_inf_sample() {
    let r = check("source/inf/desktop.inf", Extension::Inf, 81);
    assert!(r.extra.is_none());
}

#[test]
fn makefile_sample() {
    check("source/mak/makefile", Extension::Mak, 92);
}

#[test]
fn batch_sample() {
    check("source/bat/build.bat", Extension::Bat, 82);
}

#[test]
fn project_sample() {
    let r = check("source/prj/demo.prj", Extension::Prj, 78);
    // a bare `main.c` line is a name, but PRJ is not a source tag
    assert!(r.extra.is_none());
}

#[test]
fn prose_sample() {
    let r = check("source/txt/readme.txt", Extension::Txt, 50);
    assert_eq!(r.reason, "No strong type match, defaulting to TXT");
}

#[test]
fn crlf_line_endings_do_not_change_the_verdict() {
    let unix = read_sample("source/c/hello.c");
    let dos: Vec<u8> = unix
        .iter()
        .flat_map(|&b| if b == b'\n' { vec![b'\r', b'\n'] } else { vec![b] })
        .collect();
    assert_eq!(detect(&dos).extension, Some(Extension::C));
}
