#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz envelope detection on JSON-ish file content.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = hydroprognosis::pipeline::raw_report_from_content(s);
    }
});
