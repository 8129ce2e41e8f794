#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the main extraction entry point.
///
/// Every present section must carry content, whatever the input.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(Some(report)) = hydroprognosis::extract(s) {
            for (_, value) in report.iter() {
                assert!(!value.is_empty());
            }
        }
    }
});
