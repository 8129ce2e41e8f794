#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let classifier = hydroprognosis::parsers::LineClassifier::default();
        for line in s.lines() {
            let _ = classifier.classify(line);
        }
    }
});
