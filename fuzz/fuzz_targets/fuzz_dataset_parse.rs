#![no_main]

use libfuzzer_sys::fuzz_target;

use sortbench_core::dataset::Dataset;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing never panics; anything accepted is non-empty and finite
    if let Ok(dataset) = Dataset::parse("fuzz.txt", text) {
        assert!(!dataset.is_empty());
        assert!(dataset.values().iter().all(|v| v.is_finite()));
    }
});
