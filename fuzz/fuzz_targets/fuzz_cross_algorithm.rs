#![no_main]

use libfuzzer_sys::fuzz_target;

use sortbench_core::common::is_sorted_non_decreasing;
use sortbench_core::registry::{DefaultFactory, SorterFactory};

fuzz_target!(|data: &[u8]| {
    // Two bytes per value, capped at 2048 values for speed
    let values: Vec<f64> = data
        .chunks_exact(2)
        .take(2048)
        .map(|c| f64::from(i16::from_le_bytes([c[0], c[1]])))
        .collect();

    let factory = DefaultFactory::new();
    let mut reference: Option<Vec<f64>> = None;
    for label in factory.available() {
        let sorter = factory.get(label).unwrap();
        let mut out = values.clone();
        sorter.sort(&mut out).unwrap();
        assert!(is_sorted_non_decreasing(&out), "{label} left an inversion");
        if let Some(expected) = &reference {
            assert_eq!(expected, &out, "{label} disagrees");
        } else {
            reference = Some(out);
        }
    }
});
