#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic, and anything accepted must round-trip
        if let Ok(time) = hmscalc::HmsTime::parse(input) {
            let reparsed = hmscalc::HmsTime::parse(&time.to_string())
                .expect("canonical form must parse");
            assert_eq!(reparsed, time);
        }
    }
});
