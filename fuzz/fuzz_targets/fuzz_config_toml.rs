#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz config TOML parsing - this should never panic
        let _: Result<hmscalc::Config, _> = toml::from_str(s);
    }
});
