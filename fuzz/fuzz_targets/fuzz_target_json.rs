#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz the registry's wire shape - this should never panic
        let _ = serde_json::from_str::<odeploy::Target>(content);
        let _ = serde_json::from_str::<Vec<odeploy::Target>>(content);
    }
});
