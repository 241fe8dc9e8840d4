//! Fuzz target: `ButtonConfig` decoding
//!
//! Arbitrary bytes fed to the postcard and JSON decoders must never panic,
//! and anything that decodes must already satisfy `validate()`.
//!
//! cargo fuzz run fuzz_config_decode

#![no_main]

use libfuzzer_sys::fuzz_target;
use momentary::ButtonConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(cfg) = ButtonConfig::from_bytes(data) {
        assert!(cfg.validate().is_ok());
        let bytes = cfg.to_bytes().expect("re-encode of a decoded config");
        assert_eq!(ButtonConfig::from_bytes(&bytes).ok(), Some(cfg));
    }

    if let Ok(json) = core::str::from_utf8(data) {
        if let Ok(cfg) = ButtonConfig::from_json(json) {
            assert!(cfg.validate().is_ok());
        }
    }
});
