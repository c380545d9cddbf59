// crates/edgeway-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for translation tests.
// Purpose: Reduce duplication across integration tests for edgeway-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use edgeway_config::FeatureContext;
use edgeway_config::RawConfig;
use edgeway_config::Translation;
use edgeway_config::translate_data;

/// Feature context with the commercial edition and WAF module enabled.
pub fn waf_context() -> FeatureContext {
    FeatureContext {
        commercial_edition: true,
        waf_module: true,
        dos_module: false,
        tls_passthrough: false,
    }
}

/// Feature context with every capability disabled.
pub fn bare_context() -> FeatureContext {
    FeatureContext {
        commercial_edition: false,
        waf_module: false,
        dos_module: false,
        tls_passthrough: false,
    }
}

/// Feature context with transport passthrough enabled.
pub fn passthrough_context() -> FeatureContext {
    FeatureContext {
        commercial_edition: true,
        waf_module: true,
        dos_module: false,
        tls_passthrough: true,
    }
}

/// Builds a raw mapping from literal key/value pairs.
pub fn raw(entries: &[(&str, &str)]) -> RawConfig {
    entries.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect()
}

/// Translates a single raw entry under the provided context.
pub fn translate_entry(key: &str, value: &str, context: FeatureContext) -> Translation {
    translate_data(&raw(&[(key, value)]), &context)
}

/// Returns an error unless exactly one warning references the given key.
pub fn expect_single_warning(translation: &Translation, key: &str) -> Result<(), String> {
    if translation.warnings.len() != 1 {
        return Err(format!(
            "expected exactly one warning for {key}, got {}",
            translation.warnings.len()
        ));
    }
    if translation.warnings[0].key != key {
        return Err(format!("warning references {}, expected {key}", translation.warnings[0].key));
    }
    Ok(())
}
