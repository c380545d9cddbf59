//! Compressed-requests action validation tests for edgeway-config.
// crates/edgeway-config/tests/action_validation.rs
// =============================================================================
// Module: Action Selector Validation Tests
// Description: Validate the closed-set action selector and its feature gate.
// Purpose: Ensure invalid actions fall back to the default with a warning.
// =============================================================================

mod common;

type TestResult = Result<(), String>;

/// Raw key under test.
const KEY: &str = "app-protect-compressed-requests-action";

#[test]
fn action_accepts_only_the_closed_set() -> TestResult {
    let cases = [
        ("pass", "pass", "valid action pass"),
        ("drop", "drop", "valid action drop"),
        ("invalid", "", "invalid action"),
        ("", "", "empty action"),
    ];
    for (action, expect, msg) in cases {
        let translation = common::translate_entry(KEY, action, common::waf_context());
        if translation.params.app_protect_compressed_requests_action != expect {
            return Err(format!(
                "got {:?} but expected {expect:?} for the case {msg}",
                translation.params.app_protect_compressed_requests_action
            ));
        }
    }
    Ok(())
}

#[test]
fn invalid_action_records_one_warning() -> TestResult {
    let translation = common::translate_entry(KEY, "reject", common::waf_context());
    common::expect_single_warning(&translation, KEY)?;
    if !translation.warnings[0].reason.contains("reject") {
        return Err("warning should name the invalid value".to_string());
    }
    Ok(())
}

#[test]
fn valid_action_records_no_warning() -> TestResult {
    let translation = common::translate_entry(KEY, "drop", common::waf_context());
    if !translation.warnings.is_empty() {
        return Err(format!("unexpected warnings: {:?}", translation.warnings.len()));
    }
    Ok(())
}

#[test]
fn action_is_ignored_without_the_waf_module() -> TestResult {
    let mut context = common::waf_context();
    context.waf_module = false;
    let translation = common::translate_entry(KEY, "pass", context);
    if !translation.params.app_protect_compressed_requests_action.is_empty() {
        return Err("action should stay default without the WAF module".to_string());
    }
    if !translation.warnings.is_empty() {
        return Err("gated-off keys should be ignored silently".to_string());
    }
    Ok(())
}

#[test]
fn action_is_ignored_without_the_commercial_edition() -> TestResult {
    let mut context = common::waf_context();
    context.commercial_edition = false;
    let translation = common::translate_entry(KEY, "drop", context);
    if !translation.params.app_protect_compressed_requests_action.is_empty() {
        return Err("action should stay default without the commercial edition".to_string());
    }
    Ok(())
}
