//! Translator defaults and core contract tests for edgeway-config.
// crates/edgeway-config/tests/translate_defaults.rs
// =============================================================================
// Module: Translator Defaults and Core Contract Tests
// Description: Validate defaults, structural failures, and determinism.
// Purpose: Ensure the translator contract holds end to end.
// =============================================================================

use edgeway_config::ConfigMapObject;
use edgeway_config::ConfigParams;
use edgeway_config::FeatureContext;
use edgeway_config::TranslateError;
use edgeway_config::parse_config_map;
use edgeway_config::translate_data;

mod common;

type TestResult = Result<(), String>;

#[test]
fn empty_mapping_resolves_to_all_defaults() -> TestResult {
    let translation = translate_data(&common::raw(&[]), &common::waf_context());
    if translation.params != ConfigParams::default() {
        return Err("empty mapping should yield the default params".to_string());
    }
    if !translation.warnings.is_empty() {
        return Err("empty mapping should not record warnings".to_string());
    }
    Ok(())
}

#[test]
fn missing_data_section_is_a_structural_failure() -> TestResult {
    let object = ConfigMapObject {
        data: None,
    };
    match parse_config_map(&object, &common::waf_context()) {
        Err(TranslateError::MissingData(_)) => Ok(()),
        Err(other) => Err(format!("unexpected error: {other}")),
        Ok(_) => Err("expected a structural failure for missing data".to_string()),
    }
}

#[test]
fn malformed_payload_is_a_structural_failure() -> TestResult {
    match ConfigMapObject::from_json("{ not json") {
        Err(TranslateError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("unexpected error: {other}")),
        Ok(_) => Err("expected a parse failure".to_string()),
    }
}

#[test]
fn object_payload_translates_end_to_end() -> TestResult {
    let object = ConfigMapObject::from_json(
        r#"{"data": {"access-log": "/tmp/nginx main", "real-ip-header": "proxy_protocol"}}"#,
    )
    .map_err(|err| err.to_string())?;
    let translation =
        parse_config_map(&object, &common::waf_context()).map_err(|err| err.to_string())?;
    if translation.params.access_log != "/dev/stdout main" {
        return Err(format!("got {:?} for the access log", translation.params.access_log));
    }
    if translation.params.real_ip_header != "proxy_protocol" {
        return Err(format!("got {:?} for the header", translation.params.real_ip_header));
    }
    Ok(())
}

#[test]
fn out_of_range_reconnect_period_scenario() -> TestResult {
    let context = FeatureContext {
        commercial_edition: true,
        waf_module: true,
        dos_module: false,
        tls_passthrough: false,
    };
    let data = common::raw(&[("app-protect-reconnect-period-seconds", "60.1")]);
    let translation = translate_data(&data, &context);
    if !translation.params.app_protect_reconnect_period.is_empty() {
        return Err("out-of-range period should resolve to the default".to_string());
    }
    common::expect_single_warning(&translation, "app-protect-reconnect-period-seconds")?;
    Ok(())
}

#[test]
fn identical_inputs_produce_identical_translations() -> TestResult {
    let data = common::raw(&[
        ("access-log", "/tmp/nginx main"),
        ("app-protect-compressed-requests-action", "reject"),
        ("app-protect-reconnect-period-seconds", "60.1"),
        ("real-ip-header", "proxy_protocol"),
    ]);
    let first = translate_data(&data, &common::waf_context());
    let second = translate_data(&data, &common::waf_context());
    if first != second {
        return Err("identical inputs must produce identical translations".to_string());
    }
    Ok(())
}

#[test]
fn warning_order_follows_the_registry_not_the_mapping() -> TestResult {
    let data = common::raw(&[
        ("access-log", "/tmp/nginx main"),
        ("app-protect-compressed-requests-action", "reject"),
        ("app-protect-reconnect-period-seconds", "60.1"),
    ]);
    let translation = translate_data(&data, &common::waf_context());
    let keys: Vec<&str> =
        translation.warnings.iter().map(|warning| warning.key.as_str()).collect();
    let expected = [
        "app-protect-compressed-requests-action",
        "app-protect-reconnect-period-seconds",
        "access-log",
    ];
    if keys != expected {
        return Err(format!("warning order {keys:?} does not follow the registry"));
    }
    Ok(())
}

#[test]
fn translation_is_idempotent_over_its_own_output() -> TestResult {
    let data = common::raw(&[
        ("access-log", "/tmp/nginx main"),
        ("app-protect-compressed-requests-action", "drop"),
        ("app-protect-reconnect-period-seconds", "13.875"),
        ("real-ip-header", "X-Forwarded-For"),
    ]);
    let first = translate_data(&data, &common::waf_context());
    let reexpressed = common::raw(&[
        ("access-log", &first.params.access_log),
        (
            "app-protect-compressed-requests-action",
            &first.params.app_protect_compressed_requests_action,
        ),
        ("app-protect-reconnect-period-seconds", &first.params.app_protect_reconnect_period),
        ("real-ip-header", &first.params.real_ip_header),
    ]);
    let second = translate_data(&reexpressed, &common::waf_context());
    if second.params != first.params {
        return Err("re-translating the output must not drift any value".to_string());
    }
    Ok(())
}
