// crates/edgeway-config/src/schema.rs
// ============================================================================
// Module: Config Schemas
// Description: JSON schema builder for the recognized ConfigMap keys.
// Purpose: Provide canonical validation schema for config artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for the recognized configuration
//! keys. The schema is generated from the canonical translation model and
//! is used by tooling, docs, and validation pipelines.

use serde_json::Value;
use serde_json::json;

use crate::config::COMPRESSED_REQUESTS_ACTIONS;
use crate::config::ConfigParams;
use crate::config::DEFAULT_ACCESS_LOG_DESTINATION;
use crate::config::FALSE_LITERALS;
use crate::config::MAX_RECONNECT_PERIOD_SECONDS;
use crate::config::MIN_RECONNECT_PERIOD_SECONDS;
use crate::config::STDERR_ACCESS_LOG_DESTINATION;
use crate::config::TRUE_LITERALS;

/// Returns the JSON schema for the recognized ConfigMap keys.
///
/// Platform objects routinely carry keys outside this fragment, so the
/// schema keeps `additionalProperties` open.
#[must_use]
pub fn config_map_schema() -> Value {
    let defaults = ConfigParams::default();
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "edgeway://contract/schemas/config-map.schema.json",
        "title": "Edgeway ConfigMap Keys",
        "description": "Recognized keys of the proxy controller configuration object.",
        "type": "object",
        "properties": {
            "app-protect-compressed-requests-action": {
                "type": "string",
                "enum": COMPRESSED_REQUESTS_ACTIONS,
                "default": defaults.app_protect_compressed_requests_action,
                "description": "Action for compressed request bodies. Requires the commercial edition and the WAF module."
            },
            "app-protect-reconnect-period-seconds": {
                "type": "string",
                "pattern": "^[0-9]+(\\.[0-9]+)?$",
                "default": defaults.app_protect_reconnect_period,
                "description": format!(
                    "Enforcer reconnect period in seconds, valid over ({MIN_RECONNECT_PERIOD_SECONDS}, {MAX_RECONNECT_PERIOD_SECONDS}]. Requires the commercial edition and the WAF module."
                )
            },
            "real-ip-header": {
                "type": "string",
                "default": defaults.real_ip_header,
                "description": "Header consulted for the real client address. Ignored when transport passthrough is enabled."
            },
            "access-log": {
                "type": "string",
                "default": defaults.access_log,
                "description": format!(
                    "Access-log destination with optional format selector. File destinations other than {DEFAULT_ACCESS_LOG_DESTINATION} and {STDERR_ACCESS_LOG_DESTINATION} are rewritten to the safe stream."
                )
            },
            "access-log-off": {
                "type": "string",
                "enum": bool_literal_values(),
                "default": "False",
                "description": "Disables the access log when true, overriding the destination."
            }
        },
        "additionalProperties": true
    })
}

/// Returns every boolean literal accepted by the disable flag.
fn bool_literal_values() -> Value {
    let mut literals: Vec<&str> = TRUE_LITERALS.to_vec();
    literals.extend_from_slice(&FALSE_LITERALS);
    json!(literals)
}
