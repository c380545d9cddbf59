// crates/edgeway-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration object payload.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example payload for the platform configuration object. The
//! output is deterministic, schema-valid, and translates without warnings
//! under a fully featured context.

/// Returns a canonical example configuration object payload as JSON.
#[must_use]
pub fn config_map_json_example() -> String {
    String::from(
        r#"{
  "data": {
    "access-log": "syslog:server=logs.example.com:514",
    "access-log-off": "False",
    "app-protect-compressed-requests-action": "drop",
    "app-protect-reconnect-period-seconds": "13.875",
    "real-ip-header": "proxy_protocol"
  }
}
"#,
    )
}
