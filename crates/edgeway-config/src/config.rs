// crates/edgeway-config/src/config.rs
// ============================================================================
// Module: Edgeway Configuration Model
// Description: Typed configuration model for the ConfigMap translator.
// Purpose: Define feature flags, validated params, and structural errors.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The configuration model consumed by the proxy-directive generator. The
//! translator fills [`ConfigParams`] from an untrusted platform object and
//! never leaves a field unpopulated; invalid entries fall back to the
//! defaults defined here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Accepted values for the compressed-requests action selector.
pub(crate) const COMPRESSED_REQUESTS_ACTIONS: [&str; 2] = ["pass", "drop"];
/// Exclusive lower bound for the enforcer reconnect period in seconds.
pub(crate) const MIN_RECONNECT_PERIOD_SECONDS: f64 = 0.0;
/// Inclusive upper bound for the enforcer reconnect period in seconds.
pub(crate) const MAX_RECONNECT_PERIOD_SECONDS: f64 = 60.0;
/// Safe stream destination used when a file destination is rejected.
pub(crate) const DEFAULT_ACCESS_LOG_DESTINATION: &str = "/dev/stdout";
/// Secondary stream destination allowed for the access log.
pub(crate) const STDERR_ACCESS_LOG_DESTINATION: &str = "/dev/stderr";
/// Default access-log directive value, destination plus format selector.
pub(crate) const DEFAULT_ACCESS_LOG: &str = "/dev/stdout main";
/// Sentinel value disabling the access log entirely.
pub(crate) const ACCESS_LOG_OFF: &str = "off";
/// Scheme prefixes naming non-file access-log destinations.
pub(crate) const NON_FILE_DESTINATION_SCHEMES: [&str; 2] = ["syslog:", "memory:"];
/// Literals the platform accepts as boolean true.
pub(crate) const TRUE_LITERALS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
/// Literals the platform accepts as boolean false.
pub(crate) const FALSE_LITERALS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

// ============================================================================
// SECTION: Raw Input Types
// ============================================================================

/// Raw key/value mapping carried by the platform configuration object.
pub type RawConfig = BTreeMap<String, String>;

/// Platform configuration object wrapping the raw key/value mapping.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigMapObject {
    /// Raw configuration entries; `None` when the object carries no data.
    #[serde(default)]
    pub data: Option<RawConfig>,
}

impl ConfigMapObject {
    /// Parses a platform configuration object from its JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Parse`] when the payload is malformed.
    pub fn from_json(payload: &str) -> Result<Self, TranslateError> {
        serde_json::from_str(payload).map_err(|err| TranslateError::Parse(err.to_string()))
    }
}

/// Feature flags supplied by the controller runtime at parse time.
///
/// The translator only reads these flags to decide which keys are eligible
/// for non-default values; it never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureContext {
    /// Commercial proxy edition is in use.
    pub commercial_edition: bool,
    /// Web-application-firewall module is loaded.
    pub waf_module: bool,
    /// Denial-of-service protection module is loaded.
    pub dos_module: bool,
    /// Transport (TLS) passthrough mode is enabled.
    pub tls_passthrough: bool,
}

impl FeatureContext {
    /// Returns true when WAF-gated keys may carry non-default values.
    #[must_use]
    pub const fn waf_eligible(&self) -> bool {
        self.commercial_edition && self.waf_module
    }
}

// ============================================================================
// SECTION: Validated Configuration
// ============================================================================

/// Validated proxy configuration produced by the translator.
///
/// Every field is always populated; rejected input falls back to the
/// defaults below and is reported through the warning list instead of
/// failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigParams {
    /// Action applied to compressed request bodies by the WAF module.
    pub app_protect_compressed_requests_action: String,
    /// Enforcer reconnect period in seconds, kept as verbatim decimal text.
    pub app_protect_reconnect_period: String,
    /// Header consulted for the real client address.
    pub real_ip_header: String,
    /// Access-log directive value, destination plus optional format selector.
    pub access_log: String,
}

impl Default for ConfigParams {
    fn default() -> Self {
        Self {
            app_protect_compressed_requests_action: String::new(),
            app_protect_reconnect_period: String::new(),
            real_ip_header: String::new(),
            access_log: DEFAULT_ACCESS_LOG.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised for structurally unusable configuration objects.
///
/// Per-field problems never surface here; they are reported as warnings and
/// the affected field falls back to its default.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Configuration object payload could not be parsed.
    #[error("config object parse error: {0}")]
    Parse(String),
    /// Configuration object carries no data mapping.
    #[error("config object has no data: {0}")]
    MissingData(String),
}
