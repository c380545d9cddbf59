// crates/edgeway-config/src/resolve.rs
// ============================================================================
// Module: Field Resolvers
// Description: Per-key validation and defaulting units for the translator.
// Purpose: Resolve each recognized key independently, never fatally.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! One resolver per recognized configuration key. Each resolver knows its
//! key, accepted values, default, and feature-flag gate, and resolves to
//! either the validated value or the default plus a recorded [`Warning`].
//! Resolution never fails; structural problems are handled one level up in
//! [`crate::translate`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::config::ACCESS_LOG_OFF;
use crate::config::COMPRESSED_REQUESTS_ACTIONS;
use crate::config::ConfigParams;
use crate::config::DEFAULT_ACCESS_LOG;
use crate::config::DEFAULT_ACCESS_LOG_DESTINATION;
use crate::config::FALSE_LITERALS;
use crate::config::FeatureContext;
use crate::config::MAX_RECONNECT_PERIOD_SECONDS;
use crate::config::MIN_RECONNECT_PERIOD_SECONDS;
use crate::config::NON_FILE_DESTINATION_SCHEMES;
use crate::config::RawConfig;
use crate::config::STDERR_ACCESS_LOG_DESTINATION;
use crate::config::TRUE_LITERALS;

// ============================================================================
// SECTION: Key Names
// ============================================================================

/// Raw key for the WAF compressed-requests action selector.
pub(crate) const COMPRESSED_REQUESTS_ACTION_KEY: &str = "app-protect-compressed-requests-action";
/// Raw key for the WAF enforcer reconnect period.
pub(crate) const RECONNECT_PERIOD_KEY: &str = "app-protect-reconnect-period-seconds";
/// Raw key for the real client address header.
pub(crate) const REAL_IP_HEADER_KEY: &str = "real-ip-header";
/// Raw key for the access-log destination.
pub(crate) const ACCESS_LOG_KEY: &str = "access-log";
/// Raw key for the access-log disable flag.
pub(crate) const ACCESS_LOG_OFF_KEY: &str = "access-log-off";

// ============================================================================
// SECTION: Resolution Types
// ============================================================================

/// Non-fatal record of a rejected or overridden configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Raw key the warning refers to.
    pub key: String,
    /// Human-readable reason for the rejection or override.
    pub reason: String,
}

impl Warning {
    /// Creates a warning for the given raw key.
    #[must_use]
    pub fn new(key: &str, reason: String) -> Self {
        Self {
            key: key.to_string(),
            reason,
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.key, self.reason)
    }
}

/// Outcome of resolving a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Validated textual value, always populated.
    pub value: String,
    /// Warnings recorded while resolving, in detection order.
    pub warnings: Vec<Warning>,
}

impl Resolution {
    /// Resolution that accepted a value without warnings.
    fn clean(value: String) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Resolution that fell back to a value because of one warning.
    fn fallback(value: String, warning: Warning) -> Self {
        Self {
            value,
            warnings: vec![warning],
        }
    }
}

// ============================================================================
// SECTION: Resolver Contract
// ============================================================================

/// Validation and defaulting unit for one recognized configuration field.
pub trait FieldResolver: Sync {
    /// Raw-mapping keys this resolver consumes.
    fn keys(&self) -> &'static [&'static str];

    /// Resolves the raw entries into a validated value plus warnings.
    fn resolve(&self, data: &RawConfig, context: &FeatureContext) -> Resolution;

    /// Writes the resolved value into the aggregate configuration.
    fn apply(&self, params: &mut ConfigParams, value: String);
}

/// Fixed resolver registry; declaration order defines warning order.
pub(crate) static REGISTRY: &[&dyn FieldResolver] = &[
    &CompressedRequestsAction,
    &ReconnectPeriodSeconds,
    &RealIpHeader,
    &AccessLog,
];

// ============================================================================
// SECTION: Resolvers
// ============================================================================

/// Resolver for the WAF compressed-requests action selector.
pub(crate) struct CompressedRequestsAction;

impl FieldResolver for CompressedRequestsAction {
    fn keys(&self) -> &'static [&'static str] {
        &[COMPRESSED_REQUESTS_ACTION_KEY]
    }

    fn resolve(&self, data: &RawConfig, context: &FeatureContext) -> Resolution {
        if !context.waf_eligible() {
            return Resolution::clean(String::new());
        }
        match data.get(COMPRESSED_REQUESTS_ACTION_KEY) {
            None => Resolution::clean(String::new()),
            Some(raw) if COMPRESSED_REQUESTS_ACTIONS.contains(&raw.as_str()) => {
                Resolution::clean(raw.clone())
            }
            Some(raw) => Resolution::fallback(
                String::new(),
                Warning::new(
                    COMPRESSED_REQUESTS_ACTION_KEY,
                    format!("invalid value {raw:?}: expected one of \"pass\" or \"drop\""),
                ),
            ),
        }
    }

    fn apply(&self, params: &mut ConfigParams, value: String) {
        params.app_protect_compressed_requests_action = value;
    }
}

/// Resolver for the WAF enforcer reconnect period.
pub(crate) struct ReconnectPeriodSeconds;

impl FieldResolver for ReconnectPeriodSeconds {
    fn keys(&self) -> &'static [&'static str] {
        &[RECONNECT_PERIOD_KEY]
    }

    fn resolve(&self, data: &RawConfig, context: &FeatureContext) -> Resolution {
        if !context.waf_eligible() {
            return Resolution::clean(String::new());
        }
        let Some(raw) = data.get(RECONNECT_PERIOD_KEY) else {
            return Resolution::clean(String::new());
        };
        // The validated value stays verbatim text so fractional precision
        // survives the round trip into the generated directive.
        match raw.parse::<f64>() {
            Ok(period)
                if period.is_finite()
                    && period > MIN_RECONNECT_PERIOD_SECONDS
                    && period <= MAX_RECONNECT_PERIOD_SECONDS =>
            {
                Resolution::clean(raw.clone())
            }
            _ => Resolution::fallback(
                String::new(),
                Warning::new(
                    RECONNECT_PERIOD_KEY,
                    format!("invalid value {raw:?}: expected a decimal in (0, 60]"),
                ),
            ),
        }
    }

    fn apply(&self, params: &mut ConfigParams, value: String) {
        params.app_protect_reconnect_period = value;
    }
}

/// Resolver for the real client address header.
pub(crate) struct RealIpHeader;

impl FieldResolver for RealIpHeader {
    fn keys(&self) -> &'static [&'static str] {
        &[REAL_IP_HEADER_KEY]
    }

    fn resolve(&self, data: &RawConfig, context: &FeatureContext) -> Resolution {
        if context.tls_passthrough {
            // The header is meaningless when the proxy never terminates the
            // connection; any supplied value is overridden.
            return match data.get(REAL_IP_HEADER_KEY) {
                Some(_) => Resolution::fallback(
                    String::new(),
                    Warning::new(
                        REAL_IP_HEADER_KEY,
                        "ignored because transport passthrough is enabled".to_string(),
                    ),
                ),
                None => Resolution::clean(String::new()),
            };
        }
        match data.get(REAL_IP_HEADER_KEY) {
            Some(raw) => Resolution::clean(raw.clone()),
            None => Resolution::clean(String::new()),
        }
    }

    fn apply(&self, params: &mut ConfigParams, value: String) {
        params.real_ip_header = value;
    }
}

/// Resolver for the access-log destination and its disable flag.
pub(crate) struct AccessLog;

impl FieldResolver for AccessLog {
    fn keys(&self) -> &'static [&'static str] {
        &[ACCESS_LOG_KEY, ACCESS_LOG_OFF_KEY]
    }

    fn resolve(&self, data: &RawConfig, _context: &FeatureContext) -> Resolution {
        let mut warnings = Vec::new();
        let mut disabled = false;
        if let Some(raw) = data.get(ACCESS_LOG_OFF_KEY) {
            match parse_bool(raw) {
                Some(flag) => disabled = flag,
                None => warnings.push(Warning::new(
                    ACCESS_LOG_OFF_KEY,
                    format!("invalid boolean {raw:?}: expected true or false"),
                )),
            }
        }
        if disabled {
            return Resolution {
                value: ACCESS_LOG_OFF.to_string(),
                warnings,
            };
        }
        let value = match data.get(ACCESS_LOG_KEY) {
            None => DEFAULT_ACCESS_LOG.to_string(),
            Some(raw) if raw.is_empty() => DEFAULT_ACCESS_LOG.to_string(),
            Some(raw) => sanitize_destination(raw, &mut warnings),
        };
        Resolution {
            value,
            warnings,
        }
    }

    fn apply(&self, params: &mut ConfigParams, value: String) {
        params.access_log = value;
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rewrites disallowed file destinations to the safe stream target.
///
/// Allowed destinations: the disabling sentinel, non-file scheme prefixes,
/// and the stdout/stderr streams. Anything else keeps its trailing format
/// selector but writes to the safe stream instead.
fn sanitize_destination(raw: &str, warnings: &mut Vec<Warning>) -> String {
    if raw == ACCESS_LOG_OFF {
        return raw.to_string();
    }
    if NON_FILE_DESTINATION_SCHEMES.iter().any(|scheme| raw.starts_with(scheme)) {
        return raw.to_string();
    }
    let (destination, format) = match raw.split_once(' ') {
        Some((destination, format)) => (destination, Some(format)),
        None => (raw, None),
    };
    if destination == DEFAULT_ACCESS_LOG_DESTINATION
        || destination == STDERR_ACCESS_LOG_DESTINATION
    {
        return raw.to_string();
    }
    warnings.push(Warning::new(
        ACCESS_LOG_KEY,
        format!(
            "file destination {destination:?} is not allowed, writing to {DEFAULT_ACCESS_LOG_DESTINATION:?}"
        ),
    ));
    match format {
        Some(format) => format!("{DEFAULT_ACCESS_LOG_DESTINATION} {format}"),
        None => DEFAULT_ACCESS_LOG_DESTINATION.to_string(),
    }
}

/// Parses a boolean with the platform's accepted literal set.
fn parse_bool(raw: &str) -> Option<bool> {
    if TRUE_LITERALS.contains(&raw) {
        return Some(true);
    }
    if FALSE_LITERALS.contains(&raw) {
        return Some(false);
    }
    None
}

// ============================================================================
// SECTION: Tests
// ============================================================================
