// crates/edgeway-config/src/translate.rs
// ============================================================================
// Module: ConfigMap Translator
// Description: Orchestrates field resolution over the raw mapping.
// Purpose: Produce a fully populated config plus ordered warnings.
// Dependencies: crate::{config, resolve}
// ============================================================================

//! ## Overview
//! The translator drives every registered [`crate::resolve::FieldResolver`]
//! over the raw mapping in a fixed order, assembling [`ConfigParams`] and
//! the ordered warning list. The pass is pure and stateless: identical
//! inputs always yield identical output and warning order, and independent
//! calls may run concurrently without coordination.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::config::ConfigMapObject;
use crate::config::ConfigParams;
use crate::config::FeatureContext;
use crate::config::RawConfig;
use crate::config::TranslateError;
use crate::resolve::REGISTRY;
use crate::resolve::Warning;

// ============================================================================
// SECTION: Result Aggregate
// ============================================================================

/// Aggregate result of one translation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Fully populated validated configuration.
    pub params: ConfigParams,
    /// Ordered warnings for caller-side reporting.
    pub warnings: Vec<Warning>,
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Translates a platform configuration object into validated params.
///
/// Per-field problems never fail the call; they surface as warnings while
/// the affected field falls back to its default.
///
/// # Errors
///
/// Returns [`TranslateError::MissingData`] when the object carries no data
/// mapping at all; the caller must treat this as "no configuration
/// available".
pub fn parse_config_map(
    object: &ConfigMapObject,
    context: &FeatureContext,
) -> Result<Translation, TranslateError> {
    let data = object
        .data
        .as_ref()
        .ok_or_else(|| TranslateError::MissingData("data section is absent".to_string()))?;
    Ok(translate_data(data, context))
}

/// Runs every registered resolver over the raw mapping.
///
/// Pure and infallible: unrecognized keys are ignored, and every recognized
/// field resolves to either the supplied value or its default.
#[must_use]
pub fn translate_data(data: &RawConfig, context: &FeatureContext) -> Translation {
    let mut params = ConfigParams::default();
    let mut warnings = Vec::new();
    for resolver in REGISTRY {
        let resolution = resolver.resolve(data, context);
        warnings.extend(resolution.warnings);
        resolver.apply(&mut params, resolution.value);
    }
    Translation {
        params,
        warnings,
    }
}

/// Returns every raw key recognized by the registry, in registry order.
#[must_use]
pub fn recognized_keys() -> Vec<&'static str> {
    REGISTRY.iter().flat_map(|resolver| resolver.keys().iter().copied()).collect()
}
