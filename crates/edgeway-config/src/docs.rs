// crates/edgeway-config/src/docs.rs
// ============================================================================
// Module: Config Docs Generator
// Description: Markdown generator for the ConfigMap key reference.
// Purpose: Keep key docs in sync with schema and validation.
// Dependencies: serde_json, std
// ============================================================================

//! ## Overview
//! Generates `Docs/configuration/config-map-keys.md` from the canonical
//! key schema. The output is deterministic and drift-checked in CI.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::schema::config_map_schema;
use crate::translate::recognized_keys;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output path for the generated key reference.
const DOCS_PATH: &str = "Docs/configuration/config-map-keys.md";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying config docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Schema traversal or rendering error.
    #[error("docs schema error: {0}")]
    Schema(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the ConfigMap key reference markdown.
///
/// # Errors
///
/// Returns [`DocsError`] when schema traversal fails or the schema has
/// drifted from the resolver registry.
pub fn config_docs_markdown() -> Result<String, DocsError> {
    let schema = config_map_schema();
    let mut out = String::new();

    out.push_str("<!--\n");
    out.push_str("Docs/configuration/config-map-keys.md\n");
    out.push_str("============================================================================\n");
    out.push_str("Document: Edgeway ConfigMap Key Reference\n");
    out.push_str("Description: Reference for recognized configuration object keys.\n");
    out.push_str("Purpose: Document validation, defaults, and feature gates per key.\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("============================================================================\n");
    out.push_str("-->\n\n");

    out.push_str("# ConfigMap Key Reference\n\n");
    out.push_str("## Overview\n\n");
    out.push_str("The controller reads these keys from the platform configuration object.\n");
    out.push_str("Invalid entries never abort a reload: each falls back to its default and\n");
    out.push_str("is surfaced to the operator as a warning event.\n\n");

    out.push_str("## Recognized Keys\n\n");
    let table = render_table(&schema).map_err(DocsError::Schema)?;
    out.push_str(&table);
    out.push('\n');

    out.push_str("## Feature Gates\n\n");
    out.push_str("- `app-protect-*` keys are honored only when the commercial edition and\n");
    out.push_str("  the WAF module are both present; otherwise they are ignored silently.\n");
    out.push_str("- `real-ip-header` is overridden to its default whenever transport\n");
    out.push_str("  passthrough is enabled, because the proxy never terminates the\n");
    out.push_str("  connection in that mode.\n");

    Ok(out)
}

/// Writes the generated docs to the standard location.
///
/// # Errors
///
/// Returns [`DocsError`] when file output fails.
pub fn write_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = config_docs_markdown()?;
    fs::write(path, content.as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the on-disk docs match the generated output.
///
/// # Errors
///
/// Returns [`DocsError`] when the docs drift.
pub fn verify_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = config_docs_markdown()?;
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != content {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders the key table from the schema properties.
///
/// Keys are rendered in lexicographic order and checked for completeness
/// against the resolver registry.
fn render_table(schema: &Value) -> Result<String, String> {
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| "schema properties must be an object".to_string())?;
    let ordered: BTreeMap<&String, &Value> = properties.iter().collect();

    for key in recognized_keys() {
        if !properties.contains_key(key) {
            return Err(format!("schema is missing recognized key {key}"));
        }
    }

    let mut table = String::new();
    table.push_str("| Key | Type | Default | Notes |\n");
    table.push_str("| --- | --- | --- | --- |\n");
    for (key, property) in ordered {
        let kind = property
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| format!("key {key} has no type"))?;
        let default = property.get("default").ok_or_else(|| format!("key {key} has no default"))?;
        let description = property
            .get("description")
            .and_then(Value::as_str)
            .ok_or_else(|| format!("key {key} has no description"))?;
        writeln!(table, "| `{key}` | {kind} | `{default}` | {description} |")
            .map_err(|err| err.to_string())?;
    }
    Ok(table)
}
