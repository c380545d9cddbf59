// crates/edgeway-config/src/lib.rs
// ============================================================================
// Module: Edgeway Config Library
// Description: ConfigMap translation model, validation, and artifacts.
// Purpose: Single source of truth for configuration object semantics.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `edgeway-config` translates the platform's string-keyed configuration
//! object into the validated, fully defaulted model consumed by the
//! proxy-directive generator. Invalid entries never abort a parse: each
//! falls back to its default and is reported through an ordered warning
//! list for caller-side event logging. The crate also provides
//! deterministic generators for the key schema, docs, and examples.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod docs;
pub mod examples;
pub mod resolve;
pub mod schema;
pub mod translate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use docs::config_docs_markdown;
pub use docs::verify_config_docs;
pub use docs::write_config_docs;
pub use examples::config_map_json_example;
pub use resolve::*;
pub use schema::config_map_schema;
pub use translate::*;
