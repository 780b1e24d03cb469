//! Common types used throughout feedscroll
//!
//! Shared type aliases and small enums used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// One opaque item returned by a data source.
///
/// The pagination layer never looks inside a record; it only appends it to
/// the accumulated list in arrival order.
pub type Record = JsonValue;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Output Format
// ============================================================================

/// How records are written to stdout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One JSON record per line
    Json,
    /// One human-readable summary line per record
    #[default]
    Pretty,
}
