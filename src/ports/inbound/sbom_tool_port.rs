use crate::application::dto::ToolResponse;
use serde_json::Value;

/// SbomToolPort - Inbound port for the three SBOM tools
///
/// Each method takes the raw tool arguments and always returns an envelope:
/// validation failures and processing errors are reported inside it rather
/// than as a Rust error, so transports can forward the result verbatim.
pub trait SbomToolPort {
    /// Builds a new SBOM from `{deps, format}`
    fn create_sbom(&self, arguments: &Value) -> ToolResponse;

    /// Merges `{sboms, format}` into a single document
    fn merge_sboms(&self, arguments: &Value) -> ToolResponse;

    /// Compares `{old_sbom, new_sbom}`
    fn diff_sboms(&self, arguments: &Value) -> ToolResponse;
}
