use super::validation::parse_arguments;
use crate::application::tool_catalog::MERGE_TOOL;
use crate::sbom_generation::domain::SbomFormat;
use crate::shared::error::SbomError;
use serde::Deserialize;
use serde_json::Value;

/// MergeSbomsRequest - validated input of the merge tool
///
/// Documents stay raw JSON here; classification happens in the use case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MergeSbomsRequest {
    pub sboms: Vec<Value>,
    pub format: SbomFormat,
}

impl MergeSbomsRequest {
    pub fn new(sboms: Vec<Value>, format: SbomFormat) -> Self {
        Self { sboms, format }
    }

    /// Validates raw `{sboms, format}` tool arguments
    pub fn from_arguments(arguments: &Value) -> Result<Self, SbomError> {
        parse_arguments(MERGE_TOOL, arguments)
    }
}
