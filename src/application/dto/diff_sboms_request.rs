use super::validation::parse_arguments;
use crate::application::tool_catalog::DIFF_TOOL;
use crate::shared::error::SbomError;
use serde::Deserialize;
use serde_json::Value;

/// DiffSbomsRequest - validated input of the diff tool
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiffSbomsRequest {
    pub old_sbom: Value,
    pub new_sbom: Value,
}

impl DiffSbomsRequest {
    pub fn new(old_sbom: Value, new_sbom: Value) -> Self {
        Self { old_sbom, new_sbom }
    }

    /// Validates raw `{old_sbom, new_sbom}` tool arguments
    pub fn from_arguments(arguments: &Value) -> Result<Self, SbomError> {
        parse_arguments(DIFF_TOOL, arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_arguments() {
        let request = DiffSbomsRequest::from_arguments(&json!({
            "old_sbom": { "bomFormat": "CycloneDX" },
            "new_sbom": { "spdxVersion": "SPDX-2.3" }
        }))
        .unwrap();
        assert_eq!(request.old_sbom["bomFormat"], "CycloneDX");
    }

    #[test]
    fn test_missing_documents_rejected() {
        let error = DiffSbomsRequest::from_arguments(&json!({ "old_sbom": [] })).unwrap_err();
        let paths: Vec<&str> = error.details().iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["new_sbom", "old_sbom"]);
    }
}
