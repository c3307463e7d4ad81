use super::validation::parse_arguments;
use crate::application::tool_catalog::CREATE_TOOL;
use crate::sbom_generation::domain::{Dependency, SbomFormat};
use crate::shared::error::SbomError;
use serde::Deserialize;
use serde_json::Value;

/// CreateSbomRequest - validated input of the create tool
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateSbomRequest {
    pub deps: Vec<Dependency>,
    pub format: SbomFormat,
}

impl CreateSbomRequest {
    pub fn new(deps: Vec<Dependency>, format: SbomFormat) -> Self {
        Self { deps, format }
    }

    /// Validates raw `{deps, format}` tool arguments
    pub fn from_arguments(arguments: &Value) -> Result<Self, SbomError> {
        parse_arguments(CREATE_TOOL, arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_valid_arguments() {
        let request = CreateSbomRequest::from_arguments(&json!({
            "deps": [
                { "ecosystem": "npm", "name": "lodash", "version": "4.17.21", "license": "MIT" },
                { "ecosystem": "pypi", "name": "requests", "version": "2.31.0" }
            ],
            "format": "spdx"
        }))
        .unwrap();

        assert_eq!(request.format, SbomFormat::Spdx);
        assert_eq!(request.deps.len(), 2);
        assert_eq!(request.deps[0].license(), Some("MIT"));
        assert_eq!(request.deps[1].license(), None);
    }

    #[test]
    fn test_empty_deps_rejected() {
        let error =
            CreateSbomRequest::from_arguments(&json!({ "deps": [], "format": "cyclonedx" }))
                .unwrap_err();
        assert_eq!(error.code(), ErrorCode::InvalidInput);
        assert_eq!(error.details()[0].path, "deps");
    }

    #[test]
    fn test_every_bad_field_reported() {
        let error = CreateSbomRequest::from_arguments(&json!({
            "deps": [
                { "ecosystem": "npm", "name": "", "version": "1.0.0" },
                "lodash",
                { "ecosystem": "npm", "name": "a", "version": "1", "license": 5 }
            ],
            "format": "xml"
        }))
        .unwrap_err();

        let paths: Vec<&str> = error.details().iter().map(|d| d.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["deps[0].name", "deps[1]", "deps[2].license", "format"]
        );
    }

    #[test]
    fn test_empty_license_rejected() {
        let error = CreateSbomRequest::from_arguments(&json!({
            "deps": [{ "ecosystem": "npm", "name": "lodash", "version": "4.17.21", "license": "" }],
            "format": "cyclonedx"
        }))
        .unwrap_err();

        assert_eq!(error.details()[0].path, "deps[0].license");
        assert_eq!(error.details()[0].message, "must not be empty");
    }

    #[test]
    fn test_missing_format_rejected() {
        let error = CreateSbomRequest::from_arguments(&json!({
            "deps": [{ "ecosystem": "npm", "name": "a", "version": "1" }]
        }))
        .unwrap_err();
        assert_eq!(error.details()[0].path, "format");
        assert_eq!(error.details()[0].message, "is required");
    }
}
