use super::cyclonedx::{CycloneDxDocument, BOM_FORMAT};
use super::spdx::{SpdxDocument, SPDX_VERSION};
use crate::shared::error::SbomError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Output format selectable by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SbomFormat {
    /// CycloneDX 1.5 JSON (component-centric)
    CycloneDx,
    /// SPDX 2.3 JSON (package-centric)
    Spdx,
}

impl SbomFormat {
    pub fn display_name(&self) -> &'static str {
        match self {
            SbomFormat::CycloneDx => "CycloneDX",
            SbomFormat::Spdx => "SPDX",
        }
    }
}

impl std::str::FromStr for SbomFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cyclonedx" => Ok(SbomFormat::CycloneDx),
            "spdx" => Ok(SbomFormat::Spdx),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'cyclonedx' or 'spdx'",
                s
            )),
        }
    }
}

impl fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SbomFormat::CycloneDx => write!(f, "cyclonedx"),
            SbomFormat::Spdx => write!(f, "spdx"),
        }
    }
}

/// Result of inspecting an arbitrary JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    ComponentCentric,
    PackageCentric,
    Unrecognized,
}

impl DocumentKind {
    /// A document is CycloneDX iff `bomFormat == "CycloneDX"`, SPDX iff
    /// `spdxVersion == "SPDX-2.3"`. The format tag is checked first.
    pub fn classify(document: &Value) -> Self {
        if document.get("bomFormat").and_then(Value::as_str) == Some(BOM_FORMAT) {
            DocumentKind::ComponentCentric
        } else if document.get("spdxVersion").and_then(Value::as_str) == Some(SPDX_VERSION) {
            DocumentKind::PackageCentric
        } else {
            DocumentKind::Unrecognized
        }
    }
}

/// Either of the two supported SBOM shapes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SbomDocument {
    CycloneDx(CycloneDxDocument),
    Spdx(SpdxDocument),
}

impl SbomDocument {
    /// Classifies and deserializes a raw document.
    ///
    /// Unrecognized documents yield `Ok(None)`. A recognized document whose
    /// nested structure does not match yields `MalformedDocument`.
    pub fn from_value(index: usize, document: &Value) -> Result<Option<Self>, SbomError> {
        let malformed = |format: SbomFormat, err: serde_json::Error| SbomError::MalformedDocument {
            index,
            format: format.display_name().to_string(),
            details: err.to_string(),
        };

        match DocumentKind::classify(document) {
            DocumentKind::ComponentCentric => CycloneDxDocument::deserialize(document)
                .map(|doc| Some(SbomDocument::CycloneDx(doc)))
                .map_err(|e| malformed(SbomFormat::CycloneDx, e)),
            DocumentKind::PackageCentric => SpdxDocument::deserialize(document)
                .map(|doc| Some(SbomDocument::Spdx(doc)))
                .map_err(|e| malformed(SbomFormat::Spdx, e)),
            DocumentKind::Unrecognized => Ok(None),
        }
    }

    pub fn format(&self) -> SbomFormat {
        match self {
            SbomDocument::CycloneDx(_) => SbomFormat::CycloneDx,
            SbomDocument::Spdx(_) => SbomFormat::Spdx,
        }
    }

    /// Number of components or packages
    pub fn len(&self) -> usize {
        match self {
            SbomDocument::CycloneDx(doc) => doc.components.len(),
            SbomDocument::Spdx(doc) => doc.packages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(SbomFormat::from_str("cyclonedx").unwrap(), SbomFormat::CycloneDx);
        assert_eq!(SbomFormat::from_str("spdx").unwrap(), SbomFormat::Spdx);
        // same wire names the tool schemas advertise
        assert!(SbomFormat::from_str("CycloneDX").is_err());
        assert!(SbomFormat::from_str("SPDX").is_err());
    }

    #[test]
    fn test_format_from_str_invalid() {
        let error = SbomFormat::from_str("swid").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("swid"));
        assert!(SbomFormat::from_str("").is_err());
    }

    #[test]
    fn test_format_display_and_serde() {
        assert_eq!(SbomFormat::CycloneDx.to_string(), "cyclonedx");
        assert_eq!(SbomFormat::Spdx.to_string(), "spdx");
        let format: SbomFormat = serde_json::from_value(json!("spdx")).unwrap();
        assert_eq!(format, SbomFormat::Spdx);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            DocumentKind::classify(&json!({ "bomFormat": "CycloneDX" })),
            DocumentKind::ComponentCentric
        );
        assert_eq!(
            DocumentKind::classify(&json!({ "spdxVersion": "SPDX-2.3" })),
            DocumentKind::PackageCentric
        );
        assert_eq!(
            DocumentKind::classify(&json!({ "spdxVersion": "SPDX-2.2" })),
            DocumentKind::Unrecognized
        );
        assert_eq!(
            DocumentKind::classify(&json!({ "bomFormat": "cyclonedx" })),
            DocumentKind::Unrecognized
        );
        assert_eq!(DocumentKind::classify(&json!([])), DocumentKind::Unrecognized);
    }

    #[test]
    fn test_from_value_unrecognized_is_none() {
        let result = SbomDocument::from_value(0, &json!({ "hello": "world" })).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_from_value_malformed_component() {
        let value = json!({
            "bomFormat": "CycloneDX",
            "components": [{ "version": "1.0.0" }]
        });
        let error = SbomDocument::from_value(3, &value).unwrap_err();
        match error {
            SbomError::MalformedDocument { index, format, .. } => {
                assert_eq!(index, 3);
                assert_eq!(format, "CycloneDX");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_value_spdx() {
        let value = json!({
            "spdxVersion": "SPDX-2.3",
            "packages": [{ "name": "lodash", "versionInfo": "4.17.21" }]
        });
        let doc = SbomDocument::from_value(0, &value).unwrap().unwrap();
        assert_eq!(doc.format(), SbomFormat::Spdx);
        assert_eq!(doc.len(), 1);
        assert!(!doc.is_empty());
    }
}
