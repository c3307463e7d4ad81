//! SPDX 2.3 JSON document model (package-centric).

use super::license::NOASSERTION;
use serde::{Deserialize, Serialize};

pub const SPDX_VERSION: &str = "SPDX-2.3";
pub const DATA_LICENSE: &str = "CC0-1.0";
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";
pub const PACKAGE_MANAGER_CATEGORY: &str = "PACKAGE-MANAGER";
pub const PURL_REFERENCE_TYPE: &str = "purl";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpdxDocument {
    #[serde(rename = "spdxVersion")]
    pub spdx_version: String,
    #[serde(rename = "dataLicense", default)]
    pub data_license: String,
    #[serde(rename = "SPDXID", default)]
    pub spdx_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "documentNamespace", default)]
    pub document_namespace: String,
    #[serde(rename = "creationInfo", default)]
    pub creation_info: SpdxCreationInfo,
    #[serde(default)]
    pub packages: Vec<SpdxPackage>,
}

impl SpdxDocument {
    /// Creates a document with the fixed version, data-license and root id
    pub fn new(
        name: String,
        document_namespace: String,
        creation_info: SpdxCreationInfo,
        packages: Vec<SpdxPackage>,
    ) -> Self {
        Self {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: DATA_LICENSE.to_string(),
            spdx_id: DOCUMENT_SPDX_ID.to_string(),
            name,
            document_namespace,
            creation_info,
            packages,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpdxCreationInfo {
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub creators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpdxPackage {
    pub name: String,
    #[serde(rename = "SPDXID", default)]
    pub spdx_id: String,
    #[serde(rename = "downloadLocation", default = "noassertion")]
    pub download_location: String,
    #[serde(rename = "versionInfo", default)]
    pub version_info: String,
    #[serde(
        rename = "licenseConcluded",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub license_concluded: Option<String>,
    #[serde(
        rename = "licenseDeclared",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub license_declared: Option<String>,
    #[serde(rename = "filesAnalyzed", default)]
    pub files_analyzed: bool,
    #[serde(rename = "externalRefs", default, skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<SpdxExternalRef>,
}

impl SpdxPackage {
    /// Locator of the first external reference whose type is `purl`
    pub fn purl(&self) -> Option<&str> {
        self.external_refs
            .iter()
            .find(|r| r.reference_type == PURL_REFERENCE_TYPE)
            .map(|r| r.reference_locator.as_str())
    }

    /// Fills missing license fields with NOASSERTION
    pub fn with_license_defaults(mut self) -> Self {
        self.license_concluded
            .get_or_insert_with(|| NOASSERTION.to_string());
        self.license_declared
            .get_or_insert_with(|| NOASSERTION.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpdxExternalRef {
    #[serde(rename = "referenceCategory")]
    pub reference_category: String,
    #[serde(rename = "referenceType")]
    pub reference_type: String,
    #[serde(rename = "referenceLocator")]
    pub reference_locator: String,
}

impl SpdxExternalRef {
    pub fn purl(locator: impl Into<String>) -> Self {
        Self {
            reference_category: PACKAGE_MANAGER_CATEGORY.to_string(),
            reference_type: PURL_REFERENCE_TYPE.to_string(),
            reference_locator: locator.into(),
        }
    }
}

fn noassertion() -> String {
    NOASSERTION.to_string()
}
