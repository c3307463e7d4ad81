//! CycloneDX 1.5 JSON document model (component-centric).
//!
//! Only the fields needed for identity, versioning, licensing and purl
//! tracking are modeled. Unknown fields are ignored on input.

use super::license::LicenseRef;
use serde::{Deserialize, Serialize};

pub const BOM_FORMAT: &str = "CycloneDX";
pub const SPEC_VERSION: &str = "1.5";
pub const BOM_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycloneDxDocument {
    #[serde(rename = "bomFormat")]
    pub bom_format: String,
    #[serde(rename = "specVersion", default)]
    pub spec_version: String,
    #[serde(default)]
    pub version: u32,
    #[serde(
        rename = "serialNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub metadata: CdxMetadata,
    #[serde(default)]
    pub components: Vec<CdxComponent>,
}

impl CycloneDxDocument {
    /// Creates a document with the fixed format, spec-version and version tags
    pub fn new(
        serial_number: String,
        metadata: CdxMetadata,
        components: Vec<CdxComponent>,
    ) -> Self {
        Self {
            bom_format: BOM_FORMAT.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            version: BOM_VERSION,
            serial_number: Some(serial_number),
            metadata,
            components,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CdxMetadata {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub tools: Vec<CdxTool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CdxTool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// CycloneDX 1.5 component classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    Application,
    Framework,
    #[default]
    Library,
    Container,
    Platform,
    OperatingSystem,
    Device,
    DeviceDriver,
    Firmware,
    File,
    MachineLearningModel,
    Data,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdxComponent {
    #[serde(rename = "type", default)]
    pub component_type: ComponentType,
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Vec<CdxLicense>>,
    #[serde(rename = "bom-ref", default, skip_serializing_if = "Option::is_none")]
    pub bom_ref: Option<String>,
}

impl CdxComponent {
    /// Raw license text of the first license entry: id, then name, then expression
    pub fn first_license(&self) -> Option<&str> {
        self.licenses
            .as_ref()?
            .first()
            .and_then(CdxLicense::as_text)
    }
}

/// One entry of a component's `licenses` array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CdxLicense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl CdxLicense {
    /// Builds a `{license: {id}}` or `{license: {name}}` entry from raw text
    pub fn from_raw(raw: &str) -> Self {
        let content = match LicenseRef::classify(raw) {
            LicenseRef::Id(id) => LicenseContent {
                id: Some(id),
                name: None,
            },
            LicenseRef::Name(name) => LicenseContent {
                id: None,
                name: Some(name),
            },
        };
        Self {
            license: Some(content),
            expression: None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        self.license
            .as_ref()
            .and_then(|l| l.id.as_deref().or(l.name.as_deref()))
            .or(self.expression.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
