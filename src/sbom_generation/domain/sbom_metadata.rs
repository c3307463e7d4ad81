use uuid::Uuid;

pub const DEFAULT_SPDX_NAMESPACE_PREFIX: &str = "https://spdx.org/spdxdocs/";

/// Tool descriptor written into generated documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub vendor: String,
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn new(
        vendor: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ToolInfo {
    fn default() -> Self {
        Self::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )
    }
}

/// Explicit configuration for builder and merge calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub tool: ToolInfo,
    pub document_name: String,
    pub spdx_namespace_prefix: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            tool: ToolInfo::default(),
            document_name: "sbom".to_string(),
            spdx_namespace_prefix: DEFAULT_SPDX_NAMESPACE_PREFIX.to_string(),
        }
    }
}

/// SbomMetadata value object: the per-call identifiers and tool info
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    document_uuid: Uuid,
    document_name: String,
    namespace_prefix: String,
    tool: ToolInfo,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        document_uuid: Uuid,
        document_name: String,
        namespace_prefix: String,
        tool: ToolInfo,
    ) -> Self {
        Self {
            timestamp,
            document_uuid,
            document_name,
            namespace_prefix,
            tool,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool(&self) -> &ToolInfo {
        &self.tool
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    /// CycloneDX serial number: `urn:uuid:<uuid>`
    pub fn serial_number(&self) -> String {
        format!("urn:uuid:{}", self.document_uuid)
    }

    /// SPDX namespace: `<prefix><document name>-<uuid>`
    pub fn document_namespace(&self) -> String {
        format!(
            "{}{}-{}",
            self.namespace_prefix, self.document_name, self.document_uuid
        )
    }

    /// SPDX creator strings
    pub fn creators(&self) -> Vec<String> {
        vec![
            format!("Tool: {}-{}", self.tool.name, self.tool.version),
            format!("Organization: {}", self.tool.vendor),
        ]
    }
}
