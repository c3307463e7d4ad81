pub mod component_record;
pub mod cyclonedx;
pub mod dependency;
pub mod diff_report;
pub mod license;
pub mod purl;
pub mod sbom_document;
pub mod sbom_metadata;
pub mod spdx;

pub use component_record::ComponentRecord;
pub use cyclonedx::{
    CdxComponent, CdxLicense, CdxMetadata, CdxTool, ComponentType, CycloneDxDocument,
};
pub use dependency::Dependency;
pub use diff_report::{AddedComponent, DiffReport, RemovedComponent, VersionChange};
pub use sbom_document::{DocumentKind, SbomDocument, SbomFormat};
pub use sbom_metadata::{GeneratorSettings, SbomMetadata, ToolInfo};
pub use spdx::{SpdxCreationInfo, SpdxDocument, SpdxExternalRef, SpdxPackage};
