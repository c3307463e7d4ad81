use super::format_adapter::package_spdx_id;
use crate::sbom_generation::domain::cyclonedx::{CdxComponent, CdxLicense, ComponentType};
use crate::sbom_generation::domain::license::NOASSERTION;
use crate::sbom_generation::domain::purl::generate_purl;
use crate::sbom_generation::domain::{
    CdxMetadata, CdxTool, CycloneDxDocument, Dependency, SbomDocument, SbomFormat, SbomMetadata,
    SpdxCreationInfo, SpdxDocument, SpdxExternalRef, SpdxPackage,
};

/// SbomBuilder service constructing fresh documents from a flat dependency list
///
/// Output order matches input order. Input is assumed to be validated at
/// the application boundary.
pub struct SbomBuilder;

impl SbomBuilder {
    pub fn build(
        deps: &[Dependency],
        format: SbomFormat,
        metadata: &SbomMetadata,
    ) -> SbomDocument {
        match format {
            SbomFormat::CycloneDx => SbomDocument::CycloneDx(Self::build_cyclonedx(deps, metadata)),
            SbomFormat::Spdx => SbomDocument::Spdx(Self::build_spdx(deps, metadata)),
        }
    }

    pub fn build_cyclonedx(deps: &[Dependency], metadata: &SbomMetadata) -> CycloneDxDocument {
        let components = deps
            .iter()
            .map(|dep| CdxComponent {
                component_type: ComponentType::Library,
                name: dep.name.clone(),
                version: dep.version.clone(),
                purl: Some(generate_purl(&dep.ecosystem, &dep.name, &dep.version)),
                licenses: dep.license().map(|l| vec![CdxLicense::from_raw(l)]),
                bom_ref: Some(format!("{}:{}@{}", dep.ecosystem, dep.name, dep.version)),
            })
            .collect();

        CycloneDxDocument::new(
            metadata.serial_number(),
            cyclonedx_metadata(metadata),
            components,
        )
    }

    pub fn build_spdx(deps: &[Dependency], metadata: &SbomMetadata) -> SpdxDocument {
        let packages = deps
            .iter()
            .enumerate()
            .map(|(index, dep)| {
                let license = dep.license().unwrap_or(NOASSERTION).to_string();
                SpdxPackage {
                    name: dep.name.clone(),
                    spdx_id: package_spdx_id(&dep.name, index),
                    download_location: NOASSERTION.to_string(),
                    version_info: dep.version.clone(),
                    license_concluded: Some(license.clone()),
                    license_declared: Some(license),
                    files_analyzed: false,
                    external_refs: vec![SpdxExternalRef::purl(generate_purl(
                        &dep.ecosystem,
                        &dep.name,
                        &dep.version,
                    ))],
                }
            })
            .collect();

        SpdxDocument::new(
            metadata.document_name().to_string(),
            metadata.document_namespace(),
            spdx_creation_info(metadata),
            packages,
        )
    }
}

/// CycloneDX metadata block with a single tool descriptor
pub(crate) fn cyclonedx_metadata(metadata: &SbomMetadata) -> CdxMetadata {
    let tool = metadata.tool();
    CdxMetadata {
        timestamp: metadata.timestamp().to_string(),
        tools: vec![CdxTool {
            vendor: Some(tool.vendor.clone()),
            name: Some(tool.name.clone()),
            version: Some(tool.version.clone()),
        }],
    }
}

pub(crate) fn spdx_creation_info(metadata: &SbomMetadata) -> SpdxCreationInfo {
    SpdxCreationInfo {
        created: metadata.timestamp().to_string(),
        creators: metadata.creators(),
    }
}
