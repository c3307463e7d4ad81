use crate::sbom_generation::domain::component_record::merge_key;
use crate::sbom_generation::domain::cyclonedx::{CdxComponent, CdxLicense, ComponentType};
use crate::sbom_generation::domain::license::{is_asserted, NOASSERTION};
use crate::sbom_generation::domain::purl::sanitize_identifier;
use crate::sbom_generation::domain::spdx::{SpdxExternalRef, SpdxPackage};
use crate::sbom_generation::domain::{
    ComponentRecord, CycloneDxDocument, SbomDocument, SpdxDocument,
};
use indexmap::IndexMap;

/// FormatAdapter service mapping both document shapes onto ComponentRecords
/// and converting single entries between the two shapes.
///
/// All maps are insertion-ordered and first-writer-wins.
pub struct FormatAdapter;

impl FormatAdapter {
    /// Normalizes any supported document into records keyed by `name@version`
    pub fn normalize(document: &SbomDocument) -> IndexMap<String, ComponentRecord> {
        match document {
            SbomDocument::CycloneDx(doc) => Self::normalize_cyclonedx(doc),
            SbomDocument::Spdx(doc) => Self::normalize_spdx(doc),
        }
    }

    pub fn normalize_cyclonedx(document: &CycloneDxDocument) -> IndexMap<String, ComponentRecord> {
        let mut records = IndexMap::new();
        for component in &document.components {
            records
                .entry(merge_key(&component.name, &component.version))
                .or_insert_with(|| Self::record_from_component(component));
        }
        records
    }

    pub fn normalize_spdx(document: &SpdxDocument) -> IndexMap<String, ComponentRecord> {
        let mut records = IndexMap::new();
        for package in &document.packages {
            records
                .entry(merge_key(&package.name, &package.version_info))
                .or_insert_with(|| Self::record_from_package(package));
        }
        records
    }

    /// Normalizes into records keyed by name alone, first occurrence wins.
    ///
    /// `None` (an unrecognized document) yields an empty map.
    pub fn normalize_by_name(document: Option<&SbomDocument>) -> IndexMap<String, ComponentRecord> {
        let mut records = IndexMap::new();
        let Some(document) = document else {
            return records;
        };
        for record in Self::normalize(document).into_values() {
            records
                .entry(record.diff_key().to_string())
                .or_insert(record);
        }
        records
    }

    /// Converts a CycloneDX component into an SPDX package with id
    /// `SPDXRef-Package-<sanitized name>-<index>`
    pub fn to_spdx_package(component: &CdxComponent, index: usize) -> SpdxPackage {
        let license = component
            .first_license()
            .unwrap_or(NOASSERTION)
            .to_string();

        SpdxPackage {
            name: component.name.clone(),
            spdx_id: package_spdx_id(&component.name, index),
            download_location: NOASSERTION.to_string(),
            version_info: component.version.clone(),
            license_concluded: Some(license.clone()),
            license_declared: Some(license),
            files_analyzed: false,
            external_refs: component
                .purl
                .iter()
                .map(SpdxExternalRef::purl)
                .collect(),
        }
    }

    /// Converts an SPDX package into a CycloneDX library component
    pub fn to_cyclonedx_component(package: &SpdxPackage) -> CdxComponent {
        let licenses = package
            .license_declared
            .as_deref()
            .filter(|license| is_asserted(license))
            .map(|license| vec![CdxLicense::from_raw(license)]);

        CdxComponent {
            component_type: ComponentType::Library,
            name: package.name.clone(),
            version: package.version_info.clone(),
            purl: package.purl().map(str::to_string),
            licenses,
            bom_ref: Some(merge_key(&package.name, &package.version_info)),
        }
    }

    fn record_from_component(component: &CdxComponent) -> ComponentRecord {
        ComponentRecord::new(
            component.name.clone(),
            component.version.clone(),
            component.purl.clone(),
        )
    }

    fn record_from_package(package: &SpdxPackage) -> ComponentRecord {
        ComponentRecord::new(
            package.name.clone(),
            package.version_info.clone(),
            package.purl().map(str::to_string),
        )
    }
}

/// `SPDXRef-Package-<sanitized name>-<index>`
pub fn package_spdx_id(name: &str, index: usize) -> String {
    format!("SPDXRef-Package-{}-{}", sanitize_identifier(name), index)
}
