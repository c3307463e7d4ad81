use super::format_adapter::{package_spdx_id, FormatAdapter};
use super::sbom_builder::{cyclonedx_metadata, spdx_creation_info};
use crate::sbom_generation::domain::component_record::merge_key;
use crate::sbom_generation::domain::{
    CdxComponent, CycloneDxDocument, SbomDocument, SbomFormat, SbomMetadata, SpdxDocument,
    SpdxPackage,
};
use indexmap::IndexMap;
use std::collections::HashSet;

/// MergeEngine service reconciling many documents into one.
///
/// Both input shapes are indexed by `name@version` in input order; the first
/// writer for a key wins and later same-key entries are dropped. Entries only
/// known in the other shape are converted when the output format needs them.
pub struct MergeEngine;

/// Entries collected from all inputs, split by their source shape
#[derive(Debug, Default)]
struct MergeIndex {
    components: IndexMap<String, CdxComponent>,
    packages: IndexMap<String, SpdxPackage>,
}

impl MergeEngine {
    pub fn merge(
        documents: &[SbomDocument],
        format: SbomFormat,
        metadata: &SbomMetadata,
    ) -> SbomDocument {
        let index = Self::index(documents);
        match format {
            SbomFormat::CycloneDx => SbomDocument::CycloneDx(Self::emit_cyclonedx(index, metadata)),
            SbomFormat::Spdx => SbomDocument::Spdx(Self::emit_spdx(index, metadata)),
        }
    }

    fn index(documents: &[SbomDocument]) -> MergeIndex {
        let mut index = MergeIndex::default();
        for document in documents {
            match document {
                SbomDocument::CycloneDx(doc) => {
                    for component in &doc.components {
                        index
                            .components
                            .entry(merge_key(&component.name, &component.version))
                            .or_insert_with(|| component.clone());
                    }
                }
                SbomDocument::Spdx(doc) => {
                    for package in &doc.packages {
                        index
                            .packages
                            .entry(merge_key(&package.name, &package.version_info))
                            .or_insert_with(|| package.clone());
                    }
                }
            }
        }
        index
    }

    fn emit_cyclonedx(index: MergeIndex, metadata: &SbomMetadata) -> CycloneDxDocument {
        let MergeIndex {
            mut components,
            packages,
        } = index;

        for (key, package) in &packages {
            if !components.contains_key(key) {
                components.insert(key.clone(), FormatAdapter::to_cyclonedx_component(package));
            }
        }

        CycloneDxDocument::new(
            metadata.serial_number(),
            cyclonedx_metadata(metadata),
            components.into_values().collect(),
        )
    }

    fn emit_spdx(index: MergeIndex, metadata: &SbomMetadata) -> SpdxDocument {
        let MergeIndex {
            components,
            packages,
        } = index;

        // Continue numbering after the packages that came in as SPDX
        let mut ids = SpdxIdAllocator::new(packages.len());
        let claimed: Vec<bool> = packages
            .values()
            .map(|package| ids.claim(&package.spdx_id))
            .collect();

        let synthesized: Vec<&CdxComponent> = components
            .iter()
            .filter(|(key, _)| !packages.contains_key(*key))
            .map(|(_, component)| component)
            .collect();

        let mut merged = Vec::with_capacity(packages.len() + synthesized.len());
        for (mut package, claimed) in packages.into_values().zip(claimed) {
            if !claimed {
                let index = ids.next_index_for(&package.name);
                package.spdx_id = package_spdx_id(&package.name, index);
            }
            merged.push(package.with_license_defaults());
        }
        for component in synthesized {
            let index = ids.next_index_for(&component.name);
            merged.push(FormatAdapter::to_spdx_package(component, index).with_license_defaults());
        }

        SpdxDocument::new(
            metadata.document_name().to_string(),
            metadata.document_namespace(),
            spdx_creation_info(metadata),
            merged,
        )
    }
}

/// Package ids handed out within one SPDX document
struct SpdxIdAllocator {
    used: HashSet<String>,
    next_index: usize,
}

impl SpdxIdAllocator {
    fn new(next_index: usize) -> Self {
        Self {
            used: HashSet::new(),
            next_index,
        }
    }

    /// Keeps an incoming id; `false` when it is empty or already taken
    fn claim(&mut self, id: &str) -> bool {
        !id.is_empty() && self.used.insert(id.to_string())
    }

    /// Next sequence index whose id for `name` is still free
    fn next_index_for(&mut self, name: &str) -> usize {
        loop {
            let index = self.next_index;
            self.next_index += 1;
            if self.used.insert(package_spdx_id(name, index)) {
                return index;
            }
        }
    }
}
