use crate::application::dto::{MergeSbomsRequest, SbomResponse};
use crate::ports::outbound::IdentitySource;
use crate::sbom_generation::domain::{GeneratorSettings, SbomDocument};
use crate::sbom_generation::services::{MergeEngine, SbomGenerator};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// MergeSbomsUseCase - reconciles several SBOMs into one document
///
/// Documents that are neither CycloneDX nor SPDX are skipped with a warning
/// instead of failing the whole call.
pub struct MergeSbomsUseCase<IS> {
    identity_source: IS,
    settings: GeneratorSettings,
}

impl<IS> MergeSbomsUseCase<IS>
where
    IS: IdentitySource,
{
    pub fn new(identity_source: IS, settings: GeneratorSettings) -> Self {
        Self {
            identity_source,
            settings,
        }
    }

    pub fn execute(&self, request: MergeSbomsRequest) -> Result<SbomResponse> {
        if request.sboms.is_empty() {
            return Err(SbomError::invalid_input("At least one SBOM is required to merge").into());
        }

        let mut documents = Vec::with_capacity(request.sboms.len());
        let mut warnings = Vec::new();
        for (index, raw) in request.sboms.iter().enumerate() {
            match SbomDocument::from_value(index, raw)? {
                Some(document) => documents.push(document),
                None => {
                    tracing::debug!(index, "skipping unrecognized document");
                    warnings.push(skipped_document_warning(&format!("sboms[{}]", index)));
                }
            }
        }

        let metadata = SbomGenerator::generate_metadata(
            &self.identity_source,
            &self.settings,
            &format!("merged-{}", self.settings.document_name),
        );
        let sbom = MergeEngine::merge(&documents, request.format, &metadata);

        tracing::info!(
            format = %request.format,
            inputs = request.sboms.len(),
            skipped = warnings.len(),
            components = sbom.len(),
            "merged SBOMs"
        );

        Ok(SbomResponse::new(sbom, warnings))
    }
}

/// Warning text for a document that is neither CycloneDX nor SPDX
pub(crate) fn skipped_document_warning(label: &str) -> String {
    format!(
        "{} is not a recognized CycloneDX or SPDX document and was skipped",
        label
    )
}
