use crate::application::dto::{CreateSbomRequest, SbomResponse};
use crate::ports::outbound::IdentitySource;
use crate::sbom_generation::domain::GeneratorSettings;
use crate::sbom_generation::services::{SbomBuilder, SbomGenerator};
use crate::shared::Result;

/// CreateSbomUseCase - builds a fresh SBOM from a dependency list
///
/// # Type Parameters
/// * `IS` - IdentitySource implementation (clock and UUIDs)
pub struct CreateSbomUseCase<IS> {
    identity_source: IS,
    settings: GeneratorSettings,
}

impl<IS> CreateSbomUseCase<IS>
where
    IS: IdentitySource,
{
    pub fn new(identity_source: IS, settings: GeneratorSettings) -> Self {
        Self {
            identity_source,
            settings,
        }
    }

    pub fn execute(&self, request: CreateSbomRequest) -> Result<SbomResponse> {
        let metadata = SbomGenerator::generate_metadata(
            &self.identity_source,
            &self.settings,
            &self.settings.document_name,
        );
        let sbom = SbomBuilder::build(&request.deps, request.format, &metadata);

        tracing::info!(
            format = %request.format,
            components = sbom.len(),
            "created SBOM"
        );

        Ok(SbomResponse::new(sbom, Vec::new()))
    }
}
