use crate::application::dto::{
    CreateSbomRequest, DiffSbomsRequest, MergeSbomsRequest, ToolResponse, Warnings,
};
use crate::application::use_cases::{CreateSbomUseCase, DiffSbomsUseCase, MergeSbomsUseCase};
use crate::ports::inbound::SbomToolPort;
use crate::ports::outbound::IdentitySource;
use crate::sbom_generation::domain::GeneratorSettings;
use crate::shared::error::SbomError;
use crate::shared::Result;
use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::Value;

/// SbomToolService - wires the use cases behind the inbound tool port
///
/// Validates raw arguments, runs the matching use case and wraps the outcome
/// in an envelope stamped with `source` and the retrieval time.
pub struct SbomToolService<IS> {
    identity_source: IS,
    source: String,
    create: CreateSbomUseCase<IS>,
    merge: MergeSbomsUseCase<IS>,
    diff: DiffSbomsUseCase,
}

impl<IS> SbomToolService<IS>
where
    IS: IdentitySource + Clone,
{
    pub fn new(
        identity_source: IS,
        settings: GeneratorSettings,
        source: impl Into<String>,
    ) -> Self {
        Self {
            create: CreateSbomUseCase::new(identity_source.clone(), settings.clone()),
            merge: MergeSbomsUseCase::new(identity_source.clone(), settings),
            diff: DiffSbomsUseCase::new(),
            identity_source,
            source: source.into(),
        }
    }

    fn retrieved_at(&self) -> String {
        self.identity_source
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn respond<T>(&self, tool: &str, outcome: Result<T>) -> ToolResponse
    where
        T: Serialize + Warnings,
    {
        let retrieved_at = self.retrieved_at();
        let serialized = outcome.and_then(|response| {
            let data = serde_json::to_value(&response).map_err(SbomError::from)?;
            Ok((data, response.warnings().to_vec()))
        });

        match serialized {
            Ok((data, warnings)) => {
                ToolResponse::success(data, self.source.as_str(), retrieved_at, warnings)
            }
            Err(err) => {
                tracing::warn!(tool, error = %err, "tool call failed");
                ToolResponse::from_error(&err, retrieved_at)
            }
        }
    }
}

impl<IS> SbomToolPort for SbomToolService<IS>
where
    IS: IdentitySource + Clone,
{
    fn create_sbom(&self, arguments: &Value) -> ToolResponse {
        let outcome = CreateSbomRequest::from_arguments(arguments)
            .map_err(anyhow::Error::from)
            .and_then(|request| self.create.execute(request));
        self.respond("sbom_create", outcome)
    }

    fn merge_sboms(&self, arguments: &Value) -> ToolResponse {
        let outcome = MergeSbomsRequest::from_arguments(arguments)
            .map_err(anyhow::Error::from)
            .and_then(|request| self.merge.execute(request));
        self.respond("sbom_merge", outcome)
    }

    fn diff_sboms(&self, arguments: &Value) -> ToolResponse {
        let outcome = DiffSbomsRequest::from_arguments(arguments)
            .map_err(anyhow::Error::from)
            .and_then(|request| self.diff.execute(request));
        self.respond("sbom_diff", outcome)
    }
}
