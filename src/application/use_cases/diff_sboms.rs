use super::merge_sboms::skipped_document_warning;
use crate::application::dto::{DiffResponse, DiffSbomsRequest};
use crate::sbom_generation::domain::SbomDocument;
use crate::sbom_generation::services::DiffEngine;
use crate::shared::Result;

/// DiffSbomsUseCase - compares an old and a new SBOM snapshot
///
/// Needs no identity source: diff output carries no generated fields.
#[derive(Debug, Default)]
pub struct DiffSbomsUseCase;

impl DiffSbomsUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, request: DiffSbomsRequest) -> Result<DiffResponse> {
        let mut warnings = Vec::new();
        let old = SbomDocument::from_value(0, &request.old_sbom)?;
        if old.is_none() {
            warnings.push(skipped_document_warning("old_sbom"));
        }
        let new = SbomDocument::from_value(1, &request.new_sbom)?;
        if new.is_none() {
            warnings.push(skipped_document_warning("new_sbom"));
        }

        let report = DiffEngine::diff(old.as_ref(), new.as_ref());

        tracing::info!(
            changes = report.change_count(),
            added = report.added.len(),
            removed = report.removed.len(),
            version_changed = report.version_changed.len(),
            "diffed SBOMs"
        );

        Ok(DiffResponse::new(report, warnings))
    }
}
