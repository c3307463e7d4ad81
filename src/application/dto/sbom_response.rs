use crate::sbom_generation::domain::{DiffReport, SbomDocument};
use serde::Serialize;

/// Response DTOs share a side channel of non-fatal warnings that ends up in
/// the envelope's `meta.warnings`, not in `data`.
pub trait Warnings {
    fn warnings(&self) -> &[String];
}

/// SbomResponse - output of the create and merge use cases
#[derive(Debug, Clone, Serialize)]
pub struct SbomResponse {
    pub sbom: SbomDocument,
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl SbomResponse {
    pub fn new(sbom: SbomDocument, warnings: Vec<String>) -> Self {
        Self { sbom, warnings }
    }
}

impl Warnings for SbomResponse {
    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// DiffResponse - output of the diff use case
#[derive(Debug, Clone, Serialize)]
pub struct DiffResponse {
    #[serde(flatten)]
    pub report: DiffReport,
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl DiffResponse {
    pub fn new(report: DiffReport, warnings: Vec<String>) -> Self {
        Self { report, warnings }
    }
}

impl Warnings for DiffResponse {
    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
