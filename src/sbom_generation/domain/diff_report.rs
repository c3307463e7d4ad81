use serde::Serialize;

/// A component present only in the new document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComponent {
    pub name: String,
    pub version: String,
    pub ecosystem: Option<String>,
    pub purl: Option<String>,
}

/// A component present only in the old document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedComponent {
    pub name: String,
    pub version: String,
    pub ecosystem: Option<String>,
    pub purl: Option<String>,
}

/// A component present in both documents with differing versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionChange {
    pub name: String,
    pub old_version: String,
    pub new_version: String,
    pub ecosystem: Option<String>,
    pub purl: Option<String>,
}

/// Semantic difference between two SBOM snapshots.
///
/// All lists are sorted by component name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub added: Vec<AddedComponent>,
    pub removed: Vec<RemovedComponent>,
    pub version_changed: Vec<VersionChange>,
}

impl DiffReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.version_changed.is_empty()
    }

    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.version_changed.len()
    }
}
