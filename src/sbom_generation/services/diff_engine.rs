use super::format_adapter::FormatAdapter;
use crate::sbom_generation::domain::purl::extract_ecosystem;
use crate::sbom_generation::domain::{
    AddedComponent, DiffReport, RemovedComponent, SbomDocument, VersionChange,
};

/// DiffEngine service comparing two SBOM snapshots.
///
/// Components are matched by name only, so a version bump is reported as a
/// version change rather than a removal plus an addition. Unchanged
/// components are omitted. Unrecognized documents (`None`) count as empty.
pub struct DiffEngine;

impl DiffEngine {
    pub fn diff(old: Option<&SbomDocument>, new: Option<&SbomDocument>) -> DiffReport {
        let old_records = FormatAdapter::normalize_by_name(old);
        let new_records = FormatAdapter::normalize_by_name(new);

        let mut report = DiffReport::default();

        for (name, record) in &new_records {
            let purl = record.purl().map(str::to_string);
            let ecosystem = extract_ecosystem(record.purl());
            match old_records.get(name) {
                None => report.added.push(AddedComponent {
                    name: name.clone(),
                    version: record.version().to_string(),
                    ecosystem,
                    purl,
                }),
                Some(previous) if previous.version() != record.version() => {
                    report.version_changed.push(VersionChange {
                        name: name.clone(),
                        old_version: previous.version().to_string(),
                        new_version: record.version().to_string(),
                        ecosystem,
                        purl,
                    })
                }
                Some(_) => {}
            }
        }

        for (name, record) in &old_records {
            if !new_records.contains_key(name) {
                report.removed.push(RemovedComponent {
                    name: name.clone(),
                    version: record.version().to_string(),
                    ecosystem: extract_ecosystem(record.purl()),
                    purl: record.purl().map(str::to_string),
                });
            }
        }

        report.added.sort_by(|a, b| a.name.cmp(&b.name));
        report.removed.sort_by(|a, b| a.name.cmp(&b.name));
        report.version_changed.sort_by(|a, b| a.name.cmp(&b.name));
        report
    }
}
