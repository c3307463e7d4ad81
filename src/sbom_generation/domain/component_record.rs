use super::purl::extract_ecosystem;

/// Format-independent view of a single component or package.
///
/// Records are built fresh for every operation and never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    name: String,
    version: String,
    purl: Option<String>,
    ecosystem: Option<String>,
}

impl ComponentRecord {
    /// Creates a record; the ecosystem is always derived from the purl.
    pub fn new(name: String, version: String, purl: Option<String>) -> Self {
        let ecosystem = extract_ecosystem(purl.as_deref());
        Self {
            name,
            version,
            purl,
            ecosystem,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn purl(&self) -> Option<&str> {
        self.purl.as_deref()
    }

    pub fn ecosystem(&self) -> Option<&str> {
        self.ecosystem.as_deref()
    }

    /// Identity used for merging: `name@version`
    pub fn merge_key(&self) -> String {
        merge_key(&self.name, &self.version)
    }

    /// Identity used for diffing: the name alone
    pub fn diff_key(&self) -> &str {
        &self.name
    }
}

/// `name@version`
pub fn merge_key(name: &str, version: &str) -> String {
    format!("{}@{}", name, version)
}
