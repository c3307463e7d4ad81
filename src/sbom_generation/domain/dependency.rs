use serde::{Deserialize, Serialize};

/// Dependency value object: one flat entry of builder input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub ecosystem: String,
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Dependency {
    pub fn new(
        ecosystem: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        license: Option<String>,
    ) -> Self {
        Self {
            ecosystem: ecosystem.into(),
            name: name.into(),
            version: version.into(),
            license,
        }
    }

    /// The declared license; blank strings count as no license
    pub fn license(&self) -> Option<&str> {
        self.license
            .as_deref()
            .filter(|license| !license.trim().is_empty())
    }
}
