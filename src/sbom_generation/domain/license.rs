/// Sentinel SPDX uses for "no information asserted".
pub const NOASSERTION: &str = "NOASSERTION";

/// How a raw license string should be placed in a CycloneDX license entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseRef {
    /// A known SPDX license identifier
    Id(String),
    /// Anything else, kept verbatim as a free-form name
    Name(String),
}

impl LicenseRef {
    pub fn classify(raw: &str) -> Self {
        if spdx::license_id(raw).is_some() {
            LicenseRef::Id(raw.to_string())
        } else {
            LicenseRef::Name(raw.to_string())
        }
    }
}

/// True when an SPDX license field carries real information
pub fn is_asserted(value: &str) -> bool {
    value != NOASSERTION
}
