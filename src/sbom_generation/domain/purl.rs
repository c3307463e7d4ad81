//! Package URL helpers.
//!
//! Only the `pkg:<type>/<name>@<version>` subset is produced here; parsing
//! is limited to recovering the type (ecosystem) segment.

const PURL_SCHEME: &str = "pkg:";

/// Builds `pkg:<ecosystem>/<name>@<version>` with a lowercased ecosystem and
/// percent-encoded name and version.
pub fn generate_purl(ecosystem: &str, name: &str, version: &str) -> String {
    format!(
        "{}{}/{}@{}",
        PURL_SCHEME,
        ecosystem.to_lowercase(),
        urlencoding::encode(name),
        urlencoding::encode(version)
    )
}

/// Returns the ecosystem segment of a purl, i.e. the text between `pkg:`
/// and the first `/`. Returns `None` for absent or non-matching input.
pub fn extract_ecosystem(purl: Option<&str>) -> Option<String> {
    let rest = purl?.strip_prefix(PURL_SCHEME)?;
    let (segment, _) = rest.split_once('/')?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}

/// Replaces every character outside `[A-Za-z0-9.-]` with `-`.
///
/// Used for SPDX element identifiers, never for purls.
pub fn sanitize_identifier(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
