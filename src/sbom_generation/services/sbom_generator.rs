use crate::ports::outbound::IdentitySource;
use crate::sbom_generation::domain::{GeneratorSettings, SbomMetadata};
use chrono::SecondsFormat;

/// SbomGenerator service for generating per-document metadata
///
/// Draws exactly one timestamp and one UUID from the identity source,
/// so every generated document carries a single fresh identity.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata with the current timestamp and a fresh UUID
    ///
    /// # Arguments
    /// * `source` - Clock and UUID source
    /// * `settings` - Tool descriptor and SPDX namespace prefix
    /// * `document_name` - Name written into SPDX documents and namespaces
    pub fn generate_metadata<S: IdentitySource + ?Sized>(
        source: &S,
        settings: &GeneratorSettings,
        document_name: &str,
    ) -> SbomMetadata {
        let timestamp = source
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        SbomMetadata::new(
            timestamp,
            source.new_uuid(),
            document_name.to_string(),
            settings.spdx_namespace_prefix.clone(),
            settings.tool.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::system::SystemIdentitySource;
    use crate::sbom_generation::domain::ToolInfo;

    #[test]
    fn test_generate_metadata() {
        let settings = GeneratorSettings {
            tool: ToolInfo::new("acme", "test-tool", "1.0.0"),
            ..GeneratorSettings::default()
        };
        let metadata = SbomGenerator::generate_metadata(&SystemIdentitySource, &settings, "sbom");

        assert_eq!(metadata.tool().name, "test-tool");
        assert_eq!(metadata.tool().version, "1.0.0");
        assert!(metadata.serial_number().starts_with("urn:uuid:"));
        assert!(metadata
            .document_namespace()
            .starts_with("https://spdx.org/spdxdocs/sbom-"));
    }

    #[test]
    fn test_generate_metadata_timestamp_format() {
        let metadata = SbomGenerator::generate_metadata(
            &SystemIdentitySource,
            &GeneratorSettings::default(),
            "sbom",
        );
        let timestamp = metadata.timestamp();

        assert!(timestamp.contains('T'));
        assert!(timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_generate_metadata_unique_serial_numbers() {
        let settings = GeneratorSettings::default();
        let metadata1 = SbomGenerator::generate_metadata(&SystemIdentitySource, &settings, "sbom");
        let metadata2 = SbomGenerator::generate_metadata(&SystemIdentitySource, &settings, "sbom");

        assert_ne!(metadata1.serial_number(), metadata2.serial_number());
    }

    #[test]
    fn test_generate_metadata_uuid_format() {
        let metadata = SbomGenerator::generate_metadata(
            &SystemIdentitySource,
            &GeneratorSettings::default(),
            "sbom",
        );
        let serial = metadata.serial_number();

        let uuid_part = serial.strip_prefix("urn:uuid:").unwrap();
        assert_eq!(uuid_part.len(), 36);
        assert_eq!(uuid_part.matches('-').count(), 4);
    }
}
