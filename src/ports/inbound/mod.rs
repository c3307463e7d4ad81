/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., the
/// stdio transport) use to interact with the application core.
pub mod sbom_tool_port;

pub use sbom_tool_port::SbomToolPort;
