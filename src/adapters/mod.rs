/// Adapters layer - Concrete implementations of ports
///
/// Inbound adapters drive the application (stdio transport); outbound
/// adapters are driven by it (system clock and UUIDs).
pub mod inbound;
pub mod outbound;
