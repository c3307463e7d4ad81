/// Outbound adapters - Implementations of outbound ports
pub mod system;
