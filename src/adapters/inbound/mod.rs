/// Inbound adapters - Transports that drive the application core
pub mod stdio_server;

pub use stdio_server::StdioServer;
