/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach outside of itself (clock, random identifiers).
pub mod identity_source;

pub use identity_source::IdentitySource;
