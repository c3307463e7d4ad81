/// Mock implementations for testing
mod fixed_identity_source;

pub use fixed_identity_source::FixedIdentitySource;
