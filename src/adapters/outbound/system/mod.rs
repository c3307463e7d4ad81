mod system_identity_source;

pub use system_identity_source::SystemIdentitySource;
