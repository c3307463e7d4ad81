use chrono::{DateTime, Utc};
use uuid::Uuid;

/// IdentitySource port for time- and randomness-dependent fields
///
/// Generated documents need a creation timestamp and a random document
/// identifier. Abstracting both lets tests pin them to fixed values.
pub trait IdentitySource {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// A fresh document-scoped identifier
    fn new_uuid(&self) -> Uuid;
}
