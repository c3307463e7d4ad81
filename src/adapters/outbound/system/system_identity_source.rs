use crate::ports::outbound::IdentitySource;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// SystemIdentitySource adapter backed by the system clock and UUID v4
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentitySource;

impl IdentitySource for SystemIdentitySource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn new_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}
