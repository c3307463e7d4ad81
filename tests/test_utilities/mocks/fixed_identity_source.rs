use chrono::{DateTime, TimeZone, Utc};
use sbom_kit::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Mock IdentitySource returning a pinned clock and a fixed UUID
#[derive(Clone)]
pub struct FixedIdentitySource {
    now: DateTime<Utc>,
    uuid: Uuid,
    pub uuid_calls: Arc<AtomicU32>,
}

impl FixedIdentitySource {
    pub fn new() -> Self {
        Self {
            now: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            uuid: Uuid::parse_str("123e4567-e89b-42d3-a456-426614174000").unwrap(),
            uuid_calls: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn timestamp(&self) -> &'static str {
        "2024-01-15T10:30:00.000Z"
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn uuid_call_count(&self) -> u32 {
        self.uuid_calls.load(Ordering::SeqCst)
    }
}

impl IdentitySource for FixedIdentitySource {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn new_uuid(&self) -> Uuid {
        self.uuid_calls.fetch_add(1, Ordering::SeqCst);
        self.uuid
    }
}
