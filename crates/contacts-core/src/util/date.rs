use chrono::{DateTime, Utc};

pub type DateTimeUtc = DateTime<Utc>;

pub fn now() -> DateTimeUtc {
    Utc::now()
}
