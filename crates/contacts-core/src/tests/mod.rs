#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::contact::Contact;
    use chrono::{TimeZone, Utc};

    pub fn get_baseline_contact() -> Contact {
        Contact {
            id: "00000000-0000-0000-0000-000000000000".to_string(),
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: "1234567890".to_string(),
            message: None,
            created_at: Utc.timestamp_opt(1731593928, 0).unwrap(),
        }
    }
}
