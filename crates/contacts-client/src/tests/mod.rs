#[cfg(test)]
pub mod tests {
    use chrono::DateTime;
    use contacts_core::Contact;

    pub fn get_contact(id: &str) -> Contact {
        Contact {
            id: id.to_owned(),
            name: "Someone".to_string(),
            email: "someone@example.com".to_string(),
            phone: "555".to_string(),
            message: None,
            created_at: DateTime::from_timestamp(1731500000, 0).unwrap(),
        }
    }

    pub fn get_baseline_contact() -> Contact {
        Contact {
            id: "8b38f26b-7e41-4a0f-9c7e-3b2b6a1d5c11".to_string(),
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: "1234567890".to_string(),
            message: None,
            created_at: DateTime::from_timestamp(1731593928, 0).unwrap(),
        }
    }
}
