use crate::{app::ClientState, status::StatusKind};
use contacts_core::validation::ContactField;
use std::fmt;

/// Plain text rendering of the whole client screen
pub struct StateView<'a>(pub &'a ClientState);

impl fmt::Display for StateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = self.0;
        writeln!(f, "=== Contact Management ===  [refresh]")?;
        writeln!(f)?;
        writeln!(f, "-- Add Contact --")?;
        if let Some(status) = &state.status {
            let marker = match status.kind {
                StatusKind::Success => "OK",
                StatusKind::Error => "!!",
            };
            writeln!(f, "[{marker}] {}", status.message)?;
        }
        for (field, label) in [
            (ContactField::Name, "Name *"),
            (ContactField::Email, "Email *"),
            (ContactField::Phone, "Phone *"),
        ] {
            let value = match field {
                ContactField::Name => &state.form.draft.name,
                ContactField::Email => &state.form.draft.email,
                ContactField::Phone => &state.form.draft.phone,
            };
            writeln!(f, "{label:<9} {value}")?;
            if let Some(err) = state.form.visible_error(field) {
                writeln!(f, "          ^ {err}")?;
            }
        }
        writeln!(f, "{:<9} {}", "Message", state.form.draft.message)?;
        if state.form.is_valid() {
            writeln!(f, "[Add Contact]")?;
        } else {
            writeln!(f, "[Add Contact] (disabled)")?;
        }
        writeln!(f)?;

        writeln!(f, "-- Contacts -- {} total", state.contacts.len())?;
        if state.contacts.is_empty() {
            writeln!(f, "No contacts yet")?;
            return writeln!(f, "Add one using the form above.");
        }
        writeln!(f, "{:>3}  {:<20} {:<28} {:<15}", "#", "Name", "Email", "Phone")?;
        for (idx, contact) in state.contacts.iter().enumerate() {
            writeln!(
                f,
                "{:>3}  {:<20} {:<28} {:<15}",
                idx + 1,
                contact.name,
                contact.email,
                contact.phone
            )?;
        }
        Ok(())
    }
}
