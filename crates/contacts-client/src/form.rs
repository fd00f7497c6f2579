use contacts_core::{
    NewContact,
    validation::{ContactField, FieldErrors, validate_fields},
};

/// What the user typed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Whether the user has left a required field at least once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touched {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
}

impl Touched {
    pub fn get(&self, field: ContactField) -> bool {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Phone => self.phone,
        }
    }

    fn set(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = true,
            ContactField::Email => self.email = true,
            ContactField::Phone => self.phone = true,
        }
    }
}

/// The add-contact form. Field errors are derived from the draft on every
/// read and only shown once the field is touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub touched: Touched,
}

impl ContactForm {
    pub fn set_field(&mut self, field: ContactField, value: &str) {
        let target = match field {
            ContactField::Name => &mut self.draft.name,
            ContactField::Email => &mut self.draft.email,
            ContactField::Phone => &mut self.draft.phone,
        };
        *target = value.to_owned();
    }

    pub fn set_message(&mut self, value: &str) {
        self.draft.message = value.to_owned();
    }

    pub fn blur(&mut self, field: ContactField) {
        self.touched.set(field);
    }

    pub fn touch_all(&mut self) {
        for field in ContactField::ALL {
            self.touched.set(field);
        }
    }

    pub fn errors(&self) -> FieldErrors {
        validate_fields(&self.draft.name, &self.draft.email, &self.draft.phone)
    }

    pub fn visible_error(&self, field: ContactField) -> Option<&'static str> {
        if self.touched.get(field) {
            self.errors().get(field)
        } else {
            None
        }
    }

    /// Submit is enabled exactly when this holds
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_new_contact(&self) -> NewContact {
        let message = self.draft.message.trim();
        NewContact::new(
            self.draft.name.trim(),
            self.draft.email.trim(),
            self.draft.phone.trim(),
            (!message.is_empty()).then_some(message),
        )
    }
}
