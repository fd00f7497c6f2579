pub use contacts_core::contact;
pub use contacts_core::validation;

pub use contacts_core::Contact;
pub use contacts_core::NewContact;
