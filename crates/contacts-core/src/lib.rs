pub mod contact;
#[cfg(test)]
mod tests;
pub mod util;
pub mod validation;

pub use contact::{Contact, NewContact};
pub use validation::{ContactField, FieldErrors};
