// Messages
pub const SERVER_ERROR_MESSAGE: &str = "Server error";
pub const CONTACT_NOT_FOUND_MESSAGE: &str = "Contact not found";
pub const CONTACT_DELETED_MESSAGE: &str = "Contact deleted successfully";
pub const CONTACT_ROUTE_WORKING: &str = "Contact route working";
pub const API_RUNNING: &str = "API running...";
