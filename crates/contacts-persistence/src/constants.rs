// DB constants
pub const DB_TABLE: &str = "table";
pub const DB_CREATED_AT: &str = "created_at";
