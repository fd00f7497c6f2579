pub mod data;
mod persistence;
pub mod service;
#[cfg(test)]
mod tests;

pub use persistence::DbContext;
pub use persistence::get_db_context;

#[derive(Debug, Clone)]
pub struct Config {
    pub surreal_db_connection: String,
}
