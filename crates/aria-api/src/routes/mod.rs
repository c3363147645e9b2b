pub mod health;
pub mod import;
pub mod instruments;
