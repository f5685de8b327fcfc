//! JSON export of all stored files and tutorials, with per-model and
//! per-category statistics.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::ExportService;
