//! Calibration file uploads (XDF/BIN/A2L).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/files?model=` | List files, newest first |
//! | POST | `/api/files` | Multipart upload |
//! | GET | `/api/files/{id}/download` | Raw file content |
//! | DELETE | `/api/files/{id}` | Delete file and content |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::FileService;
