//! Tutorial video links.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/tutorials?category=` | List tutorials, newest first |
//! | POST | `/api/tutorials` | Add a tutorial |
//! | DELETE | `/api/tutorials/{id}` | Delete a tutorial |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::TutorialService;
