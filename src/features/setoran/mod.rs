//! Tax deposit records (setoran pajak) reported to the bank group.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/setoranpajak` | Add deposit record |
//! | GET | `/setoranpajak` | List deposit records |
//! | GET | `/setoranpajak/{status_setoran}` | First deposit with status |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SetoranService;
