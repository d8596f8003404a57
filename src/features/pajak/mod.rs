//! Tax records for tourism objects (pajak objek wisata).
//!
//! In-memory CRUD over the tax register. The backing store is shared with
//! the `pajakwisata` merge engine.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/pajak` | Add tax record (duplicate id rejected) |
//! | GET | `/pajak` | List tax records |
//! | GET | `/pajak/{id_pajak}` | Get tax record |
//! | PUT | `/pajak/{id_pajak}` | Replace tax record |
//! | DELETE | `/pajak/{id_pajak}` | Delete tax record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PajakService;
