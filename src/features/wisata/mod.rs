//! Tourism objects (objek wisata), served live from the sibling tourism
//! service. Nothing here is stored locally.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/wisata` | List tourism objects (remote fetch) |
//! | GET | `/wisata/{id_wisata}` | Get tourism object by id |

pub mod clients;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::WisataClient;
pub use services::WisataService;
