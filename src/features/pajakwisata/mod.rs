//! Merged tax + tourism records: the aggregation core of this API.
//!
//! Combines the local tax register with the tourism-object list fetched live
//! from the sibling service. List merging follows the configured
//! [`MergePolicy`]; by-id lookups always join by key.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/pajakwisata` | Merged list (policy-dependent pairing) |
//! | GET | `/pajakwisata/{id_pajak}` | Merged record by tax id |
//! | POST | `/pajakwisata` | Create (stores tax fields only) |
//! | PUT | `/pajakwisata/{id_pajak}` | Replace tax fields |
//! | DELETE | `/pajakwisata/{id_pajak}` | Delete the backing tax record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::{MergePolicy, Pajakwisata};
pub use services::MergeService;
