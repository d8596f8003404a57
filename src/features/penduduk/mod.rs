//! Residents (penduduk): the main civil register, the per-partner
//! sub-registries, and proxy reads over the partner groups' own APIs.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST/GET | `/penduduk` | Civil register create/list |
//! | GET/PUT/DELETE | `/penduduk/{nik}` | Civil register by NIK |
//! | POST/GET | `/pendudukrental`(`/{nik}`) | Car-rental sub-registry (full CRUD) |
//! | POST/GET | `/pendudukhotel`(`/{nik}`) | Hotel sub-registry (full CRUD) |
//! | POST/GET | `/pendudukasuransi`(`/{nik}`) | Insurance sub-registry (append/read) |
//! | POST/GET | `/pendudukbank`(`/{nik}`) | Bank sub-registry (append/read) |
//! | GET | `/penduduk/asuransi`, `/penduduk/bank`, `/penduduk/hotel` | Partner registries (proxied) |
//! | GET | `/pelanggan`, `/tourguide` | Partner registries (proxied) |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::SiblingClient;
pub use services::{PendudukService, RegistriService};
