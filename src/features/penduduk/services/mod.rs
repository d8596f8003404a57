mod penduduk_service;
mod registri_service;

pub use penduduk_service::PendudukService;
pub use registri_service::RegistriService;
