pub mod penduduk_handler;
pub mod registri_handler;
pub mod sibling_handler;

pub use penduduk_handler::*;
pub use registri_handler::*;
pub use sibling_handler::*;
