pub mod remote;
pub mod store;
pub mod types;
pub mod validation;
