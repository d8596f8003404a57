mod merge_service;

pub use merge_service::MergeService;
