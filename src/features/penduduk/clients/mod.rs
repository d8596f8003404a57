mod sibling_client;

pub use sibling_client::SiblingClient;
