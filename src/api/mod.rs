pub mod client;
pub mod payload;

pub use client::ApiClient;
pub use payload::UserEntry;
