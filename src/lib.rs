pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod ledger;
pub mod session;
pub mod view;

pub use error::ClientError;
