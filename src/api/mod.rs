pub mod backend;
pub mod client;
pub mod error;

pub use backend::CompareBackend;
pub use client::CompareClient;
pub use error::ApiError;
