mod auth;
pub mod client;
pub mod error;
mod travel_requests;
pub mod types;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
