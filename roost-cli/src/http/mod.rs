//! API access.

pub mod client;
pub mod request;
pub mod transport;

pub use client::{ApiClient, PaginationLimitExceeded};
pub use transport::{HttpTransport, HttpStatusError, Transport};
