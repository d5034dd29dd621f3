pub mod api;
pub mod client_config;
pub mod error;
pub mod session;

pub use api::EzytixClient;
pub use client_config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use session::SessionCache;
