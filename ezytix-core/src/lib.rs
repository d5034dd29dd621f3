pub mod airport;
pub mod booking;
pub mod flight;
pub mod format;
pub mod routes;
pub mod user;

/// Home country used for internationality checks and as the default
/// passenger nationality.
pub const HOME_COUNTRY: &str = "Indonesia";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("unknown seat class: {0}")]
    UnknownSeatClass(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
