pub mod flow;
pub mod passenger;
pub mod payload;
pub mod pricing;

#[cfg(test)]
pub(crate) mod testutil;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("no outbound flight selected")]
    MissingOutboundFlight,
    #[error("passenger index {0} out of range")]
    PassengerIndexOutOfRange(usize),
}

pub type BookingResult<T> = Result<T, BookingError>;
