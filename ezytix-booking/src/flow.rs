use async_trait::async_trait;

use ezytix_core::flight::{Flight, SeatClass};
use ezytix_core::HOME_COUNTRY;

use crate::passenger::{PassengerData, PassengerSlot};
use crate::payload::{build_booking_request, CreateBookingRequest, CreateBookingResponse};
use crate::pricing::{quote, PriceBreakdown};
use crate::{BookingError, BookingResult};

/// Fallback shown when the backend gives no usable error message.
pub const GENERIC_SUBMIT_ERROR: &str = "Gagal memproses booking. Silakan coba lagi.";

/// A booking is international iff any leg's origin or destination country
/// differs from the home country. Pure over the already-fetched flights.
pub fn is_international(outbound: &Flight, inbound: Option<&Flight>) -> bool {
    let leg_is_intl = |flight: &Flight| {
        flight.origin.country != HOME_COUNTRY || flight.destination.country != HOME_COUNTRY
    };
    leg_is_intl(outbound) || inbound.map(leg_is_intl).unwrap_or(false)
}

/// Navigation context for the booking page, parsed from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingContext {
    pub outbound_id: i64,
    pub inbound_id: Option<i64>,
    pub passenger_count: usize,
    pub seat_class: SeatClass,
}

impl BookingContext {
    /// Parse `outbound_id`, `inbound_id`, `passengers` and `seat_class`
    /// from query pairs. A missing or malformed `outbound_id` is fatal to
    /// the page; the caller redirects home. Passenger count defaults to 1,
    /// seat class to economy.
    pub fn from_query<'a, I>(pairs: I) -> BookingResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut outbound_id = None;
        let mut inbound_id = None;
        let mut passenger_count = 1usize;
        let mut seat_class = SeatClass::default();

        for (key, value) in pairs {
            match key {
                "outbound_id" => outbound_id = value.parse::<i64>().ok(),
                "inbound_id" => inbound_id = value.parse::<i64>().ok(),
                "passengers" => {
                    passenger_count = value.parse::<usize>().unwrap_or(1).max(1);
                }
                "seat_class" => {
                    seat_class = value.parse().unwrap_or_default();
                }
                _ => {}
            }
        }

        Ok(Self {
            outbound_id: outbound_id.ok_or(BookingError::MissingOutboundFlight)?,
            inbound_id,
            passenger_count,
            seat_class,
        })
    }
}

/// Error surfaced by a booking backend.
#[derive(Debug, thiserror::Error)]
pub enum BookingApiError {
    /// The backend rejected the booking with a human-readable message.
    #[error("{0}")]
    Rejected(String),
    /// Transport or decoding failure; no message worth showing verbatim.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Seam between the booking flow and the network, so the flow can be
/// driven against test doubles.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<CreateBookingResponse, BookingApiError>;
}

/// Reason a submission did not start. Neither is an error: the page shows
/// a blocking hint and stays interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    AlreadyProcessing,
    FormIncomplete,
}

/// Where to send the user after a confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    Payment(String),
    Home,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A submission is already in flight; nothing was sent.
    AlreadyProcessing,
    /// The form is not complete; nothing was sent.
    FormIncomplete,
    Confirmed {
        response: CreateBookingResponse,
        redirect: Redirect,
    },
    /// Recoverable: the message is shown and the user may retry.
    Failed { message: String },
}

/// Aggregate state of the booking page: the selected flights, one slot per
/// traveler, and the in-flight submission guard. The slot count is fixed
/// at construction and never changes for the flow's lifetime.
#[derive(Debug)]
pub struct BookingFlow {
    outbound: Flight,
    inbound: Option<Flight>,
    seat_class: SeatClass,
    slots: Vec<PassengerSlot>,
    processing: bool,
}

impl BookingFlow {
    pub fn new(
        outbound: Flight,
        inbound: Option<Flight>,
        seat_class: SeatClass,
        passenger_count: usize,
    ) -> Self {
        Self {
            outbound,
            inbound,
            seat_class,
            slots: (0..passenger_count).map(|_| PassengerSlot::default()).collect(),
            processing: false,
        }
    }

    pub fn passenger_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_international(&self) -> bool {
        is_international(&self.outbound, self.inbound.as_ref())
    }

    /// Store a traveler's form data and recompute that slot's validity.
    pub fn update_passenger(
        &mut self,
        index: usize,
        data: PassengerData,
        single_name: bool,
    ) -> BookingResult<()> {
        let international = self.is_international();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(BookingError::PassengerIndexOutOfRange(index))?;
        slot.update(data, single_name, international);
        Ok(())
    }

    /// Submit gate: true iff there is at least one slot and every slot
    /// reports valid.
    pub fn is_form_valid(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|slot| slot.valid)
    }

    pub fn price(&self) -> PriceBreakdown {
        quote(&self.outbound, self.inbound.as_ref(), self.slots.len())
    }

    pub fn build_request(&self) -> CreateBookingRequest {
        let passengers: Vec<PassengerData> =
            self.slots.iter().map(|slot| slot.data.clone()).collect();
        build_booking_request(
            &passengers,
            &self.outbound,
            self.inbound.as_ref(),
            self.seat_class,
        )
    }

    /// Arm the in-flight guard and hand back the payload, or report why
    /// the submission cannot start. No network is touched here.
    pub fn try_begin_submit(&mut self) -> Result<CreateBookingRequest, SubmitBlocked> {
        if self.processing {
            return Err(SubmitBlocked::AlreadyProcessing);
        }
        if !self.is_form_valid() {
            return Err(SubmitBlocked::FormIncomplete);
        }
        self.processing = true;
        Ok(self.build_request())
    }

    /// Drop the in-flight guard once a submission resolves.
    pub fn finish_submit(&mut self) {
        self.processing = false;
    }

    /// Run the whole submission: gate, POST, outcome. Failure is
    /// recoverable; the guard is released on every path so the user can
    /// retry.
    pub async fn submit(&mut self, api: &dyn BookingApi) -> SubmitOutcome {
        let request = match self.try_begin_submit() {
            Ok(request) => request,
            Err(SubmitBlocked::AlreadyProcessing) => return SubmitOutcome::AlreadyProcessing,
            Err(SubmitBlocked::FormIncomplete) => return SubmitOutcome::FormIncomplete,
        };

        let result = api.create_booking(&request).await;
        self.finish_submit();

        match result {
            Ok(response) => {
                tracing::info!(order_id = %response.order_id, "booking confirmed");
                let redirect = if response.payment_url.is_empty() {
                    Redirect::Home
                } else {
                    Redirect::Payment(response.payment_url.clone())
                };
                SubmitOutcome::Confirmed { response, redirect }
            }
            Err(err) => {
                tracing::warn!(error = %err, "booking submission failed");
                let message = match err {
                    BookingApiError::Rejected(message) => message,
                    BookingApiError::Transport(_) => GENERIC_SUBMIT_ERROR.to_string(),
                };
                SubmitOutcome::Failed { message }
            }
        }
    }
}
