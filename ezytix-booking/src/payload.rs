use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use ezytix_core::booking::BookingStatus;
use ezytix_core::flight::{Flight, SeatClass};

use crate::passenger::PassengerData;

/// Localized honorific enum expected by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Honorific {
    Tuan,
    Nyonya,
    Nona,
}

impl Honorific {
    /// Map a form title onto the backend honorific. Case-insensitive
    /// substring match; "mrs" must be checked before "ms" since it
    /// contains it. Anything unrecognized (including "Mr") is Tuan.
    pub fn from_title(title: &str) -> Honorific {
        let t = title.to_lowercase();
        if t.contains("mrs") || t.contains("nyonya") {
            Honorific::Nyonya
        } else if t.contains("ms") || t.contains("nona") {
            Honorific::Nona
        } else {
            Honorific::Tuan
        }
    }
}

/// Passenger as the backend booking DTO expects it. Passport fields are
/// omitted from the JSON entirely when no passport number was entered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassengerPayload {
    pub title: Honorific,
    pub full_name: String,
    pub dob: Option<NaiveDate>,
    pub nationality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
}

impl PassengerPayload {
    pub fn from_form(data: &PassengerData) -> Self {
        let full_name = if data.last_name.is_empty() {
            data.first_name.clone()
        } else {
            format!("{} {}", data.first_name, data.last_name)
        };

        let mut payload = Self {
            title: Honorific::from_title(&data.title),
            full_name,
            dob: data.dob,
            nationality: data.nationality.clone(),
            passport_number: None,
            issuing_country: None,
            valid_until: None,
        };

        if !data.passport_number.is_empty() {
            payload.passport_number = Some(data.passport_number.clone());
            payload.issuing_country = Some(data.issuing_country.clone());
            payload.valid_until = data.expiry_date;
        }

        payload
    }
}

/// One booking item per flight leg (outbound, optionally inbound).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingItemPayload {
    pub flight_id: i64,
    pub seat_class: SeatClass,
    pub passengers: Vec<PassengerPayload>,
}

/// Root submission object for `POST /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub items: Vec<BookingItemPayload>,
}

/// Map the form entries to the backend request. One item is built per
/// flight leg present; the same transformed passenger list is attached to
/// every leg (same travelers fly both directions). Pure, no I/O.
pub fn build_booking_request(
    passengers: &[PassengerData],
    outbound: &Flight,
    inbound: Option<&Flight>,
    seat_class: SeatClass,
) -> CreateBookingRequest {
    let backend_passengers: Vec<PassengerPayload> =
        passengers.iter().map(PassengerPayload::from_form).collect();

    let mut items = vec![BookingItemPayload {
        flight_id: outbound.id,
        seat_class,
        passengers: backend_passengers.clone(),
    }];

    if let Some(inbound) = inbound {
        items.push(BookingItemPayload {
            flight_id: inbound.id,
            seat_class,
            passengers: backend_passengers,
        });
    }

    CreateBookingRequest { items }
}

/// Per-leg confirmation inside the booking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetail {
    pub booking_code: String,
    pub flight_code: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub total_passengers: u32,
    pub total_price: String,
}

/// Response for a successful `POST /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub order_id: String,
    pub total_amount: String,
    pub status: BookingStatus,
    pub transaction_time: DateTime<Utc>,
    pub payment_url: String,
    pub expiry_date: DateTime<Utc>,
    pub bookings: Vec<BookingDetail>,
}
