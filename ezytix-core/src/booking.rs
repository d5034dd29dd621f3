use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking lifecycle status as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Paid,
    Cancelled,
    Failed,
}

/// Denormalized flight details attached to a booking summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub flight_code: String,
    pub airline_name: String,
    pub airline_logo: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub duration_minutes: i32,
}

/// One booking as shown in the history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSummary {
    pub booking_code: String,
    pub status: BookingStatus,
    pub total_amount: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
    pub flight: FlightSnapshot,
}

/// History page buckets: awaiting payment, upcoming e-tickets, and the rest.
#[derive(Debug, Default)]
pub struct HistoryBuckets {
    pub pending: Vec<BookingSummary>,
    pub active: Vec<BookingSummary>,
    pub history: Vec<BookingSummary>,
}

impl HistoryBuckets {
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.active.is_empty() && self.history.is_empty()
    }
}

/// Split bookings into history buckets:
/// - pending: awaiting payment;
/// - active: paid with a departure still in the future;
/// - history: paid flights already departed, plus cancelled and failed.
///
/// Every booking lands in exactly one bucket.
pub fn partition_history(bookings: Vec<BookingSummary>, now: DateTime<Utc>) -> HistoryBuckets {
    let mut buckets = HistoryBuckets::default();
    for booking in bookings {
        match booking.status {
            BookingStatus::Pending => buckets.pending.push(booking),
            BookingStatus::Paid if booking.flight.departure_time > now => {
                buckets.active.push(booking)
            }
            BookingStatus::Paid | BookingStatus::Cancelled | BookingStatus::Failed => {
                buckets.history.push(booking)
            }
        }
    }
    buckets
}
