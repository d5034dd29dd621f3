use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::airport::{Airline, Airport};
use crate::{CoreError, CoreResult};

/// Fare category, selected once per search and applied to all legs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeatClass {
    #[default]
    Economy,
    Business,
    FirstClass,
}

impl SeatClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatClass::Economy => "economy",
            SeatClass::Business => "business",
            SeatClass::FirstClass => "first_class",
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeatClass {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "economy" => Ok(SeatClass::Economy),
            "business" => Ok(SeatClass::Business),
            "first_class" => Ok(SeatClass::FirstClass),
            other => Err(CoreError::UnknownSeatClass(other.to_string())),
        }
    }
}

/// Per-class fare for a flight. Prices arrive as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightClass {
    pub seat_class: SeatClass,
    pub price: String,
    pub total_seats: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightLeg {
    pub id: i64,
    pub leg_order: i32,
    pub airline: Airline,
    pub origin: Airport,
    pub destination: Airport,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub flight_number: String,
    pub transit_notes: String,
    pub duration_minutes: i32,
    pub duration_formatted: String,
}

/// One bookable flight as returned by `GET /flights` and `GET /flights/{id}`.
/// Read-only reference data; never mutated client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: i64,
    pub flight_code: String,
    pub airline: Airline,
    pub origin: Airport,
    pub destination: Airport,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub total_duration_minutes: i32,
    pub duration_formatted: String,
    pub transit_count: i32,
    pub transit_info: String,
    pub flight_legs: Vec<FlightLeg>,
    pub flight_classes: Vec<FlightClass>,
}

impl Flight {
    /// Per-seat price of the first listed class, parsed from the backend's
    /// decimal string. Missing or unparseable prices count as zero.
    pub fn lead_price(&self) -> f64 {
        self.flight_classes
            .first()
            .and_then(|c| c.price.parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

/// Query parameters for `GET /flights`. Every field is optional; only the
/// fields that are set end up in the query string.
#[derive(Debug, Clone, Default)]
pub struct FlightSearchQuery {
    pub origin: Option<i64>,
    pub destination: Option<i64>,
    pub departure_date: Option<NaiveDate>,
    pub passengers: Option<u32>,
    pub seat_class: Option<SeatClass>,
}

impl FlightSearchQuery {
    /// Render the query as URL pairs, with the date as `YYYY-MM-DD`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(origin) = self.origin {
            pairs.push(("origin", origin.to_string()));
        }
        if let Some(destination) = self.destination {
            pairs.push(("destination", destination.to_string()));
        }
        if let Some(date) = self.departure_date {
            pairs.push(("departure_date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(passengers) = self.passengers {
            pairs.push(("passengers", passengers.to_string()));
        }
        if let Some(seat_class) = self.seat_class {
            pairs.push(("seat_class", seat_class.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_class_round_trip() {
        assert_eq!("first_class".parse::<SeatClass>().unwrap(), SeatClass::FirstClass);
        assert_eq!(SeatClass::Business.to_string(), "business");
        assert!("premium".parse::<SeatClass>().is_err());
    }

    #[test]
    fn test_lead_price_parses_decimal_string() {
        let json = r#"{"seat_class": "economy", "price": "1500000", "total_seats": 50}"#;
        let class: FlightClass = serde_json::from_str(json).unwrap();
        assert_eq!(class.price.parse::<f64>().unwrap(), 1_500_000.0);
    }

    #[test]
    fn test_search_query_pairs() {
        let query = FlightSearchQuery {
            origin: Some(1),
            destination: Some(3),
            departure_date: NaiveDate::from_ymd_opt(2025, 12, 25),
            passengers: Some(2),
            seat_class: Some(SeatClass::Economy),
        };
        let pairs = query.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("origin", "1".to_string()),
                ("destination", "3".to_string()),
                ("departure_date", "2025-12-25".to_string()),
                ("passengers", "2".to_string()),
                ("seat_class", "economy".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_query_skips_unset_fields() {
        let query = FlightSearchQuery::default();
        assert!(query.to_query_pairs().is_empty());
    }
}
