use chrono::{Duration, Utc};
use ezytix_core::airport::{Airline, Airport};
use ezytix_core::flight::{Flight, FlightClass, SeatClass};

pub(crate) fn airport(id: i64, code: &str, city: &str, country: &str) -> Airport {
    Airport {
        id,
        code: code.to_string(),
        city_name: city.to_string(),
        airport_name: format!("{} Intl Airport", city),
        country: country.to_string(),
    }
}

pub(crate) fn flight_between(
    id: i64,
    origin_country: &str,
    destination_country: &str,
    price: &str,
) -> Flight {
    let departure = Utc::now() + Duration::days(30);
    Flight {
        id,
        flight_code: "GA-404".to_string(),
        airline: Airline {
            id: 1,
            iata: "GA".to_string(),
            name: "Garuda Indonesia".to_string(),
            logo_url: String::new(),
        },
        origin: airport(1, "CGK", "Jakarta", origin_country),
        destination: airport(3, "DPS", "Denpasar", destination_country),
        departure_time: departure,
        arrival_time: departure + Duration::minutes(170),
        total_duration_minutes: 170,
        duration_formatted: "2j 50m".to_string(),
        transit_count: 0,
        transit_info: "Langsung".to_string(),
        flight_legs: Vec::new(),
        flight_classes: vec![FlightClass {
            seat_class: SeatClass::Economy,
            price: price.to_string(),
            total_seats: 50,
        }],
    }
}

pub(crate) fn flight(id: i64, price: &str) -> Flight {
    flight_between(id, "Indonesia", "Indonesia", price)
}
