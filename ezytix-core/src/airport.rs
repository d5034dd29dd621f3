use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airline {
    pub id: i64,
    pub iata: String,
    pub name: String,
    pub logo_url: String,
}

/// Reference data fetched from `GET /airports`; never mutated client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub id: i64,
    pub code: String,
    pub city_name: String,
    pub airport_name: String,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_deserialization() {
        let json = r#"
            {
                "id": 1,
                "code": "CGK",
                "city_name": "Jakarta",
                "airport_name": "Soekarno-Hatta Intl Airport",
                "country": "Indonesia"
            }
        "#;
        let airport: Airport = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(airport.code, "CGK");
        assert_eq!(airport.country, "Indonesia");
    }
}
