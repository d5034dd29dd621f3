use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-passenger form entry. Created empty when a passenger slot is
/// rendered, mutated as the traveler types, discarded once the booking
/// flow completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerData {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub dob: Option<NaiveDate>,
    pub passport_number: String,
    pub issuing_country: String,
    pub expiry_date: Option<NaiveDate>,
}

impl Default for PassengerData {
    fn default() -> Self {
        Self {
            title: "Mr".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            nationality: ezytix_core::HOME_COUNTRY.to_string(),
            dob: None,
            passport_number: String::new(),
            issuing_country: String::new(),
            expiry_date: None,
        }
    }
}

/// Pure validity rule for one passenger. Invalid data is never an error,
/// the form just reports `false` and stays interactive.
///
/// A passenger is valid iff first name, date of birth and nationality are
/// filled in, the last name is filled in unless the single-name flag is
/// set, and for international bookings all three passport fields are
/// filled in.
pub fn is_passenger_valid(data: &PassengerData, single_name: bool, international: bool) -> bool {
    let mut valid =
        !data.first_name.is_empty() && data.dob.is_some() && !data.nationality.is_empty();

    if !single_name && data.last_name.is_empty() {
        valid = false;
    }

    if international {
        let passport_ok = !data.passport_number.is_empty()
            && !data.issuing_country.is_empty()
            && data.expiry_date.is_some();
        if !passport_ok {
            valid = false;
        }
    }

    valid
}

/// Blank the last name when the traveler has a single legal name.
pub fn cleaned(mut data: PassengerData, single_name: bool) -> PassengerData {
    if single_name {
        data.last_name.clear();
    }
    data
}

/// One passenger slot on the booking page: the cleaned form data, the
/// single-name flag, and the validity computed at the last update.
#[derive(Debug, Clone, Default)]
pub struct PassengerSlot {
    pub data: PassengerData,
    pub single_name: bool,
    pub valid: bool,
}

impl PassengerSlot {
    /// Replace the slot contents and recompute validity. Validation is
    /// invoked explicitly here after each mutation rather than through
    /// any reactive recomputation.
    pub fn update(&mut self, data: PassengerData, single_name: bool, international: bool) {
        let data = cleaned(data, single_name);
        self.valid = is_passenger_valid(&data, single_name, international);
        self.data = data;
        self.single_name = single_name;
    }
}
