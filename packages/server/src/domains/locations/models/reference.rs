//! Fixed reference enumerations: US states and location types.
//!
//! Client forms submit symbolic encodings (a composite `"MN-24"` state code,
//! a numeric location-type id). Both resolve here, at the boundary, against
//! the canonical tables; malformed input fails with `ValidationError` instead
//! of surfacing somewhere downstream. The same tables are seeded into the
//! `states` / `location_types` database tables by the migrations.

use crate::common::ApiError;

/// One row of the fixed state enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsState {
    pub id: i32,
    pub abbreviation: &'static str,
    pub name: &'static str,
}

/// Canonical state table, alphabetical by name. Ids match the seeded
/// `states` table and never change.
pub const STATES: [UsState; 51] = [
    UsState { id: 1, abbreviation: "AL", name: "Alabama" },
    UsState { id: 2, abbreviation: "AK", name: "Alaska" },
    UsState { id: 3, abbreviation: "AZ", name: "Arizona" },
    UsState { id: 4, abbreviation: "AR", name: "Arkansas" },
    UsState { id: 5, abbreviation: "CA", name: "California" },
    UsState { id: 6, abbreviation: "CO", name: "Colorado" },
    UsState { id: 7, abbreviation: "CT", name: "Connecticut" },
    UsState { id: 8, abbreviation: "DE", name: "Delaware" },
    UsState { id: 9, abbreviation: "DC", name: "District of Columbia" },
    UsState { id: 10, abbreviation: "FL", name: "Florida" },
    UsState { id: 11, abbreviation: "GA", name: "Georgia" },
    UsState { id: 12, abbreviation: "HI", name: "Hawaii" },
    UsState { id: 13, abbreviation: "ID", name: "Idaho" },
    UsState { id: 14, abbreviation: "IL", name: "Illinois" },
    UsState { id: 15, abbreviation: "IN", name: "Indiana" },
    UsState { id: 16, abbreviation: "IA", name: "Iowa" },
    UsState { id: 17, abbreviation: "KS", name: "Kansas" },
    UsState { id: 18, abbreviation: "KY", name: "Kentucky" },
    UsState { id: 19, abbreviation: "LA", name: "Louisiana" },
    UsState { id: 20, abbreviation: "ME", name: "Maine" },
    UsState { id: 21, abbreviation: "MD", name: "Maryland" },
    UsState { id: 22, abbreviation: "MA", name: "Massachusetts" },
    UsState { id: 23, abbreviation: "MI", name: "Michigan" },
    UsState { id: 24, abbreviation: "MN", name: "Minnesota" },
    UsState { id: 25, abbreviation: "MS", name: "Mississippi" },
    UsState { id: 26, abbreviation: "MO", name: "Missouri" },
    UsState { id: 27, abbreviation: "MT", name: "Montana" },
    UsState { id: 28, abbreviation: "NE", name: "Nebraska" },
    UsState { id: 29, abbreviation: "NV", name: "Nevada" },
    UsState { id: 30, abbreviation: "NH", name: "New Hampshire" },
    UsState { id: 31, abbreviation: "NJ", name: "New Jersey" },
    UsState { id: 32, abbreviation: "NM", name: "New Mexico" },
    UsState { id: 33, abbreviation: "NY", name: "New York" },
    UsState { id: 34, abbreviation: "NC", name: "North Carolina" },
    UsState { id: 35, abbreviation: "ND", name: "North Dakota" },
    UsState { id: 36, abbreviation: "OH", name: "Ohio" },
    UsState { id: 37, abbreviation: "OK", name: "Oklahoma" },
    UsState { id: 38, abbreviation: "OR", name: "Oregon" },
    UsState { id: 39, abbreviation: "PA", name: "Pennsylvania" },
    UsState { id: 40, abbreviation: "RI", name: "Rhode Island" },
    UsState { id: 41, abbreviation: "SC", name: "South Carolina" },
    UsState { id: 42, abbreviation: "SD", name: "South Dakota" },
    UsState { id: 43, abbreviation: "TN", name: "Tennessee" },
    UsState { id: 44, abbreviation: "TX", name: "Texas" },
    UsState { id: 45, abbreviation: "UT", name: "Utah" },
    UsState { id: 46, abbreviation: "VT", name: "Vermont" },
    UsState { id: 47, abbreviation: "VA", name: "Virginia" },
    UsState { id: 48, abbreviation: "WA", name: "Washington" },
    UsState { id: 49, abbreviation: "WV", name: "West Virginia" },
    UsState { id: 50, abbreviation: "WI", name: "Wisconsin" },
    UsState { id: 51, abbreviation: "WY", name: "Wyoming" },
];

pub fn state_by_abbreviation(abbreviation: &str) -> Option<&'static UsState> {
    STATES
        .iter()
        .find(|state| state.abbreviation.eq_ignore_ascii_case(abbreviation))
}

pub fn state_by_id(id: i32) -> Option<&'static UsState> {
    STATES.iter().find(|state| state.id == id)
}

/// Resolve the composite state code submitted by the client form
/// (e.g. `"MN-24"`) to the canonical state id.
///
/// The code must split into a known abbreviation and a numeric id that
/// agrees with the canonical table; anything else is a `ValidationError`.
pub fn resolve_state_code(code: &str) -> Result<i32, ApiError> {
    let (abbreviation, id_part) = code
        .split_once('-')
        .ok_or_else(|| ApiError::validation(format!("malformed state code: {:?}", code)))?;

    let state = state_by_abbreviation(abbreviation.trim())
        .ok_or_else(|| ApiError::validation(format!("unknown state: {:?}", abbreviation)))?;

    let id: i32 = id_part
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("malformed state code: {:?}", code)))?;

    if id != state.id {
        return Err(ApiError::validation(format!(
            "state code {:?} does not match state {}",
            code, state.abbreviation
        )));
    }

    Ok(state.id)
}

// ============================================================================
// Location types
// ============================================================================

/// Fixed location-type enumeration. Ids match the seeded `location_types`
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationType {
    Home = 1,
    Office = 2,
    Clinic = 3,
    Telehealth = 4,
}

impl LocationType {
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Home),
            2 => Some(Self::Office),
            3 => Some(Self::Clinic),
            4 => Some(Self::Telehealth),
            _ => None,
        }
    }

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Office => "Office",
            Self::Clinic => "Clinic",
            Self::Telehealth => "Telehealth",
        }
    }
}

/// Validate a client-submitted location-type id against the enumeration.
pub fn resolve_location_type_id(id: i32) -> Result<i32, ApiError> {
    LocationType::from_id(id)
        .map(LocationType::id)
        .ok_or_else(|| ApiError::validation(format!("unknown location type id: {}", id)))
}
