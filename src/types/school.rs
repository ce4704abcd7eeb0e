use serde::{Deserialize, Serialize};

use crate::db::models::NewSchool;
use crate::error::LocatorError;

pub const SCHOOL_ADDED: &str = "School added successfully!";

/// Raw `GET /listSchools` query, before numeric validation.
#[derive(Debug, Default, Deserialize)]
pub struct CoordinateQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl CoordinateQuery {
    /// Both coordinates as numbers, or `InvalidCoordinates`.
    pub fn resolve(&self) -> Result<(f64, f64), LocatorError> {
        let latitude = self.latitude.as_deref().and_then(parse_number);
        let longitude = self.longitude.as_deref().and_then(parse_number);
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Ok((lat, lon)),
            _ => Err(LocatorError::InvalidCoordinates),
        }
    }
}

/// A coordinate as it may arrive in a body: a JSON number or any string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NumberOrText::Number(n) => Some(*n).filter(|n| n.is_finite()),
            NumberOrText::Text(s) => parse_number(s),
        }
    }
}

/// `POST /addSchool` body, accepted as JSON or form fields.
#[derive(Debug, Default, Deserialize)]
pub struct AddSchoolRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<NumberOrText>,
    pub longitude: Option<NumberOrText>,
}

impl AddSchoolRequest {
    /// Validate presence and numeric-ness; values are otherwise kept as sent.
    pub fn validate(self) -> Result<NewSchool, LocatorError> {
        let name = self.name.filter(|s| !s.is_empty());
        let address = self.address.filter(|s| !s.is_empty());
        let latitude = self.latitude.as_ref().and_then(NumberOrText::as_number);
        let longitude = self.longitude.as_ref().and_then(NumberOrText::as_number);

        match (name, address, latitude, longitude) {
            (Some(name), Some(address), Some(latitude), Some(longitude)) => Ok(NewSchool {
                name,
                address,
                latitude,
                longitude,
            }),
            _ => Err(LocatorError::InvalidSchool),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddSchoolResponse {
    pub message: &'static str,
    #[serde(rename = "schoolId")]
    pub school_id: i64,
}

impl AddSchoolResponse {
    pub fn added(school_id: i64) -> Self {
        Self {
            message: SCHOOL_ADDED,
            school_id,
        }
    }
}

/// Surrounding whitespace is ignored; empty, NaN and infinite values are not numbers.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
