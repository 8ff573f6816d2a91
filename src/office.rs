use std::fmt;

use serde::Deserialize;

/// One entry of the upstream `offices` array. Any other fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawOffice {
    pub location_city: String,
    pub location_latitude: Coordinate,
    pub location_longitude: Coordinate,
}

/// Upstream sends coordinates as decimal strings, but numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    pub fn parse(&self) -> Option<f64> {
        let x = match self {
            Self::Number(x) => *x,
            Self::Text(x) => x.trim().parse().ok()?,
        };

        x.is_finite().then_some(x)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Text(x) => write!(f, "{x:?}"),
        }
    }
}
