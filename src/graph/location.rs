use std::fmt;
use std::str::FromStr;

use crate::graph::error::GraphError;

/// The closed set of admissible location codes, one per federative unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    AC,
    AL,
    AM,
    AP,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MG,
    MS,
    MT,
    PA,
    PB,
    PE,
    PI,
    PR,
    RJ,
    RN,
    RO,
    RR,
    RS,
    SC,
    SE,
    SP,
    TO,
}

impl Location {
    pub const ALL: [Location; 27] = [
        Location::AC,
        Location::AL,
        Location::AM,
        Location::AP,
        Location::BA,
        Location::CE,
        Location::DF,
        Location::ES,
        Location::GO,
        Location::MA,
        Location::MG,
        Location::MS,
        Location::MT,
        Location::PA,
        Location::PB,
        Location::PE,
        Location::PI,
        Location::PR,
        Location::RJ,
        Location::RN,
        Location::RO,
        Location::RR,
        Location::RS,
        Location::SC,
        Location::SE,
        Location::SP,
        Location::TO,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Location::AC => "AC",
            Location::AL => "AL",
            Location::AM => "AM",
            Location::AP => "AP",
            Location::BA => "BA",
            Location::CE => "CE",
            Location::DF => "DF",
            Location::ES => "ES",
            Location::GO => "GO",
            Location::MA => "MA",
            Location::MG => "MG",
            Location::MS => "MS",
            Location::MT => "MT",
            Location::PA => "PA",
            Location::PB => "PB",
            Location::PE => "PE",
            Location::PI => "PI",
            Location::PR => "PR",
            Location::RJ => "RJ",
            Location::RN => "RN",
            Location::RO => "RO",
            Location::RR => "RR",
            Location::RS => "RS",
            Location::SC => "SC",
            Location::SE => "SE",
            Location::SP => "SP",
            Location::TO => "TO",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Location {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .iter()
            .find(|l| l.code() == s)
            .copied()
            .ok_or_else(|| GraphError::UnknownLocation(s.to_string()))
    }
}

/// Latitude/longitude payload carried for display; never part of identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(self) -> f64 {
        self.latitude
    }

    pub fn longitude(self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for location in Location::ALL {
            assert_eq!(Ok(location), location.code().parse());
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(
            Err(GraphError::UnknownLocation("XX".to_string())),
            "XX".parse::<Location>()
        );
    }
}
