use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::utils::coordinates::{parse_coordinate, validate_coordinates};

/// One entry of the station registry. Coordinates stay as the strings they are
/// published with; they are copied verbatim into every reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StationConfig {
    #[validate(length(min = 1))]
    pub name: String,

    pub latitude: String,

    pub longitude: String,

    #[validate(length(min = 1))]
    pub url: String,
}

impl StationConfig {
    pub fn new(name: &str, latitude: &str, longitude: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            url: url.to_string(),
        }
    }

    /// Parsed (latitude, longitude) in decimal degrees
    pub fn coordinates(&self) -> Result<(f64, f64)> {
        let latitude = parse_coordinate(&self.latitude)?;
        let longitude = parse_coordinate(&self.longitude)?;
        validate_coordinates(latitude, longitude)?;
        Ok((latitude, longitude))
    }

    /// Field validation plus coordinate checks
    pub fn check(&self) -> Result<()> {
        self.validate()?;
        self.coordinates()?;
        Ok(())
    }
}
