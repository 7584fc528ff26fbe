//! Coordenadas geográficas

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::validation::validate_coordinates;

/// Par latitud/longitud en grados decimales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_lat_lng"))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

fn validate_lat_lng(point: &LatLng) -> Result<(), ValidationError> {
    validate_coordinates(point.lat, point.lng)
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Formato `[lat, lng]` que espera Leaflet
    pub fn as_pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_pair_keeps_lat_first() {
        let point = LatLng::new(3.158, 101.711);
        assert_eq!(point.as_pair(), [3.158, 101.711]);
    }

    #[test]
    fn test_validate_range() {
        assert!(LatLng::new(3.1, 101.7).validate().is_ok());
        assert!(LatLng::new(91.0, 101.7).validate().is_err());
        assert!(LatLng::new(3.1, -181.0).validate().is_err());
    }
}
