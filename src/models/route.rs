//! Modelo de BusRoute
//!
//! Este módulo contiene la línea de bus y todos sus registros asociados:
//! ubicación actual, carga de pasajeros, conductor, incidencias, vehículo
//! y métricas de la ruta.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::geo::LatLng;
use super::stop::{BusStop, Eta};
use crate::utils::validation::ROUTE_CODE_RE;

/// Identificador de línea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(pub u32);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Estado operativo de la línea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteStatus {
    Active,
    Maintenance,
    #[serde(rename = "Out of Service")]
    OutOfService,
}

impl RouteStatus {
    pub const ALL: [RouteStatus; 3] = [
        RouteStatus::Active,
        RouteStatus::Maintenance,
        RouteStatus::OutOfService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Active => "Active",
            RouteStatus::Maintenance => "Maintenance",
            RouteStatus::OutOfService => "Out of Service",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RouteStatus::Active)
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Posición actual del bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CurrentLocation {
    #[validate]
    pub position: LatLng,

    #[validate(length(min = 1, max = 200))]
    pub address: String,
}

/// Carga de pasajeros
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_load"))]
pub struct Passengers {
    pub current: u32,
    pub capacity: u32,
}

fn validate_load(passengers: &Passengers) -> Result<(), ValidationError> {
    if passengers.current > passengers.capacity {
        let mut error = ValidationError::new("load_over_capacity");
        error.add_param("current".into(), &passengers.current);
        error.add_param("capacity".into(), &passengers.capacity);
        return Err(error);
    }
    Ok(())
}

impl Passengers {
    /// Porcentaje de ocupación redondeado; 0 si no hay capacidad
    pub fn utilization_percentage(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        (f64::from(self.current) * 100.0 / f64::from(self.capacity)).round() as u32
    }
}

/// Conductor asignado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Driver {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 3, max = 20))]
    pub id: String,

    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentKind {
    Weather,
    Traffic,
    Mechanical,
    Passenger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentStatus {
    Reported,
    Resolved,
    Canceled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncidentPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Incidencia reportada en la línea
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Incident {
    pub id: u32,
    pub kind: IncidentKind,

    #[validate(length(min = 1, max = 200))]
    pub description: String,

    pub reported_by: String,
    pub reported_time: NaiveTime,
    pub status: IncidentStatus,
    pub priority: IncidentPriority,
}

/// Datos del vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VehicleInfo {
    #[validate(length(min = 5, max = 20))]
    pub license_plate: String,

    #[validate(length(min = 2, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2030))]
    pub year: i32,

    #[validate(range(max = 100))]
    pub fuel_level: u8,

    pub last_maintenance: NaiveDate,
}

/// Métricas de la ruta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub total_distance_km: f64,
    pub average_speed_kmh: u32,
    pub estimated_completion: Eta,
    pub frequency_minutes: u32,
}

/// Línea de bus con todos sus datos operativos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BusRoute {
    pub id: RouteId,

    #[validate(length(min = 3, max = 100))]
    pub name: String,

    #[validate(regex = "ROUTE_CODE_RE")]
    pub route_number: String,

    #[validate]
    pub current_location: CurrentLocation,

    pub status: RouteStatus,

    #[validate]
    pub passengers: Passengers,

    #[validate]
    pub driver: Driver,

    #[validate]
    pub bus_stops: Vec<BusStop>,

    #[validate]
    pub incidents: Vec<Incident>,

    #[validate]
    pub vehicle_info: VehicleInfo,

    pub route_info: RouteInfo,
}

impl BusRoute {
    /// Parada marcada como siguiente, si existe
    pub fn next_stop(&self) -> Option<&BusStop> {
        self.bus_stops.iter().find(|stop| stop.is_next_stop)
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Trazado de la ruta: posición del bus seguida de todas las paradas
    pub fn path(&self) -> Vec<LatLng> {
        std::iter::once(self.current_location.position)
            .chain(self.bus_stops.iter().map(|stop| stop.position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization_percentage_rounds() {
        let load = Passengers { current: 32, capacity: 45 };
        assert_eq!(load.utilization_percentage(), 71);

        let load = Passengers { current: 42, capacity: 45 };
        assert_eq!(load.utilization_percentage(), 93);
    }

    #[test]
    fn test_utilization_percentage_zero_capacity() {
        let load = Passengers { current: 0, capacity: 0 };
        assert_eq!(load.utilization_percentage(), 0);
    }

    #[test]
    fn test_load_over_capacity_is_invalid() {
        assert!(Passengers { current: 46, capacity: 45 }.validate().is_err());
        assert!(Passengers { current: 45, capacity: 45 }.validate().is_ok());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(RouteStatus::OutOfService.to_string(), "Out of Service");
        assert_eq!(RouteStatus::ALL.len(), 3);
        assert!(RouteStatus::Active.is_active());
        assert!(!RouteStatus::Maintenance.is_active());
    }
}
