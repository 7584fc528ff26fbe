//! Modelos del sistema
//!
//! Este módulo contiene todos los registros del dashboard. Son inmutables:
//! se construyen una vez en `crate::data` y nunca se modifican.

pub mod company;
pub mod dataset;
pub mod geo;
pub mod route;
pub mod stop;
pub mod summary;

pub use company::CompanyInfo;
pub use dataset::Dataset;
pub use geo::LatLng;
pub use route::{
    BusRoute, CurrentLocation, Driver, Incident, IncidentKind, IncidentPriority, IncidentStatus,
    Passengers, RouteId, RouteInfo, RouteStatus, VehicleInfo,
};
pub use stop::{BusStop, Eta, StopId};
pub use summary::{Filters, OperationalSummary};
