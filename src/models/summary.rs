//! Resumen operativo y filtros
//!
//! Ambos se derivan de la lista de líneas al construir el dataset,
//! nunca se guardan como constantes independientes.

use serde::{Deserialize, Serialize};

use super::route::{BusRoute, RouteStatus};

/// Totales de la flota
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalSummary {
    pub total_buses: u32,
    pub active_buses: u32,
    pub maintenance_buses: u32,
    pub out_of_service_buses: u32,
    pub total_capacity: u32,
    pub current_passengers: u32,
    /// Media redondeada de los porcentajes de ocupación por línea
    pub average_utilization: u32,
}

impl OperationalSummary {
    pub fn from_routes(routes: &[BusRoute]) -> Self {
        let count = |status: RouteStatus| {
            routes.iter().filter(|route| route.status == status).count() as u32
        };

        let utilization_sum: u32 = routes
            .iter()
            .map(|route| route.passengers.utilization_percentage())
            .sum();
        let average_utilization = if routes.is_empty() {
            0
        } else {
            (f64::from(utilization_sum) / routes.len() as f64).round() as u32
        };

        Self {
            total_buses: routes.len() as u32,
            active_buses: count(RouteStatus::Active),
            maintenance_buses: count(RouteStatus::Maintenance),
            out_of_service_buses: count(RouteStatus::OutOfService),
            total_capacity: routes.iter().map(|route| route.passengers.capacity).sum(),
            current_passengers: routes.iter().map(|route| route.passengers.current).sum(),
            average_utilization,
        }
    }
}

/// Valores disponibles para filtrar (la vista no aplica ninguno)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    pub available_statuses: Vec<RouteStatus>,
    pub available_routes: Vec<String>,
}

impl Filters {
    pub fn from_routes(routes: &[BusRoute]) -> Self {
        Self {
            available_statuses: RouteStatus::ALL.to_vec(),
            available_routes: routes.iter().map(|route| route.route_number.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = OperationalSummary::from_routes(&[]);
        assert_eq!(summary.total_buses, 0);
        assert_eq!(summary.average_utilization, 0);
        assert_eq!(summary.total_capacity, 0);
    }
}
