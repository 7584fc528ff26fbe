//! Datos estáticos
//!
//! El dataset se construye una sola vez por proceso y nunca se modifica.

mod amana;

use lazy_static::lazy_static;

use crate::models::Dataset;

/// Año que aparece en el pie de página
pub const COPYRIGHT_YEAR: u16 = 2025;

lazy_static! {
    pub static ref DATASET: Dataset = amana::build();
}

/// Referencia estática al dataset
pub fn dataset() -> &'static Dataset {
    &DATASET
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Eta, IncidentStatus, RouteId, RouteStatus};

    #[test]
    fn test_dataset_has_five_routes_in_order() {
        let codes: Vec<&str> = dataset()
            .bus_lines
            .iter()
            .map(|route| route.route_number.as_str())
            .collect();
        assert_eq!(codes, ["B101", "B205", "B350", "B410", "B520"]);
    }

    #[test]
    fn test_derived_summary_matches_published_figures() {
        let summary = &dataset().operational_summary;
        assert_eq!(summary.total_buses, 5);
        assert_eq!(summary.active_buses, 4);
        assert_eq!(summary.maintenance_buses, 1);
        assert_eq!(summary.out_of_service_buses, 0);
        assert_eq!(summary.total_capacity, 215);
        assert_eq!(summary.current_passengers, 117);
        assert_eq!(summary.average_utilization, 53);
    }

    #[test]
    fn test_per_route_utilization_matches_published_figures() {
        let utilization: Vec<u32> = dataset()
            .bus_lines
            .iter()
            .map(|route| route.passengers.utilization_percentage())
            .collect();
        assert_eq!(utilization, [71, 70, 30, 0, 93]);
    }

    #[test]
    fn test_filters_are_derived() {
        let filters = &dataset().filters;
        assert_eq!(filters.available_statuses, RouteStatus::ALL.to_vec());
        assert_eq!(filters.available_routes, ["B101", "B205", "B350", "B410", "B520"]);
    }

    #[test]
    fn test_maintenance_route_has_no_arrivals() {
        let route = dataset().route_by_number("B410").unwrap();
        assert_eq!(route.status, RouteStatus::Maintenance);
        assert!(route
            .bus_stops
            .iter()
            .all(|stop| stop.estimated_arrival == Eta::Unavailable));
        assert!(route.next_stop().is_none());
        assert_eq!(
            route
                .incidents
                .iter()
                .filter(|incident| incident.status == IncidentStatus::Reported)
                .count(),
            1
        );
    }

    #[test]
    fn test_default_selection_is_first_active_route() {
        assert_eq!(dataset().default_selection(), Some(RouteId(1)));
    }
}
