use amana_dashboard::data::{dataset, COPYRIGHT_YEAR};
use amana_dashboard::models::{Dataset, Eta, RouteStatus};
use amana_dashboard::utils::validation::validate_dataset;

#[test]
fn test_embedded_dataset_passes_validation() {
    assert!(validate_dataset(dataset()).is_ok());
}

#[test]
fn test_published_summary_figures() {
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
fn test_route_codes_in_order() {
    let codes: Vec<&str> = dataset()
        .bus_lines
        .iter()
        .map(|route| route.route_number.as_str())
        .collect();
    assert_eq!(codes, ["B101", "B205", "B350", "B410", "B520"]);
    assert_eq!(dataset().filters.available_routes, codes);
}

#[test]
fn test_maintenance_route_has_no_schedule() {
    let route = dataset().route_by_number("B410").unwrap();
    assert_eq!(route.status, RouteStatus::Maintenance);
    assert_eq!(route.passengers.current, 0);
    assert!(route.next_stop().is_none());
    assert!(route
        .bus_stops
        .iter()
        .all(|stop| stop.estimated_arrival == Eta::Unavailable));
}

#[test]
fn test_active_routes_have_one_next_stop() {
    for route in dataset().bus_lines.iter().filter(|route| route.is_active()) {
        let flagged = route.bus_stops.iter().filter(|stop| stop.is_next_stop).count();
        assert_eq!(flagged, 1, "route {}", route.route_number);
    }
}

#[test]
fn test_dataset_survives_json() {
    let json = serde_json::to_value(dataset()).unwrap();
    assert_eq!(json["bus_lines"][3]["status"], "Maintenance");

    let parsed: Dataset = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.operational_summary, dataset().operational_summary);
    assert_eq!(parsed.filters, dataset().filters);
    for (parsed, original) in parsed.bus_lines.iter().zip(&dataset().bus_lines) {
        assert_eq!(parsed.route_number, original.route_number);
        assert_eq!(parsed.status, original.status);
        assert_eq!(parsed.driver, original.driver);
        assert_eq!(parsed.incidents, original.incidents);
    }
}

#[test]
fn test_footer_notice() {
    assert_eq!(
        dataset().company.copyright_notice(COPYRIGHT_YEAR),
        "© 2025 Amana Transportation. All rights reserved."
    );
}
