//! Utilidades de validación
//!
//! Este módulo contiene las funciones helper de validación y la
//! comprobación completa del dataset (reglas entre registros que los
//! derives de `validator` no pueden expresar).

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{BusRoute, Dataset, OperationalSummary};

lazy_static! {
    /// Código de línea: "B" seguido de tres dígitos
    pub static ref ROUTE_CODE_RE: Regex = Regex::new(r"^B\d{3}$").expect("route code regex must compile");
}

/// Validar formato de coordenadas GPS
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&lat) {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &lat);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }

    if !(-180.0..=180.0).contains(&lng) {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &lng);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }

    Ok(())
}

/// Validar la marca de "siguiente parada" de una línea.
/// Las líneas activas llevan exactamente una; el resto como mucho una.
pub fn validate_next_stop(route: &BusRoute) -> Result<(), ValidationError> {
    let flagged = route.bus_stops.iter().filter(|stop| stop.is_next_stop).count();
    let valid = if route.is_active() {
        flagged == 1
    } else {
        flagged <= 1
    };

    if !valid {
        let mut error = ValidationError::new("next_stop");
        error.add_param("route".into(), &route.route_number);
        error.add_param("flagged".into(), &flagged);
        return Err(error);
    }
    Ok(())
}

/// Validar que los ids de parada no se repitan dentro de la línea
pub fn validate_stop_ids(route: &BusRoute) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for stop in &route.bus_stops {
        if !seen.insert(stop.id) {
            let mut error = ValidationError::new("duplicate_stop");
            error.add_param("route".into(), &route.route_number);
            error.add_param("stop_id".into(), &stop.id);
            return Err(error);
        }
    }
    Ok(())
}

/// Validar el dataset completo: cada registro y las reglas entre registros.
/// Los errores de cada registro van bajo `company` y `routes`; los de
/// reglas entre registros, bajo su propia clave. Se informa de todos.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), ValidationErrors> {
    let records = ValidationErrors::merge(Ok(()), "company", dataset.company.validate());
    let records = ValidationErrors::merge_all(
        records,
        "routes",
        dataset.bus_lines.iter().map(|route| route.validate()).collect(),
    );

    let mut errors = records.err().unwrap_or_else(ValidationErrors::new);
    let mut route_ids = HashSet::new();
    let mut route_codes = HashSet::new();

    for route in &dataset.bus_lines {
        if !route_ids.insert(route.id) {
            let mut error = ValidationError::new("duplicate_route_id");
            error.add_param("id".into(), &route.id.0);
            errors.add("bus_lines", error);
        }

        if !route_codes.insert(route.route_number.as_str()) {
            let mut error = ValidationError::new("duplicate_route_number");
            error.add_param("route".into(), &route.route_number);
            errors.add("bus_lines", error);
        }

        if route.bus_stops.is_empty() {
            let mut error = ValidationError::new("no_stops");
            error.add_param("route".into(), &route.route_number);
            errors.add("bus_stops", error);
        }

        if let Err(error) = validate_next_stop(route) {
            errors.add("bus_stops", error);
        }

        if let Err(error) = validate_stop_ids(route) {
            errors.add("bus_stops", error);
        }
    }

    if dataset.operational_summary != OperationalSummary::from_routes(&dataset.bus_lines) {
        errors.add(
            "operational_summary",
            ValidationError::new("summary_out_of_sync"),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset;
    use crate::models::RouteStatus;

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(3.14, 101.69).is_ok());
        assert!(validate_coordinates(91.0, 101.69).is_err());
        assert!(validate_coordinates(3.14, -181.0).is_err());
    }

    #[test]
    fn test_route_code_pattern() {
        assert!(ROUTE_CODE_RE.is_match("B101"));
        assert!(!ROUTE_CODE_RE.is_match("B1010"));
        assert!(!ROUTE_CODE_RE.is_match("101"));
        assert!(!ROUTE_CODE_RE.is_match("b101"));
    }

    #[test]
    fn test_embedded_dataset_is_valid() {
        assert!(validate_dataset(dataset()).is_ok());
    }

    #[test]
    fn test_active_route_without_next_stop_is_invalid() {
        let mut route = dataset().route_by_number("B101").unwrap().clone();
        route.bus_stops[0].is_next_stop = false;
        assert!(validate_next_stop(&route).is_err());

        route.status = RouteStatus::Maintenance;
        assert!(validate_next_stop(&route).is_ok());
    }

    #[test]
    fn test_two_next_stops_is_invalid() {
        let mut route = dataset().route_by_number("B410").unwrap().clone();
        route.bus_stops[0].is_next_stop = true;
        route.bus_stops[1].is_next_stop = true;
        assert!(validate_next_stop(&route).is_err());
    }

    #[test]
    fn test_duplicate_route_is_rejected() {
        let mut data = dataset().clone();
        let duplicate = data.bus_lines[0].clone();
        data.bus_lines.push(duplicate);
        data.operational_summary = OperationalSummary::from_routes(&data.bus_lines);

        let errors = validate_dataset(&data).unwrap_err();
        assert!(errors.field_errors().contains_key("bus_lines"));
    }

    #[test]
    fn test_stale_summary_is_rejected() {
        let mut data = dataset().clone();
        data.bus_lines.pop();

        let errors = validate_dataset(&data).unwrap_err();
        assert!(errors.field_errors().contains_key("operational_summary"));
    }

    #[test]
    fn test_invalid_route_code_is_rejected() {
        let mut data = dataset().clone();
        data.bus_lines[0].route_number = "X1".to_string();

        let errors = validate_dataset(&data).unwrap_err();
        assert!(errors.errors().contains_key("routes"));
    }

    #[test]
    fn test_record_errors_do_not_hide_cross_record_errors() {
        let mut lines = dataset().bus_lines.clone();
        let mut copy = lines[0].clone();
        copy.route_number = "X1".to_string();
        lines.push(copy);
        let data = Dataset::new(dataset().company.clone(), lines);

        let errors = validate_dataset(&data).unwrap_err();
        let reported = errors.errors();
        assert!(reported.contains_key("routes"));
        assert!(reported.contains_key("bus_lines"));

        let field_errors = errors.field_errors();
        let duplicates = field_errors["bus_lines"];
        assert!(duplicates
            .iter()
            .any(|error| error.code == "duplicate_route_id"));
    }

    #[test]
    fn test_invalid_company_is_reported_with_routes() {
        let mut data = dataset().clone();
        data.company.name = "A".to_string();
        data.bus_lines[1].route_number = "205".to_string();

        let errors = validate_dataset(&data).unwrap_err();
        assert!(errors.errors().contains_key("company"));
        assert!(errors.errors().contains_key("routes"));
    }
}
