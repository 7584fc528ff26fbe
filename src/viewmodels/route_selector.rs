//! Botones del selector de líneas

use crate::models::{BusRoute, RouteId, RouteStatus};

const BASE_CLASS: &str =
    "px-4 py-2 text-sm font-medium rounded-lg transition-all duration-200 border-2 shadow-md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteButton {
    pub id: RouteId,
    pub label: String,
    pub class: String,
    pub selected: bool,
}

/// Un botón por línea, en el orden del dataset
pub fn route_buttons(routes: &[BusRoute], selected: Option<RouteId>) -> Vec<RouteButton> {
    routes
        .iter()
        .map(|route| {
            let is_selected = selected == Some(route.id);
            RouteButton {
                id: route.id,
                label: button_label(route),
                class: format!("{} {}", BASE_CLASS, palette(route.status, is_selected)),
                selected: is_selected,
            }
        })
        .collect()
}

fn button_label(route: &BusRoute) -> String {
    let status = if route.is_active() { "Active" } else { "Maint." };
    format!("{} ({})", route.route_number, status)
}

fn palette(status: RouteStatus, selected: bool) -> &'static str {
    match (status, selected) {
        (RouteStatus::Active, true) => "bg-blue-600 text-white border-blue-700 shadow-xl hover:bg-blue-700 dark:bg-blue-700 dark:border-blue-800 dark:hover:bg-blue-800",
        (RouteStatus::Active, false) => "bg-blue-100 text-blue-700 border-blue-300 hover:bg-blue-200 dark:bg-blue-900 dark:text-blue-300 dark:border-blue-700 dark:hover:bg-blue-800",
        (RouteStatus::Maintenance, true) => "bg-orange-600 text-white border-orange-700 shadow-xl hover:bg-orange-700 dark:bg-orange-700 dark:border-orange-800 dark:hover:bg-orange-800",
        (RouteStatus::Maintenance, false) => "bg-orange-100 text-orange-700 border-orange-300 hover:bg-orange-200 dark:bg-orange-900 dark:text-orange-300 dark:border-orange-700 dark:hover:bg-orange-800",
        (RouteStatus::OutOfService, true) => "bg-red-600 text-white border-red-700 shadow-xl hover:bg-red-700 dark:bg-red-700 dark:border-red-800 dark:hover:bg-red-800",
        (RouteStatus::OutOfService, false) => "bg-red-100 text-red-700 border-red-300 hover:bg-red-200 dark:bg-red-900 dark:text-red-300 dark:border-red-700 dark:hover:bg-red-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset;

    #[test]
    fn test_one_button_per_route_in_order() {
        let buttons = route_buttons(&dataset().bus_lines, None);
        let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            ["B101 (Active)", "B205 (Active)", "B350 (Active)", "B410 (Maint.)", "B520 (Active)"]
        );
        assert!(buttons.iter().all(|b| !b.selected));
    }

    #[test]
    fn test_only_selected_button_is_marked() {
        let buttons = route_buttons(&dataset().bus_lines, Some(RouteId(4)));
        let selected: Vec<RouteId> = buttons.iter().filter(|b| b.selected).map(|b| b.id).collect();
        assert_eq!(selected, [RouteId(4)]);
        assert!(buttons[3].class.contains("bg-orange-600"));
        assert!(buttons[0].class.contains("bg-blue-100"));
    }

    #[test]
    fn test_out_of_service_palette() {
        let mut route = dataset().bus_lines[0].clone();
        route.status = RouteStatus::OutOfService;
        let buttons = route_buttons(std::slice::from_ref(&route), Some(route.id));
        assert!(buttons[0].class.contains("bg-red-600"));
        assert_eq!(buttons[0].label, "B101 (Maint.)");
    }
}
