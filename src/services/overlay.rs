//! Plan de capas para una línea
//!
//! Proyección pura de una `BusRoute` a lo que hay que dibujar: la línea
//! de ruta, un marcador por parada y, solo si la línea está activa, el
//! marcador del bus.

use crate::config::MapConfig;
use crate::models::{BusRoute, BusStop, LatLng};

use super::map_surface::{MarkerSpec, PopupSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPlan {
    /// Posición del bus seguida de las paradas en orden
    pub route_line: Vec<LatLng>,
    pub stops: Vec<MarkerSpec>,
    pub vehicle: Option<MarkerSpec>,
    /// Puntos que debe contener la vista tras dibujar
    pub bounds: Vec<LatLng>,
}

impl OverlayPlan {
    pub fn for_route(route: &BusRoute, config: &MapConfig) -> Self {
        let route_line = route.path();

        let stops = route
            .bus_stops
            .iter()
            .map(|stop| MarkerSpec {
                position: stop.position,
                icon: config.stop_icon.clone(),
                popup: PopupSpec {
                    html: stop_popup_html(stop),
                    options: config.popup,
                    open: false,
                },
            })
            .collect();

        let vehicle = route.is_active().then(|| MarkerSpec {
            position: route.current_location.position,
            icon: config.vehicle_icon.clone(),
            popup: PopupSpec {
                html: vehicle_popup_html(route),
                options: config.popup,
                open: true,
            },
        });

        Self {
            bounds: route_line.clone(),
            route_line,
            stops,
            vehicle,
        }
    }
}

/// Contenido del popup de una parada
pub fn stop_popup_html(stop: &BusStop) -> String {
    format!(
        r#"<div class="font-sans font-semibold"><p class="text-base text-gray-800">{}</p><p class="text-xs text-gray-600 mt-1">Arrival: <span class="font-bold text-green-600">{}</span></p></div>"#,
        stop.name, stop.estimated_arrival
    )
}

/// Contenido del popup del bus
pub fn vehicle_popup_html(route: &BusRoute) -> String {
    let next_stop = route.next_stop().map_or("N/A", |stop| stop.name.as_str());
    format!(
        concat!(
            r#"<div class="font-sans font-semibold text-center p-1 min-w-[150px]">"#,
            r#"<p class="text-lg font-extrabold text-blue-700">Bus {}</p>"#,
            r#"<p class="text-xs text-gray-700 mt-1">Status: <span class="font-bold">{}</span></p>"#,
            r#"<p class="text-xs text-gray-700">Load: <span class="font-bold text-blue-500">{} / {} ({}%)</span></p>"#,
            r#"<p class="text-sm text-gray-800 mt-2">Next: <span class="font-extrabold text-orange-500">{}</span></p>"#,
            r#"</div>"#,
        ),
        route.route_number,
        route.status,
        route.passengers.current,
        route.passengers.capacity,
        route.passengers.utilization_percentage(),
        next_stop,
    )
}
