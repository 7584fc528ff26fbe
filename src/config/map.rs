//! Configuración del mapa
//!
//! Los structs marcados con `rename_all = "camelCase"` se serializan tal
//! cual como objetos de opciones de Leaflet.

use serde::{Deserialize, Serialize};

use crate::models::LatLng;

/// Capa de teselas base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayerConfig {
    pub url: String,
    pub attribution: String,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
        }
    }
}

/// Opciones de `fitBounds`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitOptions {
    pub padding: [u32; 2],
    pub max_zoom: u8,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: [50, 50],
            max_zoom: 14,
        }
    }
}

/// Estilo de la línea de ruta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    pub dash_array: String,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            color: "#E04E4E".to_string(),
            weight: 4,
            opacity: 0.7,
            dash_array: "10, 5".to_string(),
        }
    }
}

/// Icono HTML para `L.divIcon`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIconConfig {
    pub html: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
    pub class_name: String,
}

impl DivIconConfig {
    /// Marcador del bus: círculo azul con pulso
    pub fn vehicle() -> Self {
        Self {
            html: concat!(
                r#"<div class="p-1 rounded-full bg-blue-600 shadow-xl border-2 border-white text-lg animate-pulse" "#,
                r#"style="width: 32px; height: 32px; display: flex; align-items: center; justify-content: center;">"#,
                r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="2.5" stroke="white" class="w-5 h-5">"#,
                r#"<path stroke-linecap="round" stroke-linejoin="round" d="M8.25 18l.842-.714.493-.417m1.564 1.25c.097.35.347.618.665.753.385.16.822.148 1.196-.039a1.063 1.063 0 00.587-.665m3.714-3.714L16.5 13.5M19.5 8.25V5.25A2.25 2.25 0 0017.25 3h-7.5a2.25 2.25 0 00-2.25 2.25v12a2.25 2.25 0 002.25 2.25h8.25a2.25 2.25 0 002.25-2.25V12.75" />"#,
                r#"</svg></div>"#,
            )
            .to_string(),
            icon_size: [32, 32],
            icon_anchor: [16, 16],
            class_name: String::new(),
        }
    }

    /// Marcador de parada: diana morada
    pub fn stop() -> Self {
        Self {
            html: concat!(
                r#"<div class="w-5 h-5 rounded-full bg-purple-600 flex items-center justify-center border-2 border-white shadow-lg">"#,
                r#"<div class="w-2 h-2 rounded-full bg-white border border-purple-800"></div>"#,
                r#"</div>"#,
            )
            .to_string(),
            icon_size: [20, 20],
            icon_anchor: [10, 10],
            class_name: String::new(),
        }
    }
}

/// Opciones de los popups: quedan abiertos hasta que se redibuja
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
    pub close_button: bool,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            close_button: false,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// Configuración del mapa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Id del elemento contenedor
    pub container_id: String,
    pub default_center: LatLng,
    pub default_zoom: u8,
    pub zoom_control: bool,
    pub tiles: TileLayerConfig,
    pub fit: FitOptions,
    pub route_line: PolylineStyle,
    pub vehicle_icon: DivIconConfig,
    pub stop_icon: DivIconConfig,
    pub popup: PopupOptions,
    /// Retraso antes de `invalidateSize`, para que el contenedor ya esté medido
    pub resize_delay_ms: u32,
    pub grayscale: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "leaflet-map".to_string(),
            // Centro de Kuala Lumpur
            default_center: LatLng::new(3.140853, 101.693207),
            default_zoom: 12,
            zoom_control: false,
            tiles: TileLayerConfig::default(),
            fit: FitOptions::default(),
            route_line: PolylineStyle::default(),
            vehicle_icon: DivIconConfig::vehicle(),
            stop_icon: DivIconConfig::stop(),
            popup: PopupOptions::default(),
            resize_delay_ms: 100,
            grayscale: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fit_options_serialize_as_leaflet_options() {
        let value = serde_json::to_value(FitOptions::default()).unwrap();
        assert_eq!(value, json!({ "padding": [50, 50], "maxZoom": 14 }));
    }

    #[test]
    fn test_popup_options_serialize_as_leaflet_options() {
        let value = serde_json::to_value(PopupOptions::default()).unwrap();
        assert_eq!(
            value,
            json!({ "closeButton": false, "autoClose": false, "closeOnClick": false })
        );
    }

    #[test]
    fn test_polyline_style_serialize_as_leaflet_options() {
        let value = serde_json::to_value(PolylineStyle::default()).unwrap();
        assert_eq!(value["dashArray"], "10, 5");
        assert_eq!(value["color"], "#E04E4E");
    }

    #[test]
    fn test_default_view_is_kuala_lumpur() {
        let config = MapConfig::default();
        assert_eq!(config.default_center.as_pair(), [3.140853, 101.693207]);
        assert_eq!(config.default_zoom, 12);
        assert!(!config.zoom_control);
    }
}
