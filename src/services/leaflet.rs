//! Implementación de `MapSurface` sobre Leaflet
//!
//! Los bindings cubren solo la parte de la API de `L` que usa el
//! dashboard. Las opciones se construyen como structs serde y se pasan
//! a JavaScript vía JSON.

use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{FitOptions, MapConfig, PolylineStyle};
use crate::models::LatLng;
use crate::utils::{AppError, AppResult};

use super::map_surface::{MapSurface, MarkerSpec};

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type LeafletMap;

    #[derive(Clone)]
    pub type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = polyline)]
    fn polyline(lat_lngs: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = latLngBounds)]
    fn lat_lng_bounds(lat_lngs: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8);

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &Layer);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(method, js_name = getContainer)]
    fn get_container(this: &LeafletMap) -> web_sys::HtmlElement;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str, options: &JsValue);

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Layer);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    center: [f64; 2],
    zoom: u8,
    zoom_control: bool,
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

/// Convertir un struct serde en un objeto JavaScript
fn to_js<T: Serialize + ?Sized>(value: &T) -> AppResult<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| AppError::js("JSON.parse", &e))
}

fn path_to_js(points: &[LatLng]) -> AppResult<JsValue> {
    let pairs: Vec<[f64; 2]> = points.iter().map(LatLng::as_pair).collect();
    to_js(&pairs)
}

/// Global que expone la librería; los bindings de arriba dependen de él
pub const GLOBAL: &str = "L";

/// Indica si el global de Leaflet ya existe en `window`
pub fn is_loaded() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str(GLOBAL)).ok())
        .is_some_and(|value| !value.is_undefined())
}

pub struct LeafletSurface {
    map: LeafletMap,
    resize_timer: Option<i32>,
}

/// Ejecutar `discard` antes de propagar el error de `result`
fn discard_on_error<T>(result: AppResult<T>, discard: impl FnOnce()) -> AppResult<T> {
    result.map_err(|e| {
        discard();
        e
    })
}

impl LeafletSurface {
    fn add_tiles(map: &LeafletMap, config: &MapConfig) -> AppResult<()> {
        let options = to_js(&TileOptions {
            attribution: &config.tiles.attribution,
        })?;
        let tiles = tile_layer(&config.tiles.url, &options)
            .map_err(|e| AppError::js("L.tileLayer", &e))?;
        tiles.add_to(map);
        Ok(())
    }

    // `invalidateSize` diferido: el contenedor aún no tiene tamaño final
    // cuando Yew termina el primer render.
    fn schedule_resize(map: &LeafletMap, delay_ms: u32) -> Option<i32> {
        let window = web_sys::window()?;
        let map = map.clone();
        let callback = Closure::once_into_js(move || map.invalidate_size());
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms as i32,
            )
            .map_err(|e| log::warn!("⚠️ No se pudo programar invalidateSize: {:?}", e))
            .ok()
    }
}

impl MapSurface for LeafletSurface {
    type Layer = Layer;

    fn mount(config: &MapConfig) -> AppResult<Self> {
        if !is_loaded() {
            return Err(AppError::LibraryUnavailable(
                "window.L is undefined".to_string(),
            ));
        }

        let options = to_js(&MapOptions {
            center: config.default_center.as_pair(),
            zoom: config.default_zoom,
            zoom_control: config.zoom_control,
        })?;
        let map = create_map(&config.container_id, &options).map_err(|e| {
            AppError::MapInit(format!("L.map(#{}): {:?}", config.container_id, e))
        })?;

        // `map` aún no tiene dueño: si algo falla hay que quitarlo a mano
        discard_on_error(Self::add_tiles(&map, config), || map.remove())?;

        let resize_timer = Self::schedule_resize(&map, config.resize_delay_ms);

        if config.grayscale {
            if let Err(e) = map
                .get_container()
                .style()
                .set_property("filter", "grayscale(100%)")
            {
                log::warn!("⚠️ No se pudo aplicar el filtro de grises: {:?}", e);
            }
        }

        Ok(Self { map, resize_timer })
    }

    fn add_polyline(&mut self, path: &[LatLng], style: &PolylineStyle) -> AppResult<Layer> {
        let line = polyline(&path_to_js(path)?, &to_js(style)?)
            .map_err(|e| AppError::js("L.polyline", &e))?;
        line.add_to(&self.map);
        Ok(line)
    }

    fn add_marker(&mut self, spec: &MarkerSpec) -> AppResult<Layer> {
        let icon = div_icon(&to_js(&spec.icon)?).map_err(|e| AppError::js("L.divIcon", &e))?;
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("icon"), &icon)
            .map_err(|e| AppError::js("marker options", &e))?;

        let layer = marker(&to_js(&spec.position.as_pair())?, &options)
            .map_err(|e| AppError::js("L.marker", &e))?;
        layer.add_to(&self.map);
        layer.bind_popup(&spec.popup.html, &to_js(&spec.popup.options)?);
        if spec.popup.open {
            layer.open_popup();
        }
        Ok(layer)
    }

    fn remove_layer(&mut self, layer: Layer) {
        self.map.remove_layer(&layer);
    }

    fn fit_bounds(&mut self, points: &[LatLng], options: &FitOptions) -> AppResult<()> {
        if points.is_empty() {
            return Err(AppError::Layer("no points to fit".to_string()));
        }
        let bounds = lat_lng_bounds(&path_to_js(points)?)
            .map_err(|e| AppError::js("L.latLngBounds", &e))?;
        self.map.fit_bounds(&bounds, &to_js(options)?);
        Ok(())
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) -> AppResult<()> {
        self.map.set_view(&to_js(&center.as_pair())?, zoom);
        Ok(())
    }
}

impl Drop for LeafletSurface {
    fn drop(&mut self) {
        if let (Some(timer), Some(window)) = (self.resize_timer.take(), web_sys::window()) {
            window.clear_timeout_with_handle(timer);
        }
        self.map.remove();
        log::info!("🧹 Mapa Leaflet destruido");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_discard_runs_on_error() {
        let discarded = Cell::new(false);
        let result: AppResult<()> = discard_on_error(
            Err(AppError::Layer("tile layer rejected".to_string())),
            || discarded.set(true),
        );

        assert!(matches!(result, Err(AppError::Layer(_))));
        assert!(discarded.get());
    }

    #[test]
    fn test_discard_skipped_on_success() {
        let discarded = Cell::new(false);
        let result = discard_on_error(Ok(7), || discarded.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!discarded.get());
    }
}
