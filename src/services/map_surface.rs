//! Superficie de dibujo del mapa
//!
//! `MapSurface` es la API que el adaptador necesita de la librería de
//! mapas externa. En el navegador la implementa `LeafletSurface`; en los
//! tests, una superficie que solo registra las llamadas.

use crate::config::{DivIconConfig, FitOptions, MapConfig, PolylineStyle, PopupOptions};
use crate::models::LatLng;
use crate::utils::AppResult;

/// Popup asociado a un marcador
#[derive(Debug, Clone, PartialEq)]
pub struct PopupSpec {
    pub html: String,
    pub options: PopupOptions,
    /// Abrir el popup en cuanto se añade el marcador
    pub open: bool,
}

/// Marcador a dibujar
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLng,
    pub icon: DivIconConfig,
    pub popup: PopupSpec,
}

pub trait MapSurface: Sized {
    /// Handle de una capa añadida al mapa
    type Layer;

    /// Crear el mapa sobre el contenedor configurado
    fn mount(config: &MapConfig) -> AppResult<Self>;

    fn add_polyline(&mut self, path: &[LatLng], style: &PolylineStyle) -> AppResult<Self::Layer>;

    fn add_marker(&mut self, marker: &MarkerSpec) -> AppResult<Self::Layer>;

    fn remove_layer(&mut self, layer: Self::Layer);

    /// Ajustar la vista para que contenga todos los puntos
    fn fit_bounds(&mut self, points: &[LatLng], options: &FitOptions) -> AppResult<()>;

    fn set_view(&mut self, center: LatLng, zoom: u8) -> AppResult<()>;
}
