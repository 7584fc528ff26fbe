//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del mapa y de los recursos
//! externos de Leaflet. No se lee de variables de entorno: todos los
//! valores tienen un `Default` fijo.

pub mod assets;
pub mod map;

pub use assets::LeafletAssets;
pub use map::{DivIconConfig, FitOptions, MapConfig, PolylineStyle, PopupOptions, TileLayerConfig};

use serde::{Deserialize, Serialize};

/// Configuración completa del dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub map: MapConfig,
    pub assets: LeafletAssets,
}
