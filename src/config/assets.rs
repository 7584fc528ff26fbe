//! Recursos de Leaflet cargados en tiempo de ejecución

use serde::{Deserialize, Serialize};

/// URLs de la hoja de estilos y el script de Leaflet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafletAssets {
    pub css_url: String,
    pub js_url: String,
}

impl Default for LeafletAssets {
    fn default() -> Self {
        Self {
            css_url: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css".to_string(),
            js_url: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js".to_string(),
        }
    }
}
