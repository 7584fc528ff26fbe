//! Servicios del dashboard
//!
//! Todo lo que toca el navegador vive aquí: carga de Leaflet, el mapa y
//! la clase raíz del documento. La lógica de qué dibujar está en
//! `overlay` y `map_adapter`, que no dependen del DOM.

pub mod asset_loader;
pub mod document;
pub mod leaflet;
pub mod map_adapter;
pub mod map_lifecycle;
pub mod map_surface;
pub mod overlay;
pub mod readiness;

pub use asset_loader::{load_leaflet, AssetGuard, LeafletLoad};
pub use leaflet::LeafletSurface;
pub use map_adapter::{MapAdapter, OverlayCounts};
pub use map_lifecycle::MapLifecycle;
pub use map_surface::{MapSurface, MarkerSpec, PopupSpec};
pub use overlay::OverlayPlan;
pub use readiness::{readiness, ReadyNotifier, ReadySignal};
