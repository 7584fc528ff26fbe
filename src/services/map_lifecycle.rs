//! Ciclo de vida del mapa
//!
//! El mapa se monta una sola vez, cuando la librería está lista. Si el
//! montaje falla se registra el error y no se vuelve a intentar: la vista
//! sigue mostrando el indicador de carga.

use crate::config::MapConfig;
use crate::models::BusRoute;

use super::map_adapter::MapAdapter;
use super::map_surface::MapSurface;

enum Phase<S: MapSurface> {
    /// La librería todavía no está disponible
    Waiting,
    Mounted(MapAdapter<S>),
    Failed,
}

pub struct MapLifecycle<S: MapSurface> {
    config: MapConfig,
    phase: Phase<S>,
}

impl<S: MapSurface> MapLifecycle<S> {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            phase: Phase::Waiting,
        }
    }

    /// La librería está lista: montar si hace falta y mostrar la línea.
    /// Devuelve si el mapa está montado.
    pub fn on_ready(&mut self, route: Option<&BusRoute>) -> bool {
        if matches!(self.phase, Phase::Waiting) {
            self.phase = match MapAdapter::mount(self.config.clone()) {
                Ok(map) => Phase::Mounted(map),
                Err(e) => {
                    if e.is_map_init() {
                        log::error!("❌ Error al inicializar el mapa: {}", e);
                    } else {
                        log::error!("❌ Opciones del mapa inválidas: {}", e);
                    }
                    Phase::Failed
                }
            };
        }
        self.on_route_change(route)
    }

    /// Cambio de selección: solo se dibuja sobre un mapa ya montado
    pub fn on_route_change(&mut self, route: Option<&BusRoute>) -> bool {
        let Phase::Mounted(map) = &mut self.phase else {
            return false;
        };
        if let Err(e) = map.show(route) {
            log::error!("❌ Error al dibujar la ruta: {}", e);
        }
        true
    }

    /// Destruir el mapa (desmontaje del componente)
    pub fn release(&mut self) {
        self.phase = Phase::Waiting;
    }
}
