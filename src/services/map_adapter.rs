//! Adaptador del mapa
//!
//! Dueño único del mapa y de los handles de sus capas. Cada cambio de
//! selección borra todas las capas anteriores antes de dibujar las
//! nuevas, así nunca conviven dos rutas en pantalla.

use crate::config::MapConfig;
use crate::models::BusRoute;
use crate::utils::AppResult;

use super::map_surface::MapSurface;
use super::overlay::OverlayPlan;

/// Capas dibujadas para la línea seleccionada
struct Overlays<L> {
    route_line: Option<L>,
    stops: Vec<L>,
    vehicle: Option<L>,
}

impl<L> Default for Overlays<L> {
    fn default() -> Self {
        Self {
            route_line: None,
            stops: Vec::new(),
            vehicle: None,
        }
    }
}

impl<L> Overlays<L> {
    fn drain(&mut self) -> Vec<L> {
        let mut layers = Vec::with_capacity(self.stops.len() + 2);
        layers.extend(self.route_line.take());
        layers.append(&mut self.stops);
        layers.extend(self.vehicle.take());
        layers
    }
}

/// Recuento de capas visibles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayCounts {
    pub route_lines: usize,
    pub stops: usize,
    pub vehicles: usize,
}

impl OverlayCounts {
    pub fn total(&self) -> usize {
        self.route_lines + self.stops + self.vehicles
    }
}

pub struct MapAdapter<S: MapSurface> {
    surface: S,
    overlays: Overlays<S::Layer>,
    config: MapConfig,
}

impl<S: MapSurface> MapAdapter<S> {
    /// Montar el mapa sobre su contenedor
    pub fn mount(config: MapConfig) -> AppResult<Self> {
        let surface = S::mount(&config)?;
        log::info!("🗺️ Mapa montado en #{}", config.container_id);
        Ok(Self::with_surface(surface, config))
    }

    pub fn with_surface(surface: S, config: MapConfig) -> Self {
        Self {
            surface,
            overlays: Overlays::default(),
            config,
        }
    }

    /// Mostrar una línea, o la vista por defecto si no hay selección
    pub fn show(&mut self, route: Option<&BusRoute>) -> AppResult<()> {
        self.clear();

        match route {
            Some(route) => {
                let plan = OverlayPlan::for_route(route, &self.config);
                self.draw(&plan)?;
                self.surface.fit_bounds(&plan.bounds, &self.config.fit)?;
                log::debug!(
                    "📍 Ruta {} dibujada: {} paradas, bus visible: {}",
                    route.route_number,
                    plan.stops.len(),
                    plan.vehicle.is_some()
                );
            }
            None => {
                self.surface
                    .set_view(self.config.default_center, self.config.default_zoom)?;
                log::debug!("📍 Sin selección, vista por defecto");
            }
        }

        Ok(())
    }

    /// Quitar todas las capas dibujadas
    pub fn clear(&mut self) {
        for layer in self.overlays.drain() {
            self.surface.remove_layer(layer);
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn overlay_counts(&self) -> OverlayCounts {
        OverlayCounts {
            route_lines: usize::from(self.overlays.route_line.is_some()),
            stops: self.overlays.stops.len(),
            vehicles: usize::from(self.overlays.vehicle.is_some()),
        }
    }

    // Cada capa se registra en cuanto existe: si falla a mitad, el
    // siguiente `clear` retira lo que sí se dibujó.
    fn draw(&mut self, plan: &OverlayPlan) -> AppResult<()> {
        let line = self
            .surface
            .add_polyline(&plan.route_line, &self.config.route_line)?;
        self.overlays.route_line = Some(line);

        for stop in &plan.stops {
            let marker = self.surface.add_marker(stop)?;
            self.overlays.stops.push(marker);
        }

        if let Some(vehicle) = &plan.vehicle {
            let marker = self.surface.add_marker(vehicle)?;
            self.overlays.vehicle = Some(marker);
        }

        Ok(())
    }
}
