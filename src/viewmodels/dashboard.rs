//! Estado de la vista principal
//!
//! Un único estado pequeño, propiedad del componente raíz: la línea
//! seleccionada y el modo de visualización. La selección siempre es
//! `None` o el id de una línea existente.

use std::rc::Rc;

use yew::Reducible;

use crate::data::dataset;
use crate::models::{BusRoute, Dataset, RouteId};
use crate::utils::{AppError, AppResult};

use super::theme::DisplayMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Select(RouteId),
    ClearSelection,
    ToggleMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardState {
    pub selected: Option<RouteId>,
    pub mode: DisplayMode,
}

impl DashboardState {
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            selected: dataset.default_selection(),
            mode: DisplayMode::default(),
        }
    }

    pub fn selected_route<'a>(&self, dataset: &'a Dataset) -> Option<&'a BusRoute> {
        self.selected.and_then(|id| dataset.route(id))
    }

    /// Aplicar una acción contra el dataset dado
    pub fn apply(self, action: DashboardAction, dataset: &Dataset) -> Self {
        match action {
            DashboardAction::Select(id) => match known_route(dataset, id) {
                Ok(id) => {
                    log::debug!("🚌 Línea seleccionada: {}", id);
                    Self {
                        selected: Some(id),
                        ..self
                    }
                }
                Err(e) => {
                    log::warn!("⚠️ Selección ignorada: {}", e);
                    self
                }
            },
            DashboardAction::ClearSelection => Self {
                selected: None,
                ..self
            },
            DashboardAction::ToggleMode => Self {
                mode: self.mode.toggled(),
                ..self
            },
        }
    }
}

fn known_route(dataset: &Dataset, id: RouteId) -> AppResult<RouteId> {
    if dataset.contains(id) {
        Ok(id)
    } else {
        Err(AppError::UnknownRoute(id))
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action, dataset());
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
