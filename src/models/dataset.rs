//! Dataset completo del dashboard

use serde::{Deserialize, Serialize};

use super::company::CompanyInfo;
use super::route::{BusRoute, RouteId};
use super::summary::{Filters, OperationalSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub company: CompanyInfo,
    pub bus_lines: Vec<BusRoute>,
    pub operational_summary: OperationalSummary,
    pub filters: Filters,
}

impl Dataset {
    /// Construir el dataset derivando resumen y filtros de las líneas
    pub fn new(company: CompanyInfo, bus_lines: Vec<BusRoute>) -> Self {
        let operational_summary = OperationalSummary::from_routes(&bus_lines);
        let filters = Filters::from_routes(&bus_lines);
        Self {
            company,
            bus_lines,
            operational_summary,
            filters,
        }
    }

    pub fn route(&self, id: RouteId) -> Option<&BusRoute> {
        self.bus_lines.iter().find(|route| route.id == id)
    }

    pub fn route_by_number(&self, route_number: &str) -> Option<&BusRoute> {
        self.bus_lines
            .iter()
            .find(|route| route.route_number == route_number)
    }

    pub fn contains(&self, id: RouteId) -> bool {
        self.route(id).is_some()
    }

    /// Selección inicial: primera línea activa, si no la primera línea
    pub fn default_selection(&self) -> Option<RouteId> {
        self.bus_lines
            .iter()
            .find(|route| route.is_active())
            .or_else(|| self.bus_lines.first())
            .map(|route| route.id)
    }
}
