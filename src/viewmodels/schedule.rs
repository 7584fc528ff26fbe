//! Tabla de horarios
//!
//! Proyección directa de las paradas de la línea seleccionada: sin
//! ordenar ni filtrar. Solo se resalta la siguiente parada.

use crate::models::{BusRoute, StopId};

pub const EMPTY_SCHEDULE_MESSAGE: &str = "Select a bus route to view the schedule.";
pub const STOP_COLUMN: &str = "Bus Stop";
pub const ARRIVAL_COLUMN: &str = "Next Time of Arrival";

const NEXT_ROW_CLASS: &str = "bg-blue-100 transition-colors duration-300 dark:bg-blue-900";
const ROW_CLASS: &str = "hover:bg-gray-50 dark:hover:bg-gray-800";
const NEXT_CELL_CLASS: &str = "text-blue-900 font-bold dark:text-blue-100";
const NAME_CELL_CLASS: &str = "text-gray-900 dark:text-gray-100";
const ARRIVAL_CELL_CLASS: &str = "text-gray-500 dark:text-gray-400";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub stop_id: StopId,
    pub name: String,
    pub arrival: String,
    pub is_next: bool,
}

impl ScheduleRow {
    pub fn row_class(&self) -> &'static str {
        if self.is_next {
            NEXT_ROW_CLASS
        } else {
            ROW_CLASS
        }
    }

    pub fn name_class(&self) -> &'static str {
        if self.is_next {
            NEXT_CELL_CLASS
        } else {
            NAME_CELL_CLASS
        }
    }

    pub fn arrival_class(&self) -> &'static str {
        if self.is_next {
            NEXT_CELL_CLASS
        } else {
            ARRIVAL_CELL_CLASS
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleView {
    Empty,
    Table(Vec<ScheduleRow>),
}

impl ScheduleView {
    pub fn for_route(route: Option<&BusRoute>) -> Self {
        match route {
            None => ScheduleView::Empty,
            Some(route) => ScheduleView::Table(
                route
                    .bus_stops
                    .iter()
                    .map(|stop| ScheduleRow {
                        stop_id: stop.id,
                        name: stop.name.clone(),
                        arrival: stop.estimated_arrival.to_string(),
                        is_next: stop.is_next_stop,
                    })
                    .collect(),
            ),
        }
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        match self {
            ScheduleView::Empty => &[],
            ScheduleView::Table(rows) => rows,
        }
    }

    pub fn highlighted(&self) -> Vec<&ScheduleRow> {
        self.rows().iter().filter(|row| row.is_next).collect()
    }
}
