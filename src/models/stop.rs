//! Modelo de BusStop
//!
//! Paradas de una línea y su hora estimada de llegada.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::geo::LatLng;

/// Identificador de parada, único dentro de su línea
pub type StopId = u32;

/// Hora estimada: una hora de reloj o "N/A" cuando el bus no circula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eta {
    At(NaiveTime),
    Unavailable,
}

impl Eta {
    /// Construir desde hora y minuto; fuera de rango queda como `Unavailable`
    pub fn at(hour: u32, minute: u32) -> Self {
        NaiveTime::from_hms_opt(hour, minute, 0).map_or(Eta::Unavailable, Eta::At)
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eta::At(time) => write!(f, "{}", time.format("%H:%M")),
            Eta::Unavailable => f.write_str("N/A"),
        }
    }
}

/// Parada de bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BusStop {
    pub id: StopId,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate]
    pub position: LatLng,

    pub estimated_arrival: Eta,
    pub is_next_stop: bool,
}
