//! ViewModels
//!
//! Estado y lógica de la interfaz, sin dependencias del DOM. Los
//! componentes solo pintan lo que devuelven estas funciones.

pub mod dashboard;
pub mod route_selector;
pub mod schedule;
pub mod theme;

pub use dashboard::{DashboardAction, DashboardState};
pub use route_selector::{route_buttons, RouteButton};
pub use schedule::{ScheduleRow, ScheduleView};
pub use theme::DisplayMode;
