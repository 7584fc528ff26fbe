//! Components
//!
//! Vistas de Yew. Sin lógica propia: pintan lo que devuelven los
//! viewmodels y reenvían los eventos al componente raíz.

pub mod app;
pub mod footer;
pub mod header;
pub mod route_map;
pub mod route_selector;
pub mod schedule_table;

pub use app::App;
