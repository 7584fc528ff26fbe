//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y la validación del dataset.

pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};
