//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del dashboard.
//! Ninguno llega al usuario: se registran con `log` y la vista
//! se queda en su estado anterior.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::RouteId;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Map library unavailable: {0}")]
    LibraryUnavailable(String),

    #[error("Map initialization failed: {0}")]
    MapInit(String),

    #[error("Map layer error: {0}")]
    Layer(String),

    #[error("JavaScript error in {context}: {message}")]
    Js { context: &'static str, message: String },

    #[error("Options serialization error: {0}")]
    Options(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unknown route: {0}")]
    UnknownRoute(RouteId),
}

impl AppError {
    /// Convertir un error lanzado desde JavaScript
    pub fn js(context: &'static str, value: &JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        AppError::Js { context, message }
    }

    /// Indica si el error viene de la inicialización del mapa
    pub fn is_map_init(&self) -> bool {
        matches!(
            self,
            AppError::LibraryUnavailable(_) | AppError::MapInit(_) | AppError::Js { .. }
        )
    }
}

/// Resultado con el error de la aplicación
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::UnknownRoute(RouteId(99));
        assert_eq!(err.to_string(), "Unknown route: 99");

        let err = AppError::MapInit("container not found".to_string());
        assert_eq!(err.to_string(), "Map initialization failed: container not found");
    }

    #[test]
    fn test_is_map_init() {
        assert!(AppError::LibraryUnavailable("L".into()).is_map_init());
        assert!(AppError::MapInit("x".into()).is_map_init());
        assert!(!AppError::Layer("x".into()).is_map_init());
        assert!(!AppError::UnknownRoute(RouteId(1)).is_map_init());
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Options(_)));
    }
}
