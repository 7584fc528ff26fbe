//! Modo de visualización (claro / oscuro)

use serde::{Deserialize, Serialize};

/// Clase que se pone en `<html>` en modo oscuro
pub const ROOT_DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    /// Fondo y color de texto del contenedor de la página
    pub fn shell_class(self) -> &'static str {
        match self {
            DisplayMode::Light => "bg-gradient-to-br from-blue-50 to-indigo-100 text-gray-900",
            DisplayMode::Dark => "bg-gradient-to-br from-gray-900 to-gray-800 text-white",
        }
    }

    pub fn toggle_button_class(self) -> &'static str {
        match self {
            DisplayMode::Light => "bg-gray-800 text-white hover:bg-gray-700",
            DisplayMode::Dark => "bg-yellow-400 text-gray-900 hover:bg-yellow-300",
        }
    }

    /// Etiqueta accesible: describe la acción, no el estado
    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayMode::Light => "Switch to dark mode",
            DisplayMode::Dark => "Switch to light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_everything() {
        let mode = DisplayMode::default();
        let back = mode.toggled().toggled();

        assert_eq!(back, mode);
        assert_eq!(back.shell_class(), mode.shell_class());
        assert_eq!(back.toggle_button_class(), mode.toggle_button_class());
        assert_eq!(back.toggle_label(), mode.toggle_label());
        assert_eq!(back.is_dark(), mode.is_dark());
    }

    #[test]
    fn test_dark_mode_values() {
        let dark = DisplayMode::Light.toggled();
        assert!(dark.is_dark());
        assert_eq!(dark.toggle_label(), "Switch to light mode");
        assert!(dark.shell_class().contains("from-gray-900"));
    }
}
