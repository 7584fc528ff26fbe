//! Acceso al documento para el modo de visualización

use crate::viewmodels::theme::{DisplayMode, ROOT_DARK_CLASS};

/// Reflejar el modo en la clase del elemento raíz (`<html>`)
pub fn apply_display_mode(mode: DisplayMode) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        log::warn!("⚠️ Documento no disponible, modo {:?} sin aplicar", mode);
        return;
    };

    if let Err(e) = root
        .class_list()
        .toggle_with_force(ROOT_DARK_CLASS, mode.is_dark())
    {
        log::error!("❌ No se pudo cambiar la clase raíz: {:?}", e);
    }
}
