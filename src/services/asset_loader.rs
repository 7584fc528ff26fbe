//! Carga dinámica de Leaflet
//!
//! Inserta la hoja de estilos y el script una sola vez. La guardia
//! devuelta retira ambos elementos al descartarse, y con ella el
//! callback `onload`, lo que cancela la señal pendiente.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::LeafletAssets;
use crate::utils::{AppError, AppResult};

use super::leaflet;
use super::readiness::{readiness, ReadySignal};

/// Resultado de pedir la librería
pub enum LeafletLoad {
    /// `window.L` ya existía (recarga en caliente, otra instancia)
    AlreadyLoaded,
    Pending { signal: ReadySignal, guard: AssetGuard },
}

/// Elementos insertados en el documento mientras el mapa vive
pub struct AssetGuard {
    link: Element,
    script: HtmlElement,
    _onload: Closure<dyn FnMut()>,
}

impl Drop for AssetGuard {
    fn drop(&mut self) {
        self.script.set_onload(None);
        self.link.remove();
        self.script.remove();
        log::debug!("🧹 Recursos de Leaflet retirados del documento");
    }
}

/// Pedir la carga de Leaflet
pub fn load_leaflet(assets: &LeafletAssets) -> AppResult<LeafletLoad> {
    if leaflet::is_loaded() {
        log::info!("✅ Leaflet ya estaba cargado");
        return Ok(LeafletLoad::AlreadyLoaded);
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::LibraryUnavailable("no document".to_string()))?;
    let head = document
        .head()
        .ok_or_else(|| AppError::LibraryUnavailable("no <head>".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| AppError::LibraryUnavailable("no <body>".to_string()))?;

    let link = document
        .create_element("link")
        .map_err(|e| AppError::js("createElement(link)", &e))?;
    link.set_attribute("rel", "stylesheet")
        .and_then(|_| link.set_attribute("href", &assets.css_url))
        .map_err(|e| AppError::js("link attributes", &e))?;
    head.append_child(&link)
        .map_err(|e| AppError::js("append <link>", &e))?;

    let script: HtmlElement = document
        .create_element("script")
        .map_err(|e| AppError::js("createElement(script)", &e))?
        .dyn_into()
        .map_err(|_| AppError::LibraryUnavailable("script is not an HtmlElement".to_string()))?;
    script
        .set_attribute("src", &assets.js_url)
        .map_err(|e| AppError::js("script attributes", &e))?;

    let (notifier, signal) = readiness();
    let onload: Closure<dyn FnMut()> = Closure::once(move || {
        if leaflet::is_loaded() {
            log::info!("✅ Leaflet cargado");
            notifier.notify();
        } else {
            log::error!("❌ Script de Leaflet cargado pero window.L no existe");
        }
    });
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    body.append_child(&script)
        .map_err(|e| AppError::js("append <script>", &e))?;

    log::info!("⏳ Cargando Leaflet desde {}", assets.js_url);

    Ok(LeafletLoad::Pending {
        signal,
        guard: AssetGuard {
            link,
            script,
            _onload: onload,
        },
    })
}
