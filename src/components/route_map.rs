//! Mapa de la línea seleccionada
//!
//! El componente solo carga Leaflet y reenvía la selección a
//! `MapLifecycle`, que decide cuándo montar y qué dibujar.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::models::BusRoute;
use crate::services::{load_leaflet, LeafletLoad, LeafletSurface, MapLifecycle};

#[derive(Properties, PartialEq)]
pub struct RouteMapProps {
    pub route: Option<BusRoute>,
    pub config: Rc<AppConfig>,
}

#[function_component(RouteMap)]
pub fn route_map(props: &RouteMapProps) -> Html {
    let library_ready = use_state(|| false);
    let mounted = use_state_eq(|| false);
    let lifecycle = {
        let map_config = props.config.map.clone();
        use_mut_ref(move || MapLifecycle::<LeafletSurface>::new(map_config))
    };

    {
        let library_ready = library_ready.clone();
        let lifecycle = lifecycle.clone();
        let assets = props.config.assets.clone();
        use_effect_with((), move |_| {
            let guard = match load_leaflet(&assets) {
                Ok(LeafletLoad::AlreadyLoaded) => {
                    library_ready.set(true);
                    None
                }
                Ok(LeafletLoad::Pending { signal, guard }) => {
                    spawn_local(async move {
                        if signal.wait().await {
                            library_ready.set(true);
                        }
                    });
                    Some(guard)
                }
                Err(e) => {
                    log::error!("❌ No se pudo cargar Leaflet: {}", e);
                    None
                }
            };

            move || {
                // El mapa antes que los recursos de la librería
                lifecycle.borrow_mut().release();
                drop(guard);
            }
        });
    }

    {
        let mounted = mounted.clone();
        let route = props.route.clone();
        let route_id = props.route.as_ref().map(|route| route.id);
        use_effect_with((route_id, *library_ready), move |deps| {
            let (_, ready) = *deps;
            let mut lifecycle = lifecycle.borrow_mut();
            let is_mounted = if ready {
                lifecycle.on_ready(route.as_ref())
            } else {
                lifecycle.on_route_change(route.as_ref())
            };
            mounted.set(is_mounted);
            || ()
        });
    }

    let container_id = props.config.map.container_id.clone();

    html! {
        <div id={container_id} class="w-full h-full" style="width: 100%; height: 100%;">
            if !*mounted {
                <div class="absolute inset-0 z-10 flex items-center justify-center bg-gray-50/70 backdrop-blur-sm rounded-b-xl">
                    <p class="text-gray-700 font-medium text-lg animate-pulse">
                        { "Loading Map Resources..." }
                    </p>
                </div>
            }
        </div>
    }
}
