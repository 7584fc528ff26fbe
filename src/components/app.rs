//! Componente raíz
//!
//! Dueño del estado de la página (`DashboardState`). Los hijos reciben
//! datos ya resueltos y callbacks; no guardan estado propio salvo el
//! mapa.

use yew::prelude::*;

use crate::config::AppConfig;
use crate::data::{dataset, COPYRIGHT_YEAR};
use crate::models::RouteId;
use crate::services::document::apply_display_mode;
use crate::viewmodels::{DashboardAction, DashboardState};

use super::footer::Footer;
use super::header::Header;
use super::route_map::RouteMap;
use super::route_selector::RouteSelector;
use super::schedule_table::ScheduleTable;

const SHELL_CLASS: &str =
    "min-h-screen font-sans flex flex-col items-center transition-colors duration-300";
const CARD_CLASS: &str = "bg-white/80 backdrop-blur-sm rounded-2xl shadow-2xl border border-white/20 dark:bg-gray-800/80 dark:border-gray-700/50";
const TITLE_CLASS: &str =
    "text-2xl font-bold text-center py-4 border-b border-gray-200 dark:border-gray-700";

#[function_component(App)]
pub fn app() -> Html {
    let data = dataset();
    let state = use_reducer(|| DashboardState::initial(dataset()));
    let config = use_memo((), |_| AppConfig::default());

    use_effect_with(state.mode, |mode| {
        apply_display_mode(*mode);
        || ()
    });

    let on_select = {
        let state = state.clone();
        Callback::from(move |id: RouteId| state.dispatch(DashboardAction::Select(id)))
    };
    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(DashboardAction::ToggleMode))
    };

    let route = state.selected_route(data).cloned();

    html! {
        <div class={classes!(SHELL_CLASS, state.mode.shell_class())}>
            <Header
                company={data.company.clone()}
                mode={state.mode}
                on_toggle={on_toggle}
            />

            <main class="flex-1 w-full max-w-6xl px-4 pb-8">
                <section class="mb-8">
                    <div class={CARD_CLASS}>
                        <h2 class={TITLE_CLASS}>{ "Select Bus Route" }</h2>
                        <RouteSelector selected={state.selected} on_select={on_select} />
                    </div>
                </section>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <section class="h-[500px] lg:h-auto">
                        <div class={classes!(CARD_CLASS, "h-full", "flex", "flex-col")}>
                            <h2 class={TITLE_CLASS}>{ "Live Route Map" }</h2>
                            <div class="flex-1 p-2 rounded-b-2xl overflow-hidden">
                                <RouteMap route={route.clone()} config={config.clone()} />
                            </div>
                        </div>
                    </section>

                    <section class="h-[500px] lg:h-auto">
                        <div class={classes!(CARD_CLASS, "h-full", "flex", "flex-col")}>
                            <h2 class={TITLE_CLASS}>{ "Bus Schedule" }</h2>
                            <div class="flex-1 overflow-y-auto rounded-b-2xl">
                                <ScheduleTable route={route} />
                            </div>
                        </div>
                    </section>
                </div>
            </main>

            <Footer notice={data.company.copyright_notice(COPYRIGHT_YEAR)} />
        </div>
    }
}
