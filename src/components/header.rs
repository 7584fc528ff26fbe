use yew::prelude::*;

use crate::models::CompanyInfo;
use crate::viewmodels::DisplayMode;

const SUN_PATH: &str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";
const MOON_PATH: &str =
    "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z";

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub company: CompanyInfo,
    pub mode: DisplayMode,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    // En modo oscuro se ofrece el sol (volver a claro) y viceversa
    let icon = if props.mode.is_dark() { SUN_PATH } else { MOON_PATH };

    html! {
        <header class="w-full py-6 px-4 text-center">
            <div class="flex justify-between items-center max-w-6xl mx-auto">
                <div class="flex-1"></div>
                <div class="flex-1 text-center">
                    <h1 class="text-4xl font-extrabold tracking-tight">{ &props.company.name }</h1>
                    <p class="text-lg mt-2 opacity-90">{ &props.company.description }</p>
                </div>
                <div class="flex-1 flex justify-end">
                    <button
                        onclick={props.on_toggle.clone()}
                        class={classes!(
                            "p-3", "rounded-full", "transition-all", "duration-300", "shadow-lg",
                            props.mode.toggle_button_class()
                        )}
                        aria-label={props.mode.toggle_label()}
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d={icon}
                            />
                        </svg>
                    </button>
                </div>
            </div>
        </header>
    }
}
