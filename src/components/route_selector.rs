//! Selector de líneas

use yew::prelude::*;

use crate::data::dataset;
use crate::models::RouteId;
use crate::viewmodels::route_buttons;

#[derive(Properties, PartialEq)]
pub struct RouteSelectorProps {
    pub selected: Option<RouteId>,
    pub on_select: Callback<RouteId>,
}

#[function_component(RouteSelector)]
pub fn route_selector(props: &RouteSelectorProps) -> Html {
    let buttons = route_buttons(&dataset().bus_lines, props.selected);

    html! {
        <div class="flex flex-wrap gap-2 justify-center p-4">
            { for buttons.into_iter().map(|button| {
                let id = button.id;
                let onclick = props.on_select.reform(move |_: MouseEvent| id);
                html! {
                    <button key={id.0} class={button.class} {onclick}>
                        { button.label }
                    </button>
                }
            }) }
        </div>
    }
}
