//! Tabla de horarios de la línea seleccionada

use yew::prelude::*;

use crate::models::BusRoute;
use crate::viewmodels::schedule::{ARRIVAL_COLUMN, EMPTY_SCHEDULE_MESSAGE, STOP_COLUMN};
use crate::viewmodels::ScheduleView;

const HEADER_CELL_CLASS: &str = "px-6 py-3 bg-gray-50 text-left text-xs font-semibold text-gray-600 uppercase tracking-wider dark:bg-gray-800 dark:text-gray-300";

#[derive(Properties, PartialEq)]
pub struct ScheduleTableProps {
    pub route: Option<BusRoute>,
}

#[function_component(ScheduleTable)]
pub fn schedule_table(props: &ScheduleTableProps) -> Html {
    let rows = match ScheduleView::for_route(props.route.as_ref()) {
        ScheduleView::Empty => {
            return html! {
                <p class="text-center text-gray-500 p-4 dark:text-gray-400">
                    { EMPTY_SCHEDULE_MESSAGE }
                </p>
            };
        }
        ScheduleView::Table(rows) => rows,
    };

    html! {
        <div class="overflow-x-auto shadow-inner rounded-b-xl mx-4 mb-4 border border-gray-200 dark:border-gray-700">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead>
                    <tr>
                        <th class={HEADER_CELL_CLASS}>{ STOP_COLUMN }</th>
                        <th class={HEADER_CELL_CLASS}>{ ARRIVAL_COLUMN }</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200 dark:bg-gray-900 dark:divide-gray-700">
                    { for rows.iter().map(|row| html! {
                        <tr key={row.stop_id} class={row.row_class()}>
                            <td class={classes!("px-6", "py-4", "whitespace-nowrap", "text-sm", "font-medium", row.name_class())}>
                                { &row.name }
                            </td>
                            <td class={classes!("px-6", "py-4", "whitespace-nowrap", "text-sm", row.arrival_class())}>
                                { &row.arrival }
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
