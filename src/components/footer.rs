use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub notice: String,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="w-full py-6 px-4 text-center border-t border-gray-300/30 dark:border-gray-600/30">
            <p class="text-sm opacity-75">{ &props.notice }</p>
        </footer>
    }
}
