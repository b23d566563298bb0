use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::tab_bar::TabBar;
use components::tab_content::TabContent;
use hooks::use_shell_state::{use_shell_state, UseShellStateResult};
use services::config;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let UseShellStateResult { state, actions } = use_shell_state();

    use_effect_with((), |_| {
        Logger::info_with_component("App", "Shell mounted");
        || Logger::debug_with_component("App", "Shell unmounted")
    });

    html! {
        <div class="app-shell">
            <div class="container">
                <header class="app-header">
                    <h1>{config::APP_TITLE}</h1>
                </header>

                <TabBar active={state.active_tab} on_select={actions.select_tab.clone()} />

                <TabContent state={state} actions={actions} />
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
