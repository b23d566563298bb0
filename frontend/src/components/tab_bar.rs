use shared::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

/// Fixed navigation bar with one button per tab
#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class="tab-bar">
            {for Tab::ALL.into_iter().map(|tab| {
                let variant = if tab == props.active { "default" } else { "ghost" };
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(tab))
                };
                html! {
                    <button
                        type="button"
                        key={tab.tag()}
                        class={classes!("btn", "tab-button", format!("btn-{}", variant))}
                        data-tab={tab.tag()}
                        data-variant={variant}
                        {onclick}
                    >
                        <span class="tab-icon">{tab.icon()}</span>
                        <span class="tab-label">{tab.label()}</span>
                    </button>
                }
            })}
        </nav>
    }
}
