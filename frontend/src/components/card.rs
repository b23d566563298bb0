use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Titled content card; every tab renders exactly one
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <section class="card mt-4">
            <header class="card-header">
                <h2 class="card-title">{props.title.clone()}</h2>
            </header>
            <div class="card-content">
                {props.children.clone()}
            </div>
        </section>
    }
}
