use shared::Tab;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::card::Card;

#[derive(Properties, PartialEq)]
pub struct ProjectPanelProps {
    pub name: AttrValue,
    /// "Creating project: ..." line, present only for a non-empty name
    pub preview: Option<AttrValue>,
    pub on_name_input: Callback<String>,
}

#[function_component(ProjectPanel)]
pub fn project_panel(props: &ProjectPanelProps) -> Html {
    let oninput = {
        let on_name_input = props.on_name_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_name_input.emit(input.value());
        })
    };

    html! {
        <Card title={Tab::Project.card_title()}>
            <div class="space-y-4">
                <div class="form-group">
                    <label for="projectInput">{"Project Name"}</label>
                    <input
                        type="text"
                        id="projectInput"
                        value={props.name.clone()}
                        {oninput}
                        placeholder="Enter project name..."
                    />
                </div>
                {if let Some(preview) = props.preview.clone() {
                    html! {
                        <div class="preview-block">
                            <h3 class="preview-heading">{"Project Preview:"}</h3>
                            <p>{preview}</p>
                        </div>
                    }
                } else { html! {} }}
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{fire, mount, query, recorder, render_markup};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_creation_preview() {
        let markup = render_markup::<ProjectPanel, _>(|| ProjectPanelProps {
            name: AttrValue::from("MyProj"),
            preview: Some(AttrValue::from("Creating project: MyProj")),
            on_name_input: Callback::noop(),
        })
        .await;

        assert!(markup.contains("Project Management"));
        assert!(markup.contains("Project Preview:"));
        assert!(markup.contains("Creating project: MyProj"));
    }

    #[wasm_bindgen_test]
    async fn test_no_preview_without_name() {
        let markup = render_markup::<ProjectPanel, _>(|| ProjectPanelProps {
            name: AttrValue::from(""),
            preview: None,
            on_name_input: Callback::noop(),
        })
        .await;

        assert!(markup.contains("Enter project name..."));
        assert!(!markup.contains("Project Preview:"));
    }

    #[wasm_bindgen_test]
    async fn test_input_event_emits_name() {
        let (on_name_input, seen) = recorder::<String>();
        let root = mount::<ProjectPanel>(ProjectPanelProps {
            name: AttrValue::from(""),
            preview: None,
            on_name_input,
        })
        .await;

        let input: HtmlInputElement = query(&root, "#projectInput");
        input.set_value("MyProj");
        fire(&input, "input");

        assert_eq!(*seen.borrow(), vec!["MyProj".to_string()]);
    }
}
