use shared::Tab;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::card::Card;

#[derive(Properties, PartialEq)]
pub struct HomePanelProps {
    pub note: AttrValue,
    /// Present only while the note is non-empty
    pub preview: Option<AttrValue>,
    pub on_note_input: Callback<String>,
}

#[function_component(HomePanel)]
pub fn home_panel(props: &HomePanelProps) -> Html {
    let oninput = {
        let on_note_input = props.on_note_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_note_input.emit(input.value());
        })
    };

    html! {
        <Card title={Tab::Home.card_title()}>
            <div class="space-y-4">
                <div class="form-group">
                    <label for="homeInput">{"Enter your home note"}</label>
                    <input
                        type="text"
                        id="homeInput"
                        value={props.note.clone()}
                        {oninput}
                        placeholder="Type something for your home section..."
                    />
                </div>
                {if let Some(preview) = props.preview.clone() {
                    html! {
                        <div class="preview-block">
                            <h3 class="preview-heading">{"Your Note:"}</h3>
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

    fn props(note: &str) -> HomePanelProps {
        HomePanelProps {
            note: AttrValue::from(note.to_string()),
            preview: (!note.is_empty()).then(|| AttrValue::from(note.to_string())),
            on_note_input: Callback::noop(),
        }
    }

    #[wasm_bindgen_test]
    async fn test_preview_shows_note() {
        let markup = render_markup::<HomePanel, _>(|| props("hello")).await;
        assert!(markup.contains("Home Dashboard"));
        assert!(markup.contains("Your Note:"));
        assert!(markup.contains("<p>hello</p>"));
    }

    #[wasm_bindgen_test]
    async fn test_empty_note_has_no_preview() {
        let markup = render_markup::<HomePanel, _>(|| props("")).await;
        assert!(markup.contains("Enter your home note"));
        assert!(!markup.contains("Your Note:"));
        assert!(!markup.contains("preview-block"));
    }

    #[wasm_bindgen_test]
    async fn test_input_event_emits_note() {
        let (on_note_input, seen) = recorder::<String>();
        let root = mount::<HomePanel>(HomePanelProps {
            on_note_input,
            ..props("")
        })
        .await;

        let input: HtmlInputElement = query(&root, "#homeInput");
        input.set_value("hello");
        fire(&input, "input");

        assert_eq!(*seen.borrow(), vec!["hello".to_string()]);
    }
}
