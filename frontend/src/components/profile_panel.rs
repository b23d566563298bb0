use shared::{Profile, ProfileField, Tab};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::card::Card;
use crate::services::avatar::Avatar;
use crate::services::config;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ProfilePanelProps {
    pub profile: Profile<Avatar>,
    pub on_change: Callback<ProfileField<Avatar>>,
}

#[function_component(ProfilePanel)]
pub fn profile_panel(props: &ProfilePanelProps) -> Html {
    // Name and email share one handler keyed by the input's name attribute
    let on_text_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match ProfileField::from_control(&input.name(), input.value()) {
                Ok(field) => on_change.emit(field),
                Err(err) => Logger::warn_with_component("ProfilePanel", &err.to_string()),
            }
        })
    };

    // An empty selection keeps the current avatar
    let on_avatar_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(avatar) = Avatar::from_input(&input) {
                on_change.emit(ProfileField::Avatar(avatar));
            }
        })
    };

    html! {
        <Card title={Tab::Profile.card_title()}>
            <div class="profile-layout">
                <div class="avatar-frame">
                    {if let Some(avatar) = &props.profile.avatar {
                        html! {
                            <img class="avatar-image" src={avatar.url().to_string()} alt="Profile" />
                        }
                    } else {
                        html! { <div class="avatar-placeholder"></div> }
                    }}
                    <label for="avatarUpload" class="avatar-change">{"Change"}</label>
                    <input
                        type="file"
                        id="avatarUpload"
                        name="avatar"
                        accept={config::AVATAR_ACCEPT}
                        class="hidden"
                        onchange={on_avatar_change}
                    />
                </div>
                <div class="profile-fields">
                    <div class="form-group">
                        <label for="name">{"Full Name"}</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            value={props.profile.name.clone()}
                            oninput={on_text_input.clone()}
                            placeholder="Enter your name"
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            value={props.profile.email.clone()}
                            oninput={on_text_input}
                            placeholder="Enter your email"
                        />
                    </div>
                </div>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{fire, mount, query, recorder, render_markup};
    use gloo::file::File;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_placeholder_without_avatar() {
        let markup = render_markup::<ProfilePanel, _>(|| ProfilePanelProps {
            profile: Profile::default(),
            on_change: Callback::noop(),
        })
        .await;

        assert!(markup.contains("Profile Settings"));
        assert!(markup.contains("avatar-placeholder"));
        assert!(!markup.contains("avatar-image"));
        assert!(markup.contains(r#"accept="image/*""#));
        assert!(markup.contains(r#"type="email""#));
    }

    #[wasm_bindgen_test]
    async fn test_image_replaces_placeholder() {
        let markup = render_markup::<ProfilePanel, _>(|| ProfilePanelProps {
            profile: Profile::default()
                .merge(ProfileField::Avatar(Avatar::new(File::new("me.png", "bytes")))),
            on_change: Callback::noop(),
        })
        .await;

        assert!(markup.contains("avatar-image"));
        assert!(markup.contains(r#"src="blob:"#));
        assert!(!markup.contains("avatar-placeholder"));
    }

    #[wasm_bindgen_test]
    async fn test_inputs_route_by_name() {
        let (on_change, seen) = recorder::<ProfileField<Avatar>>();
        let root = mount::<ProfilePanel>(ProfilePanelProps {
            profile: Profile::default(),
            on_change,
        })
        .await;

        let name: HtmlInputElement = query(&root, "#name");
        name.set_value("Ada");
        fire(&name, "input");

        let email: HtmlInputElement = query(&root, "#email");
        email.set_value("ada@example.com");
        fire(&email, "input");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(matches!(&seen[0], ProfileField::Name(name) if name == "Ada"));
        assert!(matches!(&seen[1], ProfileField::Email(email) if email == "ada@example.com"));
    }

    #[wasm_bindgen_test]
    async fn test_empty_file_selection_emits_nothing() {
        let (on_change, seen) = recorder::<ProfileField<Avatar>>();
        let root = mount::<ProfilePanel>(ProfilePanelProps {
            profile: Profile::default(),
            on_change,
        })
        .await;

        let picker: HtmlInputElement = query(&root, "#avatarUpload");
        fire(&picker, "change");

        assert!(seen.borrow().is_empty());
    }
}
