use shared::{ControlValue, Language, Settings, SettingsField, Tab, Theme};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::card::Card;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub settings: Settings,
    pub on_change: Callback<SettingsField>,
    pub on_save: Callback<()>,
}

/// Name and value reported by whichever control fired the event
fn control_value(e: &Event) -> Option<(String, ControlValue)> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        let value = if input.type_() == "checkbox" {
            ControlValue::Checked(input.checked())
        } else {
            ControlValue::Text(input.value())
        };
        return Some((input.name(), value));
    }

    e.target_dyn_into::<HtmlSelectElement>()
        .map(|select| (select.name(), ControlValue::Text(select.value())))
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let Some((name, value)) = control_value(&e) else {
                return;
            };
            match SettingsField::from_control(&name, value) {
                Ok(field) => on_change.emit(field),
                Err(err) => Logger::warn_with_component("SettingsPanel", &err.to_string()),
            }
        })
    };

    let on_save_click = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };

    let settings = &props.settings;

    html! {
        <Card title={Tab::Settings.card_title()}>
            <div class="space-y-6">
                <div class="form-group">
                    <label for="theme">{"Theme"}</label>
                    <select id="theme" name="theme" class="settings-select" onchange={onchange.clone()}>
                        {for Theme::ALL.into_iter().map(|theme| html! {
                            <option value={theme.code()} selected={theme == settings.theme}>
                                {theme.label()}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group form-check">
                    <input
                        type="checkbox"
                        id="notifications"
                        name="notifications"
                        checked={settings.notifications}
                        onchange={onchange.clone()}
                    />
                    <label for="notifications">{"Enable Notifications"}</label>
                </div>
                <div class="form-group">
                    <label for="language">{"Language"}</label>
                    <select id="language" name="language" class="settings-select" {onchange}>
                        {for Language::ALL.into_iter().map(|language| html! {
                            <option value={language.code()} selected={language == settings.language}>
                                {language.label()}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-actions">
                    <button type="button" class="btn btn-primary w-full" onclick={on_save_click}>
                        {"Save Settings"}
                    </button>
                </div>
            </div>
        </Card>
    }
}
