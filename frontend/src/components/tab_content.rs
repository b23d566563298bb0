//! View dispatcher: renders the card belonging to the active tab.

use shared::Tab;
use yew::prelude::*;

use super::home_panel::HomePanel;
use super::profile_panel::ProfilePanel;
use super::project_panel::ProjectPanel;
use super::settings_panel::SettingsPanel;
use crate::hooks::use_shell_state::{AppState, UseShellStateActions};

#[derive(Properties, PartialEq)]
pub struct TabContentProps {
    pub state: AppState,
    pub actions: UseShellStateActions,
}

#[function_component(TabContent)]
pub fn tab_content(props: &TabContentProps) -> Html {
    let state = &props.state;
    let actions = &props.actions;

    match state.active_tab {
        Tab::Home => html! {
            <HomePanel
                note={state.home_note.clone()}
                preview={state.home_preview().map(|note| AttrValue::from(note.to_string()))}
                on_note_input={actions.set_home_note.clone()}
            />
        },
        Tab::Project => html! {
            <ProjectPanel
                name={state.project_name.clone()}
                preview={state.project_preview().map(AttrValue::from)}
                on_name_input={actions.set_project_name.clone()}
            />
        },
        Tab::Profile => html! {
            <ProfilePanel
                profile={state.profile.clone()}
                on_change={actions.update_profile.clone()}
            />
        },
        Tab::Settings => html! {
            <SettingsPanel
                settings={state.settings.clone()}
                on_change={actions.update_settings.clone()}
                on_save={actions.save_settings.clone()}
            />
        },
    }
}
