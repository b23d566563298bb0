use std::rc::Rc;

use shared::{ProfileField, SettingsField, ShellAction, ShellState, Tab};
use yew::prelude::*;

use crate::services::avatar::Avatar;
use crate::services::logging::Logger;

pub type AppState = ShellState<Avatar>;
pub type AppAction = ShellAction<Avatar>;

const COMPONENT: &str = "ShellState";

/// Reducer wrapper around the shell state
#[derive(Clone, Default, PartialEq)]
pub struct ShellStore {
    pub state: AppState,
}

impl Reducible for ShellStore {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(ShellStore {
            state: self.state.apply(action),
        })
    }
}

pub struct UseShellStateResult {
    pub state: AppState,
    pub actions: UseShellStateActions,
}

#[derive(Clone, PartialEq)]
pub struct UseShellStateActions {
    pub select_tab: Callback<Tab>,
    pub set_home_note: Callback<String>,
    pub set_project_name: Callback<String>,
    pub update_profile: Callback<ProfileField<Avatar>>,
    pub update_settings: Callback<SettingsField>,
    pub save_settings: Callback<()>,
}

/// Owns the five pieces of session state and hands out the callbacks that
/// change them
#[hook]
pub fn use_shell_state() -> UseShellStateResult {
    let store = use_reducer(ShellStore::default);

    let select_tab = {
        let store = store.clone();
        Callback::from(move |tab: Tab| {
            Logger::debug_with_component(COMPONENT, &format!("Switching to {} tab", tab));
            store.dispatch(ShellAction::SelectTab(tab));
        })
    };

    let set_home_note = {
        let store = store.clone();
        Callback::from(move |note: String| store.dispatch(ShellAction::SetHomeNote(note)))
    };

    let set_project_name = {
        let store = store.clone();
        Callback::from(move |name: String| store.dispatch(ShellAction::SetProjectName(name)))
    };

    let update_profile = {
        let store = store.clone();
        Callback::from(move |field: ProfileField<Avatar>| {
            if let ProfileField::Avatar(avatar) = &field {
                Logger::info_with_component(
                    COMPONENT,
                    &format!("Avatar selected: {} ({} bytes)", avatar.file_name(), avatar.size()),
                );
            }
            store.dispatch(ShellAction::UpdateProfile(field));
        })
    };

    let update_settings = {
        let store = store.clone();
        Callback::from(move |field: SettingsField| store.dispatch(ShellAction::UpdateSettings(field)))
    };

    // No save target exists yet; record what would have been saved
    let save_settings = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            match serde_json::to_string(&store.state.settings) {
                Ok(json) => Logger::info_with_component(COMPONENT, &format!("Save requested: {}", json)),
                Err(e) => Logger::error_with_component(
                    COMPONENT,
                    &format!("Failed to serialize settings: {}", e),
                ),
            }
            store.dispatch(ShellAction::SaveSettings);
        })
    };

    UseShellStateResult {
        state: store.state.clone(),
        actions: UseShellStateActions {
            select_tab,
            set_home_note,
            set_project_name,
            update_profile,
            update_settings,
            save_settings,
        },
    }
}
