use crate::profile::{Profile, ProfileField};
use crate::settings::{Settings, SettingsField};
use crate::tab::Tab;

/// Everything the shell holds for the lifetime of a page session
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState<A> {
    pub active_tab: Tab,
    pub home_note: String,
    pub project_name: String,
    pub profile: Profile<A>,
    pub settings: Settings,
}

impl<A> Default for ShellState<A> {
    fn default() -> Self {
        Self {
            active_tab: Tab::default(),
            home_note: String::new(),
            project_name: String::new(),
            profile: Profile::default(),
            settings: Settings::default(),
        }
    }
}

/// User interactions understood by the shell
#[derive(Debug, Clone, PartialEq)]
pub enum ShellAction<A> {
    SelectTab(Tab),
    SetHomeNote(String),
    SetProjectName(String),
    UpdateProfile(ProfileField<A>),
    UpdateSettings(SettingsField),
    /// Placeholder for a future save target; leaves state as it is
    SaveSettings,
}

impl<A: Clone> ShellState<A> {
    /// Produce the state that follows `action`
    pub fn apply(&self, action: ShellAction<A>) -> ShellState<A> {
        match action {
            ShellAction::SelectTab(active_tab) => ShellState {
                active_tab,
                ..self.clone()
            },
            ShellAction::SetHomeNote(home_note) => ShellState {
                home_note,
                ..self.clone()
            },
            ShellAction::SetProjectName(project_name) => ShellState {
                project_name,
                ..self.clone()
            },
            ShellAction::UpdateProfile(field) => ShellState {
                profile: self.profile.merge(field),
                ..self.clone()
            },
            ShellAction::UpdateSettings(field) => ShellState {
                settings: self.settings.merge(field),
                ..self.clone()
            },
            ShellAction::SaveSettings => self.clone(),
        }
    }
}

impl<A> ShellState<A> {
    /// Text of the Home preview block, shown only for a non-empty note
    pub fn home_preview(&self) -> Option<&str> {
        (!self.home_note.is_empty()).then_some(self.home_note.as_str())
    }

    /// Text of the Project preview block, shown only for a non-empty name
    pub fn project_preview(&self) -> Option<String> {
        (!self.project_name.is_empty()).then(|| format!("Creating project: {}", self.project_name))
    }
}
