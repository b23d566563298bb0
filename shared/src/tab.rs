use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

/// One of the four mutually exclusive views of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Project,
    Profile,
    Settings,
}

impl Tab {
    /// Navigation order, left to right
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Project, Tab::Profile, Tab::Settings];

    /// Tag carried by the tab button
    pub fn tag(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Project => "project",
            Tab::Profile => "profile",
            Tab::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Project => "Projects",
            Tab::Profile => "Profile",
            Tab::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Project => "📁",
            Tab::Profile => "👤",
            Tab::Settings => "⚙️",
        }
    }

    /// Title of the card rendered for this tab
    pub fn card_title(self) -> &'static str {
        match self {
            Tab::Home => "Home Dashboard",
            Tab::Project => "Project Management",
            Tab::Profile => "Profile Settings",
            Tab::Settings => "Application Settings",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Tab {
    type Err = FieldError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.tag() == tag)
            .ok_or_else(|| FieldError::UnknownTab(tag.to_string()))
    }
}
