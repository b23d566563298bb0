use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    /// Value carried by the select option
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }
}

impl FromStr for Theme {
    type Err = FieldError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.code() == code)
            .ok_or_else(|| FieldError::UnknownTheme(code.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::Fr, Language::De];

    /// Two-letter language code
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
        }
    }
}

impl FromStr for Language {
    type Err = FieldError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| FieldError::UnknownLanguage(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Application settings shown on the Settings tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub notifications: bool,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
            language: Language::En,
        }
    }
}

/// Raw value reported by a form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    /// Checkbox controls report their checked flag
    Checked(bool),
    /// Every other control reports text
    Text(String),
}

/// A single-field change to [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Theme(Theme),
    Notifications(bool),
    Language(Language),
}

impl SettingsField {
    /// Interpret the value of the control named `name`.
    ///
    /// The notifications control is a checkbox and must report
    /// [`ControlValue::Checked`]; theme and language are selects and must
    /// report one of their option codes as text.
    pub fn from_control(name: &str, value: ControlValue) -> Result<Self, FieldError> {
        match (name, value) {
            ("theme", ControlValue::Text(code)) => Ok(SettingsField::Theme(code.parse()?)),
            ("language", ControlValue::Text(code)) => Ok(SettingsField::Language(code.parse()?)),
            ("notifications", ControlValue::Checked(checked)) => {
                Ok(SettingsField::Notifications(checked))
            }
            ("theme" | "language", ControlValue::Checked(_)) => {
                Err(FieldError::ExpectedText(name.to_string()))
            }
            ("notifications", ControlValue::Text(_)) => {
                Err(FieldError::ExpectedChecked(name.to_string()))
            }
            _ => Err(FieldError::UnknownField {
                record: "settings",
                name: name.to_string(),
            }),
        }
    }
}

impl Settings {
    /// Build a new record equal to this one except for `field`
    pub fn merge(&self, field: SettingsField) -> Settings {
        match field {
            SettingsField::Theme(theme) => Settings { theme, ..self.clone() },
            SettingsField::Notifications(notifications) => Settings {
                notifications,
                ..self.clone()
            },
            SettingsField::Language(language) => Settings {
                language,
                ..self.clone()
            },
        }
    }
}
