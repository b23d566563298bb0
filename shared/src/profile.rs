use crate::error::FieldError;

/// User profile edited on the Profile tab.
///
/// `A` is the avatar handle type. The browser frontend uses a selected file
/// together with its preview URL; tests use plain strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<A> {
    pub name: String,
    pub email: String,
    /// Locally selected image, if any
    pub avatar: Option<A>,
}

impl<A> Default for Profile<A> {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            avatar: None,
        }
    }
}

/// A single-field change to [`Profile`]
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileField<A> {
    Name(String),
    /// Email is accepted as typed; the input element handles formatting hints
    Email(String),
    Avatar(A),
}

impl<A> ProfileField<A> {
    /// Interpret the text control named `name`
    pub fn from_control(name: &str, value: String) -> Result<Self, FieldError> {
        match name {
            "name" => Ok(ProfileField::Name(value)),
            "email" => Ok(ProfileField::Email(value)),
            _ => Err(FieldError::UnknownField {
                record: "profile",
                name: name.to_string(),
            }),
        }
    }
}

impl<A: Clone> Profile<A> {
    /// Build a new record equal to this one except for `field`
    pub fn merge(&self, field: ProfileField<A>) -> Profile<A> {
        match field {
            ProfileField::Name(name) => Profile { name, ..self.clone() },
            ProfileField::Email(email) => Profile { email, ..self.clone() },
            ProfileField::Avatar(avatar) => Profile {
                name: self.name.clone(),
                email: self.email.clone(),
                avatar: Some(avatar),
            },
        }
    }
}
