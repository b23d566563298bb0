pub mod card;
pub mod home_panel;
pub mod profile_panel;
pub mod project_panel;
pub mod settings_panel;
pub mod tab_bar;
pub mod tab_content;

#[cfg(test)]
pub(crate) mod test_support;
