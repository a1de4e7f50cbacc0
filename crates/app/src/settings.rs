//! Settings page state. Nothing is persisted; `save` only records the snapshot.

use serde::{Deserialize, Serialize};

use clearlabel_core::{DomainError, DomainResult};

use crate::context::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Name,
    Email,
    /// Read-only; assigned by an administrator.
    Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub profile: Profile,
    pub notifications: bool,
    pub two_factor: bool,
    pub theme: Theme,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "John Doe".to_string(),
                email: "johndoe@example.com".to_string(),
                role: "Admin".to_string(),
            },
            notifications: true,
            two_factor: false,
            theme: Theme::Light,
        }
    }
}

impl UserSettings {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn update_profile(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> DomainResult<()> {
        let value = value.into();
        match field {
            ProfileField::Name => self.profile.name = value,
            ProfileField::Email => {
                if !value.is_empty() && !value.contains('@') {
                    return Err(DomainError::validation(format!("not an email address: {value}")));
                }
                self.profile.email = value;
            }
            ProfileField::Role => return Err(DomainError::validation("role is read-only")),
        }
        Ok(())
    }

    pub fn set_notifications(&mut self, enabled: bool) {
        self.notifications = enabled;
    }

    pub fn set_two_factor(&mut self, enabled: bool) {
        self.two_factor = enabled;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn save(&self) {
        tracing::info!(
            name = %self.profile.name,
            email = %self.profile.email,
            notifications = self.notifications,
            two_factor = self.two_factor,
            theme = self.theme.as_str(),
            "settings saved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_cannot_be_edited() {
        let mut settings = UserSettings::default();
        assert!(settings.update_profile(ProfileField::Role, "Owner").is_err());
        assert_eq!(settings.profile.role, "Admin");
    }

    #[test]
    fn name_and_email_are_editable() {
        let mut settings = UserSettings::default();
        settings.update_profile(ProfileField::Name, "Ada").unwrap();
        settings.update_profile(ProfileField::Email, "ada@example.com").unwrap();
        assert_eq!(settings.profile.name, "Ada");
        assert_eq!(settings.profile.email, "ada@example.com");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut settings = UserSettings::default();
        assert!(settings.update_profile(ProfileField::Email, "nope").is_err());
        assert_eq!(settings.profile.email, "johndoe@example.com");
    }

    #[test]
    fn toggles_are_independent() {
        let mut settings = UserSettings::default();
        settings.set_two_factor(true);
        settings.set_notifications(false);
        assert_eq!(settings.toggle_theme(), Theme::Dark);
        assert!(settings.two_factor);
        assert!(!settings.notifications);
        settings.save();
    }
}
