// ABOUTME: Per-step validators for the onboarding wizard
// Pure functions mapping a step's data to field-level error messages

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::model::{Accounts, Identity, Platform, PlatformCredentials};

lazy_static! {
    // Unanchored: something@something.something
    static ref EMAIL_PATTERN: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
}

/// Does the text look like an email address?
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Every input field the wizard knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    Phone,
    Email,
    InstagramUsername,
    InstagramPassword,
    InstagramPasswordConfirm,
    YoutubeEmail,
    YoutubePassword,
    YoutubePasswordConfirm,
}

impl FieldId {
    /// Stable key used in JSON output
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::InstagramUsername => "instagramUsername",
            Self::InstagramPassword => "instagramPassword",
            Self::InstagramPasswordConfirm => "instagramPasswordConfirm",
            Self::YoutubeEmail => "youtubeEmail",
            Self::YoutubePassword => "youtubePassword",
            Self::YoutubePasswordConfirm => "youtubePasswordConfirm",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Phone => "Phone Number",
            Self::Email => "Email Address",
            Self::InstagramUsername => "Username",
            Self::InstagramPassword | Self::YoutubePassword => "Password",
            Self::InstagramPasswordConfirm | Self::YoutubePasswordConfirm => "Confirm Password",
            Self::YoutubeEmail => "Channel Email",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Enter your full name",
            Self::Phone => "+1 (555) 123-4567",
            Self::Email => "your.email@example.com",
            Self::InstagramUsername => "@your_username",
            Self::InstagramPassword | Self::YoutubePassword => "Enter your password",
            Self::InstagramPasswordConfirm | Self::YoutubePasswordConfirm => {
                "Re-enter your password"
            }
            Self::YoutubeEmail => "your.channel@gmail.com",
        }
    }

    /// Masked by default when rendered
    pub fn is_secret(&self) -> bool {
        matches!(
            self,
            Self::InstagramPassword
                | Self::InstagramPasswordConfirm
                | Self::YoutubePassword
                | Self::YoutubePasswordConfirm
        )
    }

    /// Platform a credentials field belongs to
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Self::InstagramUsername | Self::InstagramPassword | Self::InstagramPasswordConfirm => {
                Some(Platform::Instagram)
            }
            Self::YoutubeEmail | Self::YoutubePassword | Self::YoutubePasswordConfirm => {
                Some(Platform::YouTube)
            }
            Self::FullName | Self::Phone | Self::Email => None,
        }
    }

    /// Fields on the identity step, in tab order
    pub fn identity_fields() -> &'static [FieldId] {
        &[Self::FullName, Self::Phone, Self::Email]
    }

    /// Fields on the credentials step, in tab order
    pub fn credential_fields(confirm_secrets: bool) -> &'static [FieldId] {
        if confirm_secrets {
            &[
                Self::InstagramUsername,
                Self::InstagramPassword,
                Self::InstagramPasswordConfirm,
                Self::YoutubeEmail,
                Self::YoutubePassword,
                Self::YoutubePasswordConfirm,
            ]
        } else {
            &[
                Self::InstagramUsername,
                Self::InstagramPassword,
                Self::YoutubeEmail,
                Self::YoutubePassword,
            ]
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for FieldId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Field-level validation failures, one message per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first failing rule for a field wins
    pub fn add(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Ok when nothing failed
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate the identity step
pub fn validate_identity(identity: &Identity) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(&identity.full_name) {
        errors.add(FieldId::FullName, "Full name is required");
    }

    if is_blank(&identity.phone) {
        errors.add(FieldId::Phone, "Phone number is required");
    }

    if is_blank(&identity.email) {
        errors.add(FieldId::Email, "Email is required");
    } else if !is_valid_email(&identity.email) {
        errors.add(FieldId::Email, "Email is invalid");
    }

    errors
}

fn validate_confirmation(
    errors: &mut ValidationErrors,
    platform: Platform,
    field: FieldId,
    credentials: &PlatformCredentials,
) {
    let label = platform.label();
    if is_blank(credentials.secret_confirmation.expose()) {
        errors.add(field, format!("Please confirm your {label} password"));
    } else if credentials.secret_confirmation.expose() != credentials.secret.expose() {
        errors.add(field, format!("{label} passwords do not match"));
    }
}

/// Validate the credentials step for both platforms
pub fn validate_accounts(accounts: &Accounts, confirm_secrets: bool) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let instagram = accounts.platform(Platform::Instagram);
    let youtube = accounts.platform(Platform::YouTube);

    if is_blank(&instagram.identifier) {
        errors.add(FieldId::InstagramUsername, "Instagram username is required");
    }

    if is_blank(instagram.secret.expose()) {
        errors.add(FieldId::InstagramPassword, "Instagram password is required");
    }

    if confirm_secrets {
        validate_confirmation(
            &mut errors,
            Platform::Instagram,
            FieldId::InstagramPasswordConfirm,
            instagram,
        );
    }

    if is_blank(&youtube.identifier) {
        errors.add(FieldId::YoutubeEmail, "YouTube email is required");
    } else if !is_valid_email(&youtube.identifier) {
        errors.add(FieldId::YoutubeEmail, "YouTube email is invalid");
    }

    if is_blank(youtube.secret.expose()) {
        errors.add(FieldId::YoutubePassword, "YouTube password is required");
    }

    if confirm_secrets {
        validate_confirmation(
            &mut errors,
            Platform::YouTube,
            FieldId::YoutubePasswordConfirm,
            youtube,
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::onboarding::model::Secret;
    use pretty_assertions::assert_eq;

    fn identity(full_name: &str, phone: &str, email: &str) -> Identity {
        Identity {
            full_name: full_name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    fn valid_accounts() -> Accounts {
        Accounts {
            instagram: PlatformCredentials {
                identifier: "@jane".to_string(),
                secret: Secret::new("abc"),
                secret_confirmation: Secret::new("abc"),
            },
            youtube: PlatformCredentials {
                identifier: "jane.channel@gmail.com".to_string(),
                secret: Secret::new("xyz"),
                secret_confirmation: Secret::new("xyz"),
            },
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a@b.c"));
        // Unanchored, like the browser regex test
        assert!(is_valid_email("name: jane@example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@ example.com"));
    }

    #[test]
    fn test_identity_valid() {
        let errors = validate_identity(&identity("Jane Doe", "+15551234567", "jane@example.com"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_identity_all_blank_reports_every_field() {
        let errors = validate_identity(&identity("   ", "", "\t"));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FieldId::FullName), Some("Full name is required"));
        assert_eq!(errors.get(FieldId::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(FieldId::Email), Some("Email is required"));
    }

    #[test]
    fn test_identity_invalid_email() {
        let errors = validate_identity(&identity("Jane", "123", "not-an-email"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldId::Email), Some("Email is invalid"));
    }

    #[test]
    fn test_accounts_valid_with_confirmation() {
        assert!(validate_accounts(&valid_accounts(), true).is_empty());
    }

    #[test]
    fn test_accounts_confirmation_ignored_without_flag() {
        let mut accounts = valid_accounts();
        accounts.instagram.secret_confirmation = Secret::default();
        accounts.youtube.secret_confirmation = Secret::new("nope");
        assert!(validate_accounts(&accounts, false).is_empty());
    }

    #[test]
    fn test_confirmation_mismatch_differs_from_missing() {
        let mut accounts = valid_accounts();
        accounts.instagram.secret_confirmation = Secret::new("abd");
        accounts.youtube.secret_confirmation = Secret::new("  ");

        let errors = validate_accounts(&accounts, true);
        assert_eq!(
            errors.get(FieldId::InstagramPasswordConfirm),
            Some("Instagram passwords do not match")
        );
        assert_eq!(
            errors.get(FieldId::YoutubePasswordConfirm),
            Some("Please confirm your YouTube password")
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_confirmation_is_exact_match() {
        let mut accounts = valid_accounts();
        accounts.instagram.secret_confirmation = Secret::new("abc ");
        let errors = validate_accounts(&accounts, true);
        assert!(errors.contains(FieldId::InstagramPasswordConfirm));
    }

    #[test]
    fn test_accounts_empty() {
        let errors = validate_accounts(&Accounts::default(), false);
        assert_eq!(errors.get(FieldId::InstagramUsername), Some("Instagram username is required"));
        assert_eq!(errors.get(FieldId::InstagramPassword), Some("Instagram password is required"));
        assert_eq!(errors.get(FieldId::YoutubeEmail), Some("YouTube email is required"));
        assert_eq!(errors.get(FieldId::YoutubePassword), Some("YouTube password is required"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_youtube_email_must_look_like_email() {
        let mut accounts = valid_accounts();
        accounts.youtube.identifier = "mychannel".to_string();
        let errors = validate_accounts(&accounts, true);
        assert_eq!(errors.get(FieldId::YoutubeEmail), Some("YouTube email is invalid"));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let mut errors = ValidationErrors::new();
        errors.add(FieldId::Email, "first");
        errors.add(FieldId::Email, "second");
        assert_eq!(errors.get(FieldId::Email), Some("first"));
    }

    #[test]
    fn test_errors_serialize_as_field_map() {
        let errors = validate_identity(&identity("", "555", "jane@example.com"));
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"fullName":"Full name is required"}"#);
    }
}
