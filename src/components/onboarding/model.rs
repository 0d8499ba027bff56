// ABOUTME: Data collected by the onboarding wizard
// Identity, content niche and platform credentials, plus the completion submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

const REDACTED: &str = "********";

/// Text that must never show up in logs or debug output
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the raw value (rendering and comparison only)
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub(crate) fn as_mut_string(&mut self) -> &mut String {
        &mut self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({REDACTED})")
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Who the user is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub full_name: String,
    pub phone: String,
    pub email: String,
}

/// Content category for the automated channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Niche {
    Motivation,
    Love,
    Business,
    Asmr,
    Tech,
    Other,
}

impl Niche {
    /// All niches in display order
    pub fn all() -> &'static [Niche] {
        &[
            Self::Motivation,
            Self::Love,
            Self::Business,
            Self::Asmr,
            Self::Tech,
            Self::Other,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::Love => "love",
            Self::Business => "business",
            Self::Asmr => "asmr",
            Self::Tech => "tech",
            Self::Other => "other",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Motivation => "Motivation",
            Self::Love => "Love/Shayari",
            Self::Business => "Business/Quotes",
            Self::Asmr => "ASMR/Relaxation",
            Self::Tech => "Evolving AI / Tech",
            Self::Other => "Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Motivation => "Inspirational content",
            Self::Love => "Romantic content",
            Self::Business => "Professional content",
            Self::Asmr => "Calming content",
            Self::Tech => "Technology content",
            Self::Other => "Custom niche",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Motivation => "💪",
            Self::Love => "❤️",
            Self::Business => "💼",
            Self::Asmr => "🧘",
            Self::Tech => "🤖",
            Self::Other => "✨",
        }
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Identifier/secret pair for one platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlatformCredentials {
    /// Username (Instagram) or channel email (YouTube)
    pub identifier: String,
    pub secret: Secret,
    /// Only consulted when secret confirmation is enabled
    pub secret_confirmation: Secret,
}

/// Supported platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    YouTube,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
        }
    }
}

/// Credentials for both platforms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Accounts {
    pub instagram: PlatformCredentials,
    pub youtube: PlatformCredentials,
}

impl Accounts {
    pub fn platform(&self, platform: Platform) -> &PlatformCredentials {
        match platform {
            Platform::Instagram => &self.instagram,
            Platform::YouTube => &self.youtube,
        }
    }
}

/// Everything the wizard collected, handed off on finish
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingSubmission {
    pub submission_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub identity: Identity,
    pub niche: Niche,
    pub accounts: Accounts,
}

impl OnboardingSubmission {
    pub fn new(identity: Identity, niche: Niche, accounts: Accounts) -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            completed_at: Utc::now(),
            identity,
            niche,
            accounts,
        }
    }
}
