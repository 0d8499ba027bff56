// ABOUTME: Onboarding wizard module for first-time setup
// Collects identity, content niche and platform credentials, then hands them off

pub mod component;
pub mod input;
pub mod model;
pub mod progress;
pub mod state;
pub mod validation;

pub use component::OnboardingComponent;
pub use input::TextCursor;
pub use model::{Accounts, Identity, Niche, OnboardingSubmission, Platform, PlatformCredentials, Secret};
pub use progress::{markers, MarkerState, ProgressIndicator, StepMarker};
pub use state::{advance, OnboardingState, OnboardingStep, SubmitOutcome, WizardOptions, WizardProgress};
pub use validation::{is_valid_email, validate_accounts, validate_identity, FieldId, ValidationErrors};
