// ABOUTME: UI components for the TUI interface: onboarding wizard, dialogs and layout

pub mod confirmation_dialog;
pub mod layout;
pub mod onboarding;

pub use confirmation_dialog::ConfirmationDialogComponent;
pub use layout::LayoutComponent;
pub use onboarding::OnboardingComponent;
