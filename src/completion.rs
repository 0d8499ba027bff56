// ABOUTME: Hand-off of collected onboarding data when the wizard finishes
// Sinks receive the submission once; secrets stay redacted in every sink we ship

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::components::onboarding::OnboardingSubmission;

/// Message shown to the user once the wizard is done
pub const ACKNOWLEDGEMENT: &str = "Onboarding completed! Redirecting to dashboard...";

/// Receiver of a finished onboarding run
pub trait CompletionSink: Send {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn deliver(&mut self, submission: &OnboardingSubmission) -> Result<()>;
}

/// Writes the submission to the tracing log
#[derive(Debug, Default)]
pub struct LogSink;

impl CompletionSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    fn deliver(&mut self, submission: &OnboardingSubmission) -> Result<()> {
        let payload =
            serde_json::to_string(submission).context("Failed to serialize onboarding submission")?;

        info!(
            submission_id = %submission.submission_id,
            niche = %submission.niche,
            "Onboarding completed: {}",
            payload
        );
        Ok(())
    }
}

/// Fans a submission out to every registered sink
#[derive(Default)]
pub struct CompletionDispatcher {
    sinks: Vec<Box<dyn CompletionSink>>,
}

impl CompletionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher with the default log sink
    pub fn with_default_sinks() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(Box::new(LogSink));
        dispatcher
    }

    pub fn register(&mut self, sink: Box<dyn CompletionSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Deliver to all sinks; a failing sink does not stop the others.
    /// Returns the names of sinks that failed.
    pub fn dispatch(&mut self, submission: &OnboardingSubmission) -> Vec<&'static str> {
        let mut failed = Vec::new();
        for sink in &mut self.sinks {
            if let Err(e) = sink.deliver(submission) {
                warn!("Completion sink '{}' failed: {:#}", sink.name(), e);
                failed.push(sink.name());
            }
        }
        failed
    }
}

impl std::fmt::Debug for CompletionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionDispatcher")
            .field("sinks", &self.sinks.iter().map(|s| s.name()).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::onboarding::{Accounts, Identity, Niche};
    use std::sync::{Arc, Mutex};

    struct Recording {
        seen: Arc<Mutex<Vec<Niche>>>,
        fail: bool,
    }

    impl CompletionSink for Recording {
        fn name(&self) -> &'static str {
            if self.fail { "failing" } else { "recording" }
        }

        fn deliver(&mut self, submission: &OnboardingSubmission) -> Result<()> {
            self.seen.lock().unwrap().push(submission.niche);
            if self.fail {
                anyhow::bail!("sink offline");
            }
            Ok(())
        }
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = CompletionDispatcher::new();
        dispatcher.register(Box::new(Recording { seen: seen.clone(), fail: true }));
        dispatcher.register(Box::new(Recording { seen: seen.clone(), fail: false }));

        let submission =
            OnboardingSubmission::new(Identity::default(), Niche::Business, Accounts::default());
        let failed = dispatcher.dispatch(&submission);

        assert_eq!(failed, vec!["failing"]);
        assert_eq!(*seen.lock().unwrap(), vec![Niche::Business, Niche::Business]);
    }

    #[test]
    fn test_default_sinks() {
        assert!(CompletionDispatcher::new().is_empty());

        let dispatcher = CompletionDispatcher::with_default_sinks();
        assert!(!dispatcher.is_empty());
        assert_eq!(dispatcher.len(), 1);
        assert!(format!("{:?}", dispatcher).contains("log"));
    }

    #[test]
    fn test_log_sink_delivers() {
        let submission =
            OnboardingSubmission::new(Identity::default(), Niche::Tech, Accounts::default());
        assert!(LogSink.deliver(&submission).is_ok());
    }
}
