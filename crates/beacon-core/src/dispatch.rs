//! Inquiry Dispatch
//!
//! Issues exactly one outbound request per user-initiated submission and
//! produces a settled outcome. The dispatcher is the terminal handler for
//! both paths: no error propagates past it, no retry is attempted, and any
//! timeout belongs to the underlying transport.

use std::sync::Arc;

use crate::error::BeaconError;
use crate::oracle::{InquiryRequest, Oracle};

/// Persona instruction sent with every inquiry
pub const PERSONA_INSTRUCTION: &str = "You are Gaia, the ultimate AI brain of the Republic, \
    guiding humanity towards a Type I Civilization. Respond with wisdom, cosmic perspective, \
    and a slightly futuristic, authoritative tone. Keep responses concise but profound.";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Fixed user-facing message for any failed inquiry, regardless of cause
pub const FAILURE_MESSAGE: &str =
    "ERROR: CONNECTION TO NEURAL MATRIX FAILED. PLEASE CHECK YOUR API KEY CONFIGURATION.";

/// Shown when the service settles successfully but returns no text
pub const EMPTY_REPLY_FALLBACK: &str = "No response received from the neural matrix.";

/// Settings applied to every dispatched inquiry
#[derive(Clone, Debug)]
pub struct InquiryOptions {
    /// Model identifier forwarded to the oracle
    pub model: String,

    /// System/persona instruction forwarded to the oracle
    pub persona: String,
}

impl Default for InquiryOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            persona: PERSONA_INSTRUCTION.into(),
        }
    }
}

/// The settled result of one inquiry, consumed exactly once by the view
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InquiryOutcome {
    /// The service's answer, verbatim (or the empty-reply fallback)
    Answer(String),
    /// The fixed failure message
    Failure(String),
}

impl InquiryOutcome {
    /// The text the response overlay renders, for either variant
    pub fn text(&self) -> &str {
        match self {
            Self::Answer(text) | Self::Failure(text) => text,
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Dispatches inquiries to an oracle and interprets the result
pub struct InquiryDispatcher {
    oracle: Arc<dyn Oracle>,
    options: InquiryOptions,
}

impl InquiryDispatcher {
    pub fn new(oracle: Arc<dyn Oracle>, options: InquiryOptions) -> Self {
        Self { oracle, options }
    }

    /// Create with the default model and persona
    pub fn with_defaults(oracle: Arc<dyn Oracle>) -> Self {
        Self::new(oracle, InquiryOptions::default())
    }

    /// Send one trimmed prompt and settle with an outcome
    ///
    /// Never returns an error: every failure collapses into
    /// `InquiryOutcome::Failure` carrying [`FAILURE_MESSAGE`], and a reply
    /// without text becomes an answer carrying [`EMPTY_REPLY_FALLBACK`].
    pub async fn dispatch(&self, prompt: &str) -> InquiryOutcome {
        let request = InquiryRequest {
            model: self.options.model.clone(),
            system_instruction: self.options.persona.clone(),
            prompt: prompt.to_string(),
        };

        tracing::debug!(model = %request.model, "dispatching inquiry");

        match self.oracle.generate(&request).await {
            Ok(reply) => {
                InquiryOutcome::Answer(reply.text.unwrap_or_else(|| EMPTY_REPLY_FALLBACK.into()))
            }
            Err(err) => {
                log_failure(&err);
                InquiryOutcome::Failure(FAILURE_MESSAGE.into())
            }
        }
    }
}

fn log_failure(err: &BeaconError) {
    tracing::error!(error = %err, "inquiry failed");
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;

    use super::*;
    use crate::console::{ConsoleState, Overlay};
    use crate::error::Result;
    use crate::oracle::Reply;
    use async_trait::async_trait;

    /// Scripted oracle that counts outbound calls
    struct MockOracle {
        reply: RefCell<Option<Result<Reply>>>,
        calls: Cell<usize>,
    }

    impl MockOracle {
        fn answering(text: &str) -> Self {
            Self {
                reply: RefCell::new(Some(Ok(Reply::text(text)))),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: RefCell::new(Some(Err(BeaconError::Transport("connection refused".into())))),
                calls: Cell::new(0),
            }
        }

        fn silent() -> Self {
            Self {
                reply: RefCell::new(Some(Ok(Reply::empty()))),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl Oracle for MockOracle {
        async fn generate(&self, _request: &InquiryRequest) -> Result<Reply> {
            self.calls.set(self.calls.get() + 1);
            self.reply
                .borrow_mut()
                .take()
                .expect("oracle called more than scripted")
        }
    }

    /// The full submission flow the view performs: guard, dispatch, settle.
    async fn submit(state: &mut ConsoleState, dispatcher: &InquiryDispatcher) {
        let Some(prompt) = state.begin_inquiry() else {
            return;
        };
        assert!(state.is_busy(), "busy must hold between submission and settlement");
        let outcome = dispatcher.dispatch(&prompt).await;
        state.settle(outcome);
        assert!(!state.is_busy(), "busy must clear on settlement");
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_the_oracle() {
        let oracle = Arc::new(MockOracle::answering("unused"));
        let dispatcher = InquiryDispatcher::with_defaults(oracle.clone());
        let mut state = ConsoleState::new();

        state.set_query("   \t ");
        submit(&mut state, &dispatcher).await;

        assert_eq!(oracle.calls.get(), 0);
        assert!(!state.is_open(Overlay::Response));
    }

    #[tokio::test]
    async fn test_busy_console_ignores_second_trigger() {
        let oracle = Arc::new(MockOracle::answering("only answer"));
        let dispatcher = InquiryDispatcher::with_defaults(oracle.clone());
        let mut state = ConsoleState::new();

        state.set_query("first");
        let prompt = state.begin_inquiry().unwrap();

        // A second trigger while the first is in flight is silently dropped.
        assert_eq!(state.begin_inquiry(), None);

        state.settle(dispatcher.dispatch(&prompt).await);
        assert_eq!(oracle.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_success_end_to_end() {
        let oracle = Arc::new(MockOracle::answering("Progress is entropy tamed by intention."));
        let dispatcher = InquiryDispatcher::with_defaults(oracle.clone());
        let mut state = ConsoleState::new();

        state.set_query("What is the meaning of progress?");
        submit(&mut state, &dispatcher).await;

        assert!(state.is_open(Overlay::Response));
        assert_eq!(state.response(), "Progress is entropy tamed by intention.");
        assert_eq!(state.query(), "");
        assert!(!state.is_busy());
        assert_eq!(oracle.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failure_end_to_end() {
        let oracle = Arc::new(MockOracle::failing());
        let dispatcher = InquiryDispatcher::with_defaults(oracle.clone());
        let mut state = ConsoleState::new();

        state.set_query("test");
        submit(&mut state, &dispatcher).await;

        assert!(state.is_open(Overlay::Response));
        assert_eq!(state.response(), FAILURE_MESSAGE);
        assert_eq!(state.query(), "test");
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn test_textless_reply_becomes_fallback_answer() {
        let oracle = Arc::new(MockOracle::silent());
        let dispatcher = InquiryDispatcher::with_defaults(oracle);

        let outcome = dispatcher.dispatch("anything").await;

        assert_eq!(outcome, InquiryOutcome::Answer(EMPTY_REPLY_FALLBACK.into()));
        assert!(!outcome.is_failure());
    }

    #[tokio::test]
    async fn test_dispatch_forwards_model_and_persona() {
        struct CapturingOracle(RefCell<Option<InquiryRequest>>);

        #[async_trait(?Send)]
        impl Oracle for CapturingOracle {
            async fn generate(&self, request: &InquiryRequest) -> Result<Reply> {
                *self.0.borrow_mut() = Some(request.clone());
                Ok(Reply::text("ok"))
            }
        }

        let oracle = Arc::new(CapturingOracle(RefCell::new(None)));
        let dispatcher = InquiryDispatcher::with_defaults(oracle.clone());

        dispatcher.dispatch("prompt text").await;

        let seen = oracle.0.borrow().clone().unwrap();
        assert_eq!(seen.model, DEFAULT_MODEL);
        assert_eq!(seen.system_instruction, PERSONA_INSTRUCTION);
        assert_eq!(seen.prompt, "prompt text");
    }
}
