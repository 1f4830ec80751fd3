//! Console View State
//!
//! The transient, in-memory state of the single console view: the pending
//! query, the busy flag, the most recent response text, and four independent
//! overlay visibility flags. Nothing here is persisted; a full page reload
//! reinitializes everything.

use crate::dispatch::InquiryOutcome;

/// The four overlay panels of the console view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overlay {
    /// Manifesto / mandate text
    Mandate,
    /// The oracle's answer (or the failure message)
    Response,
    /// Privacy and terms text
    Privacy,
    /// Product collection panel
    Collection,
}

impl Overlay {
    pub const ALL: [Self; 4] = [
        Self::Mandate,
        Self::Response,
        Self::Privacy,
        Self::Collection,
    ];
}

/// Component-local state for the console view
///
/// All mutations happen on a single logical thread of control, so every
/// guard is a plain field check. Overlays carry no enforced mutual
/// exclusion: each flag toggles independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsoleState {
    query: String,
    busy: bool,
    response: String,
    mandate_open: bool,
    response_open: bool,
    privacy_open: bool,
    collection_open: bool,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pending query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the pending query (invoked on every keystroke)
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Whether a request is in flight
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// The most recent result text (answer or failure message)
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Submission guard and busy transition
    ///
    /// Returns the trimmed prompt and marks the console busy, but only when
    /// the trimmed query is non-empty and no request is already in flight.
    /// Otherwise the submission is a silent no-op and `None` is returned,
    /// so a second trigger while busy never produces a second outbound call.
    pub fn begin_inquiry(&mut self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() || self.busy {
            return None;
        }
        self.busy = true;
        Some(trimmed.to_string())
    }

    /// Settle the in-flight inquiry
    ///
    /// Always clears the busy flag and opens the response overlay with the
    /// outcome text. The query is cleared only on success; on failure it is
    /// retained so the user can retry without retyping.
    pub fn settle(&mut self, outcome: InquiryOutcome) {
        match outcome {
            InquiryOutcome::Answer(text) => {
                self.response = text;
                self.query.clear();
            }
            InquiryOutcome::Failure(message) => {
                self.response = message;
            }
        }
        self.response_open = true;
        self.busy = false;
    }

    /// Whether the given overlay is currently shown
    pub const fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Mandate => self.mandate_open,
            Overlay::Response => self.response_open,
            Overlay::Privacy => self.privacy_open,
            Overlay::Collection => self.collection_open,
        }
    }

    /// Show an overlay
    pub fn open(&mut self, overlay: Overlay) {
        *self.flag_mut(overlay) = true;
    }

    /// Hide an overlay (the explicit close control inside its panel)
    pub fn close(&mut self, overlay: Overlay) {
        *self.flag_mut(overlay) = false;
    }

    /// Hide every overlay (a click landing exactly on the dimmed backdrop)
    pub fn close_all(&mut self) {
        for overlay in Overlay::ALL {
            *self.flag_mut(overlay) = false;
        }
    }

    /// Discard everything, as if the view had just mounted
    ///
    /// Backs the logo-click affordance, which is equivalent to a full
    /// reload: every field returns to its initial value, never a subset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn flag_mut(&mut self, overlay: Overlay) -> &mut bool {
        match overlay {
            Overlay::Mandate => &mut self.mandate_open,
            Overlay::Response => &mut self.response_open,
            Overlay::Privacy => &mut self.privacy_open,
            Overlay::Collection => &mut self.collection_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_inquiry_trims_and_sets_busy() {
        let mut state = ConsoleState::new();
        state.set_query("  hello  ");

        assert_eq!(state.begin_inquiry(), Some("hello".to_string()));
        assert!(state.is_busy());
    }

    #[test]
    fn test_begin_inquiry_rejects_blank_query() {
        let mut state = ConsoleState::new();
        state.set_query("   ");

        assert_eq!(state.begin_inquiry(), None);
        assert!(!state.is_busy());
        assert!(!state.is_open(Overlay::Response));
    }

    #[test]
    fn test_begin_inquiry_rejects_while_busy() {
        let mut state = ConsoleState::new();
        state.set_query("first");
        assert!(state.begin_inquiry().is_some());

        state.set_query("second");
        assert_eq!(state.begin_inquiry(), None);
    }

    #[test]
    fn test_settle_success_clears_query_and_opens_response() {
        let mut state = ConsoleState::new();
        state.set_query("question");
        state.begin_inquiry().unwrap();

        state.settle(InquiryOutcome::Answer("answer".into()));

        assert_eq!(state.response(), "answer");
        assert_eq!(state.query(), "");
        assert!(!state.is_busy());
        assert!(state.is_open(Overlay::Response));
    }

    #[test]
    fn test_settle_failure_retains_query() {
        let mut state = ConsoleState::new();
        state.set_query("question");
        state.begin_inquiry().unwrap();

        state.settle(InquiryOutcome::Failure("it broke".into()));

        assert_eq!(state.response(), "it broke");
        assert_eq!(state.query(), "question");
        assert!(!state.is_busy());
        assert!(state.is_open(Overlay::Response));
    }

    #[test]
    fn test_overlays_toggle_independently() {
        let mut state = ConsoleState::new();

        for overlay in Overlay::ALL {
            assert!(!state.is_open(overlay));
            state.open(overlay);
            assert!(state.is_open(overlay));
            state.close(overlay);
            assert!(!state.is_open(overlay));
        }

        // Opening one never closes another.
        state.open(Overlay::Mandate);
        state.open(Overlay::Privacy);
        assert!(state.is_open(Overlay::Mandate));
        assert!(state.is_open(Overlay::Privacy));
        state.close(Overlay::Mandate);
        assert!(state.is_open(Overlay::Privacy));
    }

    #[test]
    fn test_close_all_hides_every_overlay() {
        let mut state = ConsoleState::new();
        for overlay in Overlay::ALL {
            state.open(overlay);
        }

        state.close_all();

        for overlay in Overlay::ALL {
            assert!(!state.is_open(overlay));
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = ConsoleState::new();
        state.set_query("pending");
        state.open(Overlay::Collection);
        state.settle(InquiryOutcome::Answer("answer".into()));

        state.reset();

        assert_eq!(state, ConsoleState::new());
    }
}
