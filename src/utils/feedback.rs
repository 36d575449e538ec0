//! Transient "Copied!" confirmation on the copy button
//!
//! The idle label is captured once, when the feedback is built. Every trigger
//! bumps a generation counter and only the revert scheduled by the newest
//! trigger restores the idle label, so rapid re-triggers restart the window
//! instead of reverting early or capturing "Copied!" as the original text.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives the success signal from the copier
pub trait CopyFeedback {
    fn copied(&self);
}

/// Element whose text and classes the page updates
pub trait LabelTarget {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_class(&self, class: &str, enabled: bool);
}

/// Wall-clock one-shot timer
pub trait FeedbackTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// Label state of the copy button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackState {
    idle_label: String,
    copied_label: String,
    showing: bool,
    generation: u64,
}

impl FeedbackState {
    pub fn new(idle_label: impl Into<String>, copied_label: impl Into<String>) -> Self {
        Self {
            idle_label: idle_label.into(),
            copied_label: copied_label.into(),
            showing: false,
            generation: 0,
        }
    }

    /// Text the label should currently display
    pub fn label(&self) -> &str {
        if self.showing {
            &self.copied_label
        } else {
            &self.idle_label
        }
    }

    #[cfg(test)]
    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// Start (or restart) the confirmation window, returning its ticket
    pub fn trigger(&mut self) -> u64 {
        self.generation += 1;
        self.showing = true;
        self.generation
    }

    /// Revert to the idle label if `ticket` belongs to the newest trigger
    ///
    /// Returns true when the label changed back.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if !self.showing || ticket != self.generation {
            return false;
        }
        self.showing = false;
        true
    }
}

/// Confirmation feedback bound to one label element
pub struct LabelFeedback<T, M> {
    target: Rc<T>,
    timer: M,
    state: Rc<RefCell<FeedbackState>>,
    copied_class: String,
    duration_ms: u32,
}

impl<T: LabelTarget, M: FeedbackTimer> LabelFeedback<T, M> {
    pub fn new(
        target: T,
        timer: M,
        copied_label: &str,
        copied_class: &str,
        duration_ms: u32,
    ) -> Self {
        let state = FeedbackState::new(target.text(), copied_label);
        Self {
            target: Rc::new(target),
            timer,
            state: Rc::new(RefCell::new(state)),
            copied_class: copied_class.to_string(),
            duration_ms,
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> &T {
        &self.target
    }

    #[cfg(test)]
    pub fn state(&self) -> FeedbackState {
        self.state.borrow().clone()
    }
}

impl<T, M> CopyFeedback for LabelFeedback<T, M>
where
    T: LabelTarget + 'static,
    M: FeedbackTimer,
{
    fn copied(&self) {
        let ticket = {
            let mut state = self.state.borrow_mut();
            let ticket = state.trigger();
            self.target.set_text(state.label());
            ticket
        };
        self.target.set_class(&self.copied_class, true);

        let target = Rc::clone(&self.target);
        let state = Rc::clone(&self.state);
        let class = self.copied_class.clone();
        self.timer.schedule(
            self.duration_ms,
            Box::new(move || {
                let mut state = state.borrow_mut();
                if state.expire(ticket) {
                    target.set_text(state.label());
                    target.set_class(&class, false);
                }
            }),
        );
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Label that records its text and class list
    #[derive(Default)]
    pub struct FakeLabel {
        pub text: RefCell<String>,
        pub classes: RefCell<Vec<String>>,
    }

    impl FakeLabel {
        pub fn with_text(text: &str) -> Self {
            Self {
                text: RefCell::new(text.to_string()),
                classes: RefCell::new(Vec::new()),
            }
        }

        pub fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }
    }

    impl LabelTarget for FakeLabel {
        fn text(&self) -> String {
            self.text.borrow().clone()
        }

        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }

        fn set_class(&self, class: &str, enabled: bool) {
            let mut classes = self.classes.borrow_mut();
            classes.retain(|c| c != class);
            if enabled {
                classes.push(class.to_string());
            }
        }
    }

    /// Timer whose callbacks only run when the test fires them
    #[derive(Clone, Default)]
    pub struct ManualTimer {
        pub pending: Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>,
    }

    impl ManualTimer {
        pub fn delays(&self) -> Vec<u32> {
            self.pending.borrow().iter().map(|(ms, _)| *ms).collect()
        }

        /// Fire the oldest pending callback
        pub fn fire_next(&self) -> bool {
            let next = {
                let mut pending = self.pending.borrow_mut();
                if pending.is_empty() {
                    None
                } else {
                    Some(pending.remove(0))
                }
            };
            match next {
                Some((_, callback)) => {
                    callback();
                    true
                }
                None => false,
            }
        }
    }

    impl FeedbackTimer for ManualTimer {
        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push((delay_ms, callback));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeLabel, ManualTimer};
    use super::*;

    fn feedback(timer: &ManualTimer) -> LabelFeedback<FakeLabel, ManualTimer> {
        LabelFeedback::new(FakeLabel::with_text("Copy"), timer.clone(), "Copied!", "copied", 2000)
    }

    #[test]
    fn test_state_trigger_and_expire() {
        let mut state = FeedbackState::new("Copy", "Copied!");
        assert_eq!(state.label(), "Copy");

        let ticket = state.trigger();
        assert_eq!(state.label(), "Copied!");
        assert!(state.is_showing());

        assert!(state.expire(ticket));
        assert_eq!(state.label(), "Copy");
        // Second expiry of the same ticket is a no-op
        assert!(!state.expire(ticket));
    }

    #[test]
    fn test_stale_ticket_does_not_revert() {
        let mut state = FeedbackState::new("Copy", "Copied!");
        let first = state.trigger();
        let second = state.trigger();

        assert!(!state.expire(first));
        assert_eq!(state.label(), "Copied!");
        assert!(state.expire(second));
        assert_eq!(state.label(), "Copy");
    }

    #[test]
    fn test_copied_shows_confirmation_then_reverts_after_2000ms() {
        let timer = ManualTimer::default();
        let fb = feedback(&timer);

        fb.copied();
        assert_eq!(fb.target().text(), "Copied!");
        assert!(fb.target().has_class("copied"));
        assert_eq!(timer.delays(), vec![2000]);

        assert!(timer.fire_next());
        assert_eq!(fb.target().text(), "Copy");
        assert!(!fb.target().has_class("copied"));
    }

    #[test]
    fn test_retrigger_restarts_window() {
        let timer = ManualTimer::default();
        let fb = feedback(&timer);

        fb.copied();
        fb.copied();
        assert_eq!(timer.delays(), vec![2000, 2000]);

        // First revert is stale and must leave the confirmation up
        timer.fire_next();
        assert_eq!(fb.target().text(), "Copied!");
        assert!(fb.target().has_class("copied"));

        timer.fire_next();
        assert_eq!(fb.target().text(), "Copy");
        assert!(!fb.state().is_showing());
    }

    #[test]
    fn test_idle_label_captured_once() {
        let timer = ManualTimer::default();
        let fb = feedback(&timer);

        // Trigger again while "Copied!" is showing; the original label survives
        fb.copied();
        fb.copied();
        timer.fire_next();
        timer.fire_next();
        assert_eq!(fb.target().text(), "Copy");
    }
}
