//! Linear step wizard shared by the booking funnel and the compliance quiz.
//!
//! A wizard walks through steps `1..=STEPS`. Leaving a step forwards is gated
//! by [`Flow::check`]; reaching the last step computes the outcome once. Going
//! back never validates and never touches data captured on earlier steps.

use std::collections::BTreeMap;
use std::fmt::Debug;

/// Why a field blocks its step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Required text was blank after trimming.
    Empty,
    /// Text is present but malformed.
    Invalid,
    /// A choice was left on its placeholder.
    Unselected,
    /// A yes/no question has no answer yet.
    Unanswered,
}

/// The data captured by one concrete wizard.
pub trait Flow: Default + Clone + Debug {
    type Field: Copy + Ord + Debug;
    type Outcome: Clone + PartialEq + Debug;

    /// Number of steps, the last one being the terminal result view.
    const STEPS: usize;

    /// Fields that keep `step` from being left forwards. Empty means complete.
    fn check(&self, step: usize) -> Vec<(Self::Field, FieldError)>;

    /// Terminal result. Only called once every gate before the last step passed.
    fn outcome(&self) -> Option<Self::Outcome>;
}

#[derive(Debug, Clone)]
pub struct Wizard<F: Flow> {
    step: usize,
    data: F,
    errors: BTreeMap<F::Field, FieldError>,
    result: Option<F::Outcome>,
}

impl<F: Flow> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Flow> Wizard<F> {
    pub fn new() -> Self {
        Self {
            step: 1,
            data: F::default(),
            errors: BTreeMap::new(),
            result: None,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn data(&self) -> &F {
        &self.data
    }

    pub fn result(&self) -> Option<&F::Outcome> {
        self.result.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    pub fn error(&self, field: F::Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &BTreeMap<F::Field, FieldError> {
        &self.errors
    }

    /// Records a value for `field`. A pending error on that field is dropped
    /// right away without re-validating; only `submit` validates again.
    pub fn select(&mut self, field: F::Field, edit: impl FnOnce(&mut F)) {
        if self.is_complete() {
            return;
        }
        edit(&mut self.data);
        self.errors.remove(&field);
    }

    /// Moves on when the current step is already complete. Used for steps that
    /// finish by a single choice, so no errors are recorded on refusal.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() || !self.data.check(self.step).is_empty() {
            return false;
        }
        self.forward();
        true
    }

    /// Validates the current step, replacing the recorded errors with the
    /// fresh result, and moves on only if nothing failed.
    pub fn submit(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.errors = self.data.check(self.step).into_iter().collect();
        if !self.errors.is_empty() {
            return false;
        }
        self.forward();
        true
    }

    pub fn go_back(&mut self) -> bool {
        if self.is_complete() || self.step <= 1 {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn forward(&mut self) {
        if self.step < F::STEPS {
            self.step += 1;
        }
        if self.step == F::STEPS && self.result.is_none() {
            self.result = self.data.outcome();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Signup {
        plan: Option<&'static str>,
        handle: String,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum SignupField {
        Plan,
        Handle,
    }

    impl Flow for Signup {
        type Field = SignupField;
        type Outcome = String;

        const STEPS: usize = 3;

        fn check(&self, step: usize) -> Vec<(SignupField, FieldError)> {
            match step {
                1 if self.plan.is_none() => vec![(SignupField::Plan, FieldError::Unselected)],
                2 if self.handle.trim().is_empty() => vec![(SignupField::Handle, FieldError::Empty)],
                _ => Vec::new(),
            }
        }

        fn outcome(&self) -> Option<String> {
            self.plan.map(|plan| format!("{}:{}", plan, self.handle))
        }
    }

    #[test]
    fn advance_refuses_incomplete_step_silently() {
        let mut wizard = Wizard::<Signup>::new();
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), 1);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn submit_records_errors_and_stays() {
        let mut wizard = Wizard::<Signup>::new();
        wizard.select(SignupField::Plan, |s| s.plan = Some("pro"));
        assert!(wizard.advance());

        assert!(!wizard.submit());
        assert_eq!(wizard.step(), 2);
        assert_eq!(wizard.error(SignupField::Handle), Some(FieldError::Empty));
    }

    #[test]
    fn editing_clears_error_without_revalidating() {
        let mut wizard = Wizard::<Signup>::new();
        wizard.select(SignupField::Plan, |s| s.plan = Some("pro"));
        wizard.advance();
        wizard.submit();

        // still blank, but the edit alone drops the flag
        wizard.select(SignupField::Handle, |s| s.handle = "   ".into());
        assert_eq!(wizard.error(SignupField::Handle), None);

        assert!(!wizard.submit());
        assert_eq!(wizard.error(SignupField::Handle), Some(FieldError::Empty));
    }

    #[test]
    fn terminal_step_computes_result_once() {
        let mut wizard = Wizard::<Signup>::new();
        wizard.select(SignupField::Plan, |s| s.plan = Some("pro"));
        wizard.advance();
        wizard.select(SignupField::Handle, |s| s.handle = "ada".into());
        assert!(wizard.submit());

        assert_eq!(wizard.step(), 3);
        assert_eq!(wizard.result(), Some(&"pro:ada".to_string()));

        // completed wizards are frozen until reset
        wizard.select(SignupField::Handle, |s| s.handle = "grace".into());
        assert!(!wizard.go_back());
        assert!(!wizard.submit());
        assert_eq!(wizard.result(), Some(&"pro:ada".to_string()));
        assert_eq!(wizard.data().handle, "ada");
    }

    #[test]
    fn go_back_keeps_data_and_stops_at_first_step() {
        let mut wizard = Wizard::<Signup>::new();
        assert!(!wizard.go_back());

        wizard.select(SignupField::Plan, |s| s.plan = Some("team"));
        wizard.advance();
        wizard.select(SignupField::Handle, |s| s.handle = "linus".into());
        assert!(wizard.go_back());

        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.data().plan, Some("team"));
        assert_eq!(wizard.data().handle, "linus");
    }

    #[test]
    fn reset_returns_to_a_fresh_wizard() {
        let mut wizard = Wizard::<Signup>::new();
        wizard.select(SignupField::Plan, |s| s.plan = Some("pro"));
        wizard.advance();
        wizard.submit();
        wizard.reset();

        assert_eq!(wizard.step(), 1);
        assert!(wizard.data().plan.is_none());
        assert!(wizard.errors().is_empty());
        assert!(wizard.result().is_none());
    }
}
