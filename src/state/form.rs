#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Severity of a user-visible form message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// An inline message displayed under a form, tagged with how it should
/// be styled. Styling never inspects the message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }
}

/// UI state for one form: a record of input fields plus the ephemeral
/// message and submission flag around it.
///
/// The login and register forms each own an independent `FormState`;
/// nothing is shared between them. `submitting` is true only between
/// submission start and the resolution of the associated request.
#[derive(Clone, Debug, Default)]
pub struct FormState<F> {
    pub fields: F,
    pub feedback: Option<Feedback>,
    pub submitting: bool,
}

impl<F> FormState<F> {
    /// Apply a field edit. Any displayed feedback is dismissed; an
    /// in-flight submission is unaffected.
    pub fn edit(&mut self, apply: impl FnOnce(&mut F)) {
        apply(&mut self.fields);
        self.feedback = None;
    }

    /// Enter the submitting phase: flag raised, previous feedback
    /// cleared.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.feedback = None;
    }

    /// Record a failure that never started a submission, such as a
    /// validation error. The submitting flag is untouched.
    pub fn reject(&mut self, text: impl Into<String>) {
        self.feedback = Some(Feedback::error(text));
    }
}
