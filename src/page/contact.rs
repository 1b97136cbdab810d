//! Contact form state machine
//!
//! ```text
//! Idle ──submit──▶ Submitting ──relay ok──▶ Success ─┐
//!   ▲                   │                             │
//!   │                   └──relay err──▶ Failure ──────┤
//!   └─────────────────────────────────────────────────┘
//! ```
//!
//! Success and Failure are transient: they produce a notification and the
//! form is immediately back in `Idle`. The relay call itself lives outside
//! this module; `begin_submit` hands out the message and `finish_submit`
//! takes the relay's answer.

use crate::relay::{RelayError, RelayMessage};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Focusable controls of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
    Send,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Message,
        FormField::Send,
    ];

    fn position(self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::Email => 1,
            FormField::Message => 2,
            FormField::Send => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
            FormField::Send => "Send Message",
        }
    }

    /// Hint shown in an empty field
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "your.email@example.com",
            FormField::Message => "Tell me about your project...",
            FormField::Send => "",
        }
    }
}

/// Persistent phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Transient result of a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure,
}

/// Toast style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Success,
    Destructive,
}

/// User-facing notification raised by a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NotificationVariant,
}

impl SubmitOutcome {
    pub fn notification(self) -> Notification {
        match self {
            SubmitOutcome::Success => Notification {
                title: "Message sent successfully!",
                description: "Thank you for reaching out. I'll get back to you soon.",
                variant: NotificationVariant::Success,
            },
            SubmitOutcome::Failure => Notification {
                title: "Failed to send message",
                description: "Please try again or contact me directly via email.",
                variant: NotificationVariant::Destructive,
            },
        }
    }
}

/// Field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Field is empty (or only whitespace)
    Missing(FormField),
    /// Email field does not look like an address
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            FieldError::Missing(field) => *field,
            FieldError::InvalidEmail => FormField::Email,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing(_) => write!(f, "Please fill out this field."),
            FieldError::InvalidEmail => write!(f, "Please enter an email address."),
        }
    }
}

impl std::error::Error for FieldError {}

/// Why a submit did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A relay call is already in flight
    AlreadySubmitting,
    /// A field failed validation
    Invalid(FieldError),
}

/// `type=email` syntax used by browsers
fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
            )
            .ok()
        })
        .as_ref()
}

pub fn is_valid_email(candidate: &str) -> bool {
    email_pattern().is_some_and(|pattern| pattern.is_match(candidate))
}

/// Contact form fields plus phase and focus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    phase: FormPhase,
    focus: FormField,
    hint: Option<FieldError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validation hint from the last blocked submit
    pub fn hint(&self) -> Option<FieldError> {
        self.hint
    }

    /// Current text of a field (`Send` has none)
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
            FormField::Send => "",
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            FormField::Send => None,
        }
    }

    /// Type a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            text.push(c);
            self.hint = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    /// Line break; only the message field is multi-line
    pub fn newline(&mut self) {
        if self.focus == FormField::Message {
            self.message.push('\n');
        }
    }

    /// First invalid field in tab order
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::Missing(FormField::Name));
        }
        if self.email.trim().is_empty() {
            return Err(FieldError::Missing(FormField::Email));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(FieldError::Missing(FormField::Message));
        }
        Ok(())
    }

    /// Idle → Submitting
    ///
    /// On success returns the message to hand to the relay, exactly once.
    /// An invalid field moves focus to it and leaves the phase at `Idle`.
    pub fn begin_submit(&mut self) -> Result<RelayMessage, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }

        if let Err(err) = self.validate() {
            self.focus = err.field();
            self.hint = Some(err);
            return Err(SubmitRejected::Invalid(err));
        }

        self.hint = None;
        self.phase = FormPhase::Submitting;
        Ok(RelayMessage {
            from_name: self.name.clone(),
            from_email: self.email.trim().to_string(),
            message: self.message.clone(),
        })
    }

    /// Submitting → Success | Failure → Idle
    ///
    /// Returns `None` when no submit was in flight (stale result).
    pub fn finish_submit(&mut self, result: &Result<(), RelayError>) -> Option<SubmitOutcome> {
        if !self.is_submitting() {
            return None;
        }
        self.phase = FormPhase::Idle;

        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.focus = FormField::Name;
                Some(SubmitOutcome::Success)
            }
            Err(_) => Some(SubmitOutcome::Failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Ada Lovelace".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "Let's build an engine.".to_string();
        form
    }

    #[test]
    fn test_success_path_clears_fields() {
        let mut form = filled();
        assert_eq!(form.phase(), FormPhase::Idle);

        let message = form.begin_submit().unwrap();
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(message.from_name, "Ada Lovelace");
        assert_eq!(message.from_email, "ada@example.com");

        let outcome = form.finish_submit(&Ok(()));
        assert_eq!(outcome, Some(SubmitOutcome::Success));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_failure_path_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();

        let outcome = form.finish_submit(&Err(RelayError::Rejected {
            status: 400,
            body: "bad".to_string(),
        }));

        assert_eq!(outcome, Some(SubmitOutcome::Failure));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.name, "Ada Lovelace");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, "Let's build an engine.");
    }

    #[test]
    fn test_not_configured_is_failure() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let outcome = form.finish_submit(&Err(RelayError::NotConfigured));
        assert_eq!(outcome, Some(SubmitOutcome::Failure));
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitting));
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn test_stale_result_ignored() {
        let mut form = filled();
        assert_eq!(form.finish_submit(&Ok(())), None);
        assert_eq!(form.name, "Ada Lovelace");
    }

    #[test]
    fn test_invalid_field_blocks_and_focuses() {
        let mut form = filled();
        form.email = "not-an-address".to_string();
        form.set_focus(FormField::Send);

        let rejected = form.begin_submit();
        assert_eq!(
            rejected,
            Err(SubmitRejected::Invalid(FieldError::InvalidEmail))
        );
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.focus(), FormField::Email);
        assert_eq!(form.hint(), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn test_email_sent_without_surrounding_whitespace() {
        let mut form = filled();
        form.email = "  ada@example.com \t".to_string();

        let message = form.begin_submit().unwrap();
        assert_eq!(message.from_email, "ada@example.com");
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(FieldError::Missing(FormField::Name)));

        let mut form = filled();
        form.message = "\n\n".to_string();
        assert_eq!(form.validate(), Err(FieldError::Missing(FormField::Message)));
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("space in@example.com"));
        assert!(!is_valid_email("trailing@dot."));
    }

    #[test]
    fn test_editing_targets_focused_field() {
        let mut form = ContactForm::new();
        for c in "Bo".chars() {
            form.insert_char(c);
        }
        form.focus_next();
        form.insert_char('x');
        form.backspace();
        form.focus_next();
        form.insert_char('h');
        form.newline();
        form.insert_char('i');

        assert_eq!(form.name, "Bo");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "h\ni");
    }

    #[test]
    fn test_newline_ignored_outside_message() {
        let mut form = ContactForm::new();
        form.newline();
        assert!(form.name.is_empty());

        form.set_focus(FormField::Send);
        form.insert_char('z');
        assert_eq!(form, {
            let mut expected = ContactForm::new();
            expected.set_focus(FormField::Send);
            expected
        });
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(FormField::Send.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Send);
    }

    #[test]
    fn test_notifications() {
        let ok = SubmitOutcome::Success.notification();
        assert_eq!(ok.title, "Message sent successfully!");
        assert_eq!(ok.variant, NotificationVariant::Success);

        let err = SubmitOutcome::Failure.notification();
        assert_eq!(err.title, "Failed to send message");
        assert_eq!(err.variant, NotificationVariant::Destructive);
    }
}
