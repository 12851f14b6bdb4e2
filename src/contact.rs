use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stand-in latency for the message delivery round trip.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "Email address",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Subject)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("a message is already being sent")]
    AlreadySubmitting,
    #[error("couldn't send message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactMessage,
    focused: Option<Field>,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// The form is replaced by the confirmation only once a message went out.
    pub fn is_sent(&self) -> bool {
        self.status == SubmitStatus::Sent
    }

    /// Inline error shown under the fields, cleared by the next edit.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        *self.fields.get_mut(field) = value.into();
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self, field: Field) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused == Some(field)
    }

    /// Floating labels sit above the input while it is focused or filled in.
    pub fn is_label_raised(&self, field: Field) -> bool {
        self.is_focused(field) || !self.value(field).is_empty()
    }

    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        for field in Field::ALL.into_iter().filter(Field::is_required) {
            if self.value(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_valid_email(self.value(Field::Email)) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(ContactMessage {
            name: self.fields.name.trim().to_string(),
            email: self.fields.email.trim().to_string(),
            subject: self.fields.subject.trim().to_string(),
            message: self.fields.message.trim().to_string(),
        })
    }

    /// Moves to `Submitting` and hands back the message to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        match self.validate() {
            Ok(msg) => {
                self.status = SubmitStatus::Submitting;
                Ok(msg)
            }
            Err(e) => {
                self.status = SubmitStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Applies the delivery result. Fields are only cleared on success.
    pub fn complete(&mut self, result: Result<(), ContactError>) {
        if !self.is_submitting() {
            log::warn!("contact form: delivery result arrived while not submitting");
            return;
        }
        match result {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.focused = None;
                self.status = SubmitStatus::Sent;
            }
            Err(e) => {
                log::error!("contact form: {e}");
                self.status = SubmitStatus::Failed(e.to_string());
            }
        }
    }

    /// "Send another message".
    pub fn reset(&mut self) {
        if !self.is_submitting() {
            self.status = SubmitStatus::Idle;
        }
    }
}

/// Simulated delivery; a real endpoint would replace this.
pub fn deliver(message: &ContactMessage) -> Result<(), ContactError> {
    log::info!(
        "contact form: delivering message from {} <{}> ({} chars)",
        message.name,
        message.email,
        message.message.chars().count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada Lovelace");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "Hello");
        form.set(Field::Message, "Let's build an engine.");
        form
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("  a.b+c@mail.example.org "));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada@example..com"));
        assert!(!is_valid_email("a da@example.com"));
    }

    #[test]
    fn test_missing_fields_never_submit() {
        let mut form = filled();
        form.set(Field::Message, "   ");
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(Field::Message))
        );
        assert_eq!(
            form.status(),
            &SubmitStatus::Failed("Message is required".to_string())
        );
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
    }

    #[test]
    fn test_subject_is_optional() {
        let mut form = filled();
        form.set(Field::Subject, "");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        let msg = form.begin_submit().unwrap();
        assert_eq!(msg.email, "ada@example.com");
        assert!(form.is_submitting());
        form.complete(deliver(&msg));
        assert_eq!(form.status(), &SubmitStatus::Sent);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
        form.reset();
        assert_eq!(form.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete(Err(ContactError::Delivery("timeout".to_string())));
        assert_eq!(
            form.status(),
            &SubmitStatus::Failed("couldn't send message: timeout".to_string())
        );
        assert_eq!(form.value(Field::Email), "ada@example.com");
        // editing clears the error, resubmitting is allowed
        form.set(Field::Subject, "Hello again");
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
        assert!(form.is_submitting());
        // fields are frozen while in flight
        form.set(Field::Name, "Someone else");
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
    }

    #[test]
    fn test_late_completion_ignored() {
        let mut form = filled();
        form.complete(Ok(()));
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
    }

    #[test]
    fn test_editing_after_error_keeps_form_and_focus() {
        let mut form = ContactForm::new();
        form.focus(Field::Email);
        form.set(Field::Email, "ada");
        assert!(form.begin_submit().is_err());
        assert!(form.error().is_some());
        assert!(!form.is_sent());

        form.set(Field::Email, "ada@");
        assert_eq!(form.error(), None);
        assert_eq!(form.status(), &SubmitStatus::Idle);
        // the same form stays up, so the field being typed in keeps focus
        assert!(!form.is_sent());
        assert!(form.is_focused(Field::Email));
        assert_eq!(form.value(Field::Email), "ada@");
    }

    #[test]
    fn test_focus_and_floating_labels() {
        let mut form = ContactForm::new();
        assert!(!form.is_label_raised(Field::Email));
        form.focus(Field::Email);
        assert!(form.is_focused(Field::Email));
        assert!(form.is_label_raised(Field::Email));
        form.blur(Field::Name);
        assert!(form.is_focused(Field::Email));
        form.blur(Field::Email);
        assert!(!form.is_label_raised(Field::Email));
        form.set(Field::Email, "x");
        assert!(form.is_label_raised(Field::Email));
    }
}
