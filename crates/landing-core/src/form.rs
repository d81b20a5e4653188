//! Contact form lifecycle: validate, then either reject with a message or
//! accept and hand over to the confirmation modal.

use crate::effects::{Deferred, Effect, Effects};
use regex_lite::Regex;
use smallvec::smallvec;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// Form control `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    /// Free text; some pages label it "project details".
    pub message: String,
}

impl FormSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn missing_fields(&self) -> Vec<FormField> {
        [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(f, _)| f)
        .collect()
    }
}

/// User-facing validation failures. `Display` is the notification text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<FormField>),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub require_email_format: bool,
}

/// Browser whitespace beyond ASCII: no-break and typographic spaces, line and
/// paragraph separators, and the byte-order mark. `\s` covers the ASCII set.
const WIDE_SPACE: &str =
    r"\x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}\x{feff}";

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        let part = format!(r"[^\s@{WIDE_SPACE}]+");
        Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Presence first (one combined error), then the optional format check.
pub fn validate(submission: &FormSubmission, policy: ValidationPolicy) -> Result<(), FormError> {
    let missing = submission.missing_fields();
    if !missing.is_empty() {
        return Err(FormError::MissingFields(missing));
    }
    if policy.require_email_format && !is_valid_email(&submission.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// Message prefilled when a visitor asks about a specific product.
pub fn interest_message(product: &str) -> String {
    format!(
        "Hi! I'm interested in purchasing \"{product}\". Could you please provide more information about the purchase process?"
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Rejected(FormError),
    Accepted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(FormError),
    /// Valid; the modal opens now.
    Accepted,
    /// Valid; the modal opens after the simulated latency.
    AcceptedPending,
    /// A previous submission is still waiting out its delay.
    Ignored,
}

pub struct ContactForm {
    policy: ValidationPolicy,
    submit_delay_ms: Option<u32>,
    phase: FormPhase,
    /// Last submitted values; kept on rejection, cleared on reset.
    draft: FormSubmission,
    pending: bool,
}

impl ContactForm {
    pub fn new(policy: ValidationPolicy, submit_delay_ms: Option<u32>) -> Self {
        Self {
            policy,
            submit_delay_ms,
            phase: FormPhase::Idle,
            draft: FormSubmission::default(),
            pending: false,
        }
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn draft(&self) -> &FormSubmission {
        &self.draft
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Validate a submit event. The default browser submission is always
    /// suppressed by the caller; nothing is sent anywhere.
    pub fn submit(&mut self, submission: FormSubmission) -> (SubmitOutcome, Effects) {
        if self.pending {
            log::debug!("[form] submit ignored, previous submission pending");
            return (SubmitOutcome::Ignored, Effects::new());
        }
        self.draft = submission;
        match validate(&self.draft, self.policy) {
            Err(e) => {
                log::info!("[form] rejected: {e}");
                self.phase = FormPhase::Rejected(e.clone());
                (SubmitOutcome::Rejected(e.clone()), smallvec![Effect::Alert(e.to_string())])
            }
            Ok(()) => {
                log::info!("[form] accepted");
                self.phase = FormPhase::Accepted;
                match self.submit_delay_ms {
                    Some(after_ms) => {
                        self.pending = true;
                        (
                            SubmitOutcome::AcceptedPending,
                            smallvec![Effect::Schedule {
                                after_ms,
                                event: Deferred::FinishSubmission,
                            }],
                        )
                    }
                    None => (SubmitOutcome::Accepted, Effects::new()),
                }
            }
        }
    }

    /// Clear the form after an accepted submission has opened the modal.
    pub fn reset(&mut self) -> Effects {
        self.pending = false;
        self.draft = FormSubmission::default();
        smallvec![Effect::ResetForm]
    }

    pub fn prefill_interest(&mut self, product: &str) -> Effects {
        let value = interest_message(product);
        self.draft.message = value.clone();
        smallvec![Effect::FillField {
            field: FormField::Message,
            value,
            focus: true,
        }]
    }
}
