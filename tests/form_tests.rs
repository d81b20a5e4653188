// Host-side tests for contact form validation and its lifecycle.

use landing_core::form::*;
use landing_core::{Deferred, Effect};

const LENIENT: ValidationPolicy = ValidationPolicy {
    require_email_format: false,
};
const STRICT: ValidationPolicy = ValidationPolicy {
    require_email_format: true,
};

#[test]
fn email_pattern_accepts_local_at_domain_tld() {
    for ok in ["jo@example.com", "a@b.co", "first.last+tag@sub.domain.org"] {
        assert!(is_valid_email(ok), "{ok} should be valid");
    }
    for bad in ["not-an-email", "a@b", "@b.com", "a@.com", "a b@c.com", "a@b.c om", "a@@b.com", ""] {
        assert!(!is_valid_email(bad), "{bad} should be invalid");
    }
}

#[test]
fn email_pattern_rejects_unicode_whitespace() {
    for bad in [
        "jo\u{a0}x@example.com",
        "jo@exa\u{2003}mple.com",
        "jo@example.c\u{feff}om",
        "jo\u{3000}@example.com",
        "jo@example.\u{2028}com",
        "jo\tx@example.com",
    ] {
        assert!(!is_valid_email(bad), "{bad:?} should be invalid");
    }
    // non-space unicode is fine
    assert!(is_valid_email("jö@exämple.com"));
}

#[test]
fn presence_is_checked_before_format() {
    let sub = FormSubmission::new("", "nope", "hi");
    assert_eq!(
        validate(&sub, STRICT),
        Err(FormError::MissingFields(vec![FormField::Name]))
    );
}

#[test]
fn missing_fields_lists_every_empty_field() {
    let sub = FormSubmission::new("", "", "hi");
    assert_eq!(sub.missing_fields(), vec![FormField::Name, FormField::Email]);
    // whitespace counts as filled in
    assert!(FormSubmission::new(" ", "a@b.com", "hi").missing_fields().is_empty());
}

#[test]
fn format_check_only_where_required() {
    let sub = FormSubmission::new("Jo", "not-an-email", "Hello");
    assert_eq!(validate(&sub, LENIENT), Ok(()));
    assert_eq!(validate(&sub, STRICT), Err(FormError::InvalidEmail));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        FormError::MissingFields(vec![FormField::Email]).to_string(),
        "Please fill in all required fields."
    );
    assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address");
}

#[test]
fn rejected_submission_alerts_and_keeps_values() {
    let mut form = ContactForm::new(LENIENT, None);
    let (outcome, effects) = form.submit(FormSubmission::new("", "a@b.com", "hi"));

    assert!(matches!(outcome, SubmitOutcome::Rejected(FormError::MissingFields(_))));
    assert_eq!(
        effects.into_vec(),
        vec![Effect::Alert("Please fill in all required fields.".to_string())]
    );
    assert!(matches!(form.phase(), FormPhase::Rejected(_)));
    assert_eq!(form.draft().email, "a@b.com");
    assert_eq!(form.draft().message, "hi");
}

#[test]
fn invalid_email_is_rejected_on_strict_pages() {
    let mut form = ContactForm::new(STRICT, None);
    let (outcome, _) = form.submit(FormSubmission::new("Jo", "not-an-email", "Hello"));
    assert_eq!(outcome, SubmitOutcome::Rejected(FormError::InvalidEmail));
}

#[test]
fn valid_submission_is_accepted_immediately_without_delay() {
    let mut form = ContactForm::new(STRICT, None);
    let (outcome, effects) = form.submit(FormSubmission::new("Jo", "jo@example.com", "Hello"));
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert!(effects.is_empty());
    assert_eq!(form.phase(), &FormPhase::Accepted);

    assert_eq!(form.reset().into_vec(), vec![Effect::ResetForm]);
    assert_eq!(form.draft(), &FormSubmission::default());
}

#[test]
fn delayed_submission_schedules_and_ignores_repeats() {
    let mut form = ContactForm::new(LENIENT, Some(500));
    let (outcome, effects) = form.submit(FormSubmission::new("Jo", "jo@example.com", "Hello"));
    assert_eq!(outcome, SubmitOutcome::AcceptedPending);
    assert_eq!(
        effects.into_vec(),
        vec![Effect::Schedule {
            after_ms: 500,
            event: Deferred::FinishSubmission
        }]
    );
    assert!(form.is_pending());

    let (again, effects) = form.submit(FormSubmission::new("Jo", "jo@example.com", "Hello"));
    assert_eq!(again, SubmitOutcome::Ignored);
    assert!(effects.is_empty());

    form.reset();
    assert!(!form.is_pending());
}

#[test]
fn prefill_writes_and_focuses_the_message() {
    let mut form = ContactForm::new(LENIENT, None);
    let effects = form.prefill_interest("Gift Guide");
    match effects.first() {
        Some(Effect::FillField { field, value, focus }) => {
            assert_eq!(*field, FormField::Message);
            assert!(value.contains("\"Gift Guide\""));
            assert!(*focus);
        }
        other => panic!("expected FillField, got {:?}", other),
    }
    assert_eq!(form.draft().message, interest_message("Gift Guide"));
}

#[test]
fn phase_moves_from_idle_straight_to_a_verdict() {
    let mut form = ContactForm::new(STRICT, None);
    assert_eq!(form.phase(), &FormPhase::Idle);
    form.submit(FormSubmission::new("Jo", "bad", "Hello"));
    assert_eq!(form.phase(), &FormPhase::Rejected(FormError::InvalidEmail));
    form.submit(FormSubmission::new("Jo", "jo@example.com", "Hello"));
    assert_eq!(form.phase(), &FormPhase::Accepted);
}
