mod common;

#[cfg(test)]
pub mod form_tests {
    use sgn_site::api::{payload, SimulatedBackend};
    use sgn_site::common::*;
    use sgn_site::config::DEFAULT_TOAST_MESSAGE;
    use sgn_site::state::*;

    use super::common::*;

    fn filled_admission_form() -> AdmissionForm {
        let mut form = AdmissionForm::new();
        *form.fields_mut() = get_filled_inquiry();
        form
    }

    fn filled_contact_form() -> ContactForm {
        let mut form = ContactForm::default();
        *form.fields_mut() = get_filled_message();
        form
    }

    #[test]
    fn test_admission_submit_success() {
        let mut form = filled_admission_form();
        assert_eq!(form.state(), AdmissionState::Idle);

        assert_eq!(form.submit(&SimulatedBackend), Ok(AdmissionState::Submitted));
        assert!(form.is_submitted());
    }

    #[test]
    fn test_admission_submit_another_resets_fields() {
        let mut form = filled_admission_form();
        form.submit(&SimulatedBackend).unwrap();

        form.submit_another();

        assert_eq!(form.state(), AdmissionState::Idle);
        assert!(form.fields().is_empty());
    }

    #[test]
    fn test_admission_submit_fails_on_missing_field() {
        let mut form = filled_admission_form();
        form.fields_mut().phone.clear();

        assert_eq!(
            form.submit(&SimulatedBackend),
            Err(FormError::MissingField("phone"))
        );
        assert_eq!(form.state(), AdmissionState::Idle);
        assert_eq!(form.fields().email, get_filled_inquiry().email);
    }

    #[test]
    fn test_admission_submit_fails_on_rejecting_backend() {
        let mut form = filled_admission_form();
        let result = form.submit(&RejectingBackend);

        assert!(matches!(result, Err(FormError::Submit(SubmitError::Rejected(_)))));
        assert_eq!(form.state(), AdmissionState::Idle);
    }

    #[test]
    fn test_contact_submit_disables_until_complete() {
        let mut form = filled_contact_form();
        assert!(!form.is_submit_disabled());

        let ticket = form.submit().unwrap();
        assert_eq!(form.state(), ContactState::Submitting);
        assert!(form.is_submit_disabled());
        assert!(form.toast().is_none());

        let toast = form.complete(ticket, &SimulatedBackend).unwrap().unwrap();
        assert_eq!(form.state(), ContactState::Idle);
        assert!(!form.is_submit_disabled());
        assert_eq!(
            toast.message(),
            "Request sent successfully! We'll get back to you soon."
        );
        assert_eq!(form.toast(), Some(&toast));
    }

    #[test]
    fn test_contact_submit_fails_while_submitting() {
        let mut form = filled_contact_form();
        let ticket = form.submit().unwrap();

        assert_eq!(form.submit(), Err(FormError::AlreadySubmitting));

        // The first submission still completes normally.
        assert!(form.complete(ticket, &SimulatedBackend).unwrap().is_some());
    }

    #[test]
    fn test_contact_submit_fails_on_missing_field() {
        let mut form = filled_contact_form();
        form.fields_mut().message = "  ".into();

        assert_eq!(form.submit(), Err(FormError::MissingField("message")));
        assert_eq!(form.state(), ContactState::Idle);
    }

    #[test]
    fn test_contact_toast_dismissed_manually() {
        let mut form = filled_contact_form();
        let ticket = form.submit().unwrap();
        form.complete(ticket, &SimulatedBackend).unwrap();

        form.dismiss_toast();
        assert!(form.toast().is_none());
    }

    #[test]
    fn test_contact_toast_expires() {
        let mut form = filled_contact_form();
        let ticket = form.submit().unwrap();
        let toast = form.complete(ticket, &SimulatedBackend).unwrap().unwrap();

        assert!(form.expire_toast(toast.id()));
        assert!(form.toast().is_none());
        assert!(!form.expire_toast(toast.id()));
    }

    #[test]
    fn test_contact_stale_expiry_keeps_newer_toast() {
        let mut form = filled_contact_form();
        let first = form.submit().unwrap();
        let old = form.complete(first, &SimulatedBackend).unwrap().unwrap();

        let second = form.submit().unwrap();
        let new = form.complete(second, &SimulatedBackend).unwrap().unwrap();
        assert_ne!(old.id(), new.id());

        assert!(!form.expire_toast(old.id()));
        assert_eq!(form.toast(), Some(&new));
    }

    #[test]
    fn test_contact_cancel_drops_late_completion() {
        let mut form = filled_contact_form();
        let ticket = form.submit().unwrap();

        form.cancel();
        assert_eq!(form.state(), ContactState::Idle);

        assert_eq!(form.complete(ticket, &SimulatedBackend), Ok(None));
        assert!(form.toast().is_none());
    }

    #[test]
    fn test_contact_complete_fails_on_rejecting_backend() {
        let mut form = filled_contact_form();
        let ticket = form.submit().unwrap();

        let result = form.complete(ticket, &RejectingBackend);

        assert!(matches!(result, Err(FormError::Submit(_))));
        assert_eq!(form.state(), ContactState::Idle);
        assert!(form.toast().is_none());
    }

    #[test]
    fn test_contact_custom_toast_message() {
        let mut form = ContactForm::new("Thanks!");
        *form.fields_mut() = get_filled_message();
        let ticket = form.submit().unwrap();
        let toast = form.complete(ticket, &SimulatedBackend).unwrap().unwrap();
        assert_eq!(toast.message(), "Thanks!");
        assert_ne!(toast.message(), DEFAULT_TOAST_MESSAGE);
    }

    #[test]
    fn test_admission_payload_uses_grade_slug() {
        let body = payload(&get_filled_inquiry()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["parent_name"], "Harpreet Sandhu");
        assert_eq!(json["email"], "harpreet@example.com");
        assert_eq!(json["grade"], "primary");
    }

    #[test]
    fn test_admission_payload_without_grade() {
        let mut inquiry = get_filled_inquiry();
        inquiry.grade = None;
        let json: serde_json::Value = serde_json::from_str(&payload(&inquiry).unwrap()).unwrap();
        assert!(json["grade"].is_null());
    }

    #[test]
    fn test_contact_payload_carries_every_field() {
        let json: serde_json::Value =
            serde_json::from_str(&payload(&get_filled_message()).unwrap()).unwrap();
        assert_eq!(json["name"], "Gurleen Dhillon");
        assert_eq!(json["subject"], "Campus visit");
        assert_eq!(json["message"], "Could we schedule a tour next Saturday?");
    }
}
