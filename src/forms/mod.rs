//! Login and signup forms
//!
//! Validation is a pure function from values to a [`ValidationErrors`] map.
//! Submission is delegated to a [`SubmitHandler`] and only happens once the
//! values validate.

mod schema;
mod types;

use async_trait::async_trait;
use log::info;
use std::fmt::Debug;

use crate::error::{Error, Result};

pub use schema::*;
pub use types::*;

/// A form with a fixed validation schema
pub trait Form: FormValues + Debug + Send + Sync {
    /// The rules applied on submit and on field change
    fn schema() -> Schema
    where
        Self: Sized;

    /// Validate every field
    fn validate(&self) -> std::result::Result<(), ValidationErrors>
    where
        Self: Sized,
    {
        Self::schema().validate(self)
    }

    /// Validate one field on change
    fn check_field(field: Field, value: &str) -> Vec<Violation>
    where
        Self: Sized,
    {
        Self::schema().check(field, value)
    }
}

/// Receives validated form values
#[async_trait]
pub trait SubmitHandler<F: Form>: Send + Sync {
    type Output: Send;

    async fn submit(&self, form: &F) -> Result<Self::Output>;
}

/// Handler that only logs the submitted values
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitHandler;

#[async_trait]
impl<F: Form + 'static> SubmitHandler<F> for LogSubmitHandler {
    type Output = ();

    async fn submit(&self, form: &F) -> Result<()> {
        info!("Form submitted: {:?}", form);
        Ok(())
    }
}

/// Validate `form` and pass it to `handler`.
///
/// Invalid values stop here with [`Error::Validation`]; the handler is not
/// called.
pub async fn submit<F, H>(form: &F, handler: &H) -> Result<H::Output>
where
    F: Form + 'static,
    H: SubmitHandler<F> + ?Sized,
{
    form.validate().map_err(Error::Validation)?;
    handler.submit(form).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingHandler {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SubmitHandler<LoginForm> for CountingHandler {
        type Output = String;

        async fn submit(&self, form: &LoginForm) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(form.email.clone())
        }
    }

    #[test]
    fn emails_without_at_sign_fail_with_format_error() {
        for email in ["plainaddress", "user.example.com", "a", "user at example.com"] {
            let errors = LoginForm::new(email, "longenough1").validate().unwrap_err();
            assert_eq!(errors.message(Field::Email), Some("Invalid email !"));

            let errors = SignupForm::new("Ann", email, "longenough1", "longenough1")
                .validate()
                .unwrap_err();
            assert_eq!(errors.message(Field::Email), Some("Invalid email !"));
        }
    }

    #[test]
    fn short_passwords_fail_regardless_of_other_fields() {
        for password in ["", "a", "1234567", "seven77"] {
            let errors = LoginForm::new("user@example.com", password).validate().unwrap_err();
            assert!(errors.has(Field::Password));
            assert!(errors
                .get(Field::Password)
                .iter()
                .any(|v| v.constraint == Constraint::MinLength(8)));

            let errors = SignupForm::new("Ann", "user@example.com", password, "longenough1")
                .validate()
                .unwrap_err();
            assert!(errors.has(Field::Password));
        }
    }

    #[test]
    fn valid_login_passes() {
        assert!(LoginForm::new("user@example.com", "12345678").validate().is_ok());
    }

    #[test]
    fn empty_signup_reports_every_field() {
        let errors = SignupForm::default().validate().unwrap_err();
        assert_eq!(errors.message(Field::Name), Some("Name is required !"));
        assert_eq!(errors.message(Field::Email), Some("Email is required !"));
        assert_eq!(
            errors.message(Field::Password),
            Some("Password should not be empty !")
        );
        assert_eq!(
            errors.message(Field::RepeatPassword),
            Some("Repeat Password should not be empty !")
        );
        assert_eq!(errors.get(Field::RepeatPassword).len(), 2);
    }

    #[test]
    fn mismatched_repeat_password_passes_default_schema() {
        let form = SignupForm::new("Ann", "ann@example.com", "longenough1", "different1");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn mismatched_repeat_password_fails_strict_schema() {
        let form = SignupForm::new("Ann", "ann@example.com", "longenough1", "different1");
        let errors = form.validate_strict().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::RepeatPassword), Some(PASSWORDS_MUST_MATCH));

        let form = SignupForm::new("Ann", "ann@example.com", "longenough1", "longenough1");
        assert!(form.validate_strict().is_ok());
    }

    #[test]
    fn check_field_uses_form_schema() {
        assert_eq!(
            SignupForm::check_field(Field::Name, "")[0].message,
            "Name is required !"
        );
        assert!(LoginForm::check_field(Field::Name, "").is_empty());
    }

    #[test]
    fn debug_redacts_passwords() {
        let printed = format!("{:?}", SignupForm::new("Ann", "a@b.c", "secret123", "secret123"));
        assert!(!printed.contains("secret123"));
        assert!(printed.contains("a@b.c"));
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_handler() {
        let handler = CountingHandler::default();
        let err = submit(&LoginForm::new("nope", "short"), &handler)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        let errors = err.validation_errors().unwrap();
        assert!(errors.has(Field::Email));
        assert!(errors.has(Field::Password));
        assert_eq!(handler.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_form_is_handed_over() {
        let handler = CountingHandler::default();
        let out = submit(&LoginForm::new("user@example.com", "12345678"), &handler)
            .await
            .unwrap();

        assert_eq!(out, "user@example.com");
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn log_handler_accepts_valid_signup() {
        let form = SignupForm::new("Ann", "ann@example.com", "longenough1", "longenough1");
        assert!(submit(&form, &LogSubmitHandler).await.is_ok());
    }
}
