//! Form value types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::schema::{Field, FormValues, Schema, ValidationErrors};
use super::Form;

/// Login form values
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl FormValues for LoginForm {
    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            _ => None,
        }
    }
}

impl Form for LoginForm {
    fn schema() -> Schema {
        Schema::login()
    }
}

/// Signup form values
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

impl SignupForm {
    pub fn new(name: &str, email: &str, password: &str, repeat_password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            repeat_password: repeat_password.to_string(),
        }
    }

    /// Validation that also requires `repeat_password` to equal `password`
    pub fn validate_strict(&self) -> Result<(), ValidationErrors> {
        Schema::signup()
            .require_match(Field::RepeatPassword, Field::Password)
            .validate(self)
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("repeat_password", &"<redacted>")
            .finish()
    }
}

impl FormValues for SignupForm {
    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::RepeatPassword => Some(&self.repeat_password),
        }
    }
}

impl Form for SignupForm {
    fn schema() -> Schema {
        Schema::signup()
    }
}
