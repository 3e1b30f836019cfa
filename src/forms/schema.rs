//! Declarative validation schemas

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Fields known to the authentication forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Password,
    RepeatPassword,
}

impl Field {
    /// The field's wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::RepeatPassword => "repeat_password",
        }
    }

    /// Parse a wire name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "repeat_password" => Some(Self::RepeatPassword),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single constraint on a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "arg", rename_all = "snake_case")]
pub enum Constraint {
    /// Value must be non-empty
    Required,
    /// Non-empty value must be a syntactically valid email address
    Email,
    /// Value must have at least this many characters
    MinLength(usize),
    /// Value must equal another field's value
    Matches(Field),
}

impl Constraint {
    /// Whether this constraint can be decided from the value alone
    pub fn is_single_value(&self) -> bool {
        !matches!(self, Self::Matches(_))
    }

    fn holds(&self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::Email => value.is_empty() || is_valid_email(value),
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::Matches(_) => true,
        }
    }
}

/// Email grammar of the HTML living standard's `input type=email`
fn is_valid_email(value: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("Failed to compile email regex")
    });
    regex.is_match(value)
}

/// A constraint together with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub constraint: Constraint,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(constraint: Constraint, message: &'static str) -> Self {
        Self {
            constraint,
            message,
        }
    }
}

/// One failed constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: Field,
    pub constraint: Constraint,
    pub message: String,
}

/// Field → violated constraints, in rule order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, Vec<Violation>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one violation
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, violation: Violation) {
        self.errors.entry(violation.field).or_default().push(violation);
    }

    /// Violations of `field`, empty when it passed
    pub fn get(&self, field: Field) -> &[Violation] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `field` has a violation
    pub fn has(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// The message shown next to `field`: its first violation
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).first().map(|v| v.message.as_str())
    }

    /// Failing fields, in declaration order of [`Field`]
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.errors.values().flatten()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, violations) in &self.errors {
            if let Some(violation) = violations.first() {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, violation.message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Read access to a form's values by field
pub trait FormValues {
    /// The value of `field`, `None` when the form has no such field
    fn value(&self, field: Field) -> Option<&str>;
}

const EMAIL_REQUIRED: &str = "Email is required !";
const EMAIL_INVALID: &str = "Invalid email !";
const PASSWORD_REQUIRED: &str = "Password should not be empty !";
const PASSWORD_TOO_SHORT: &str = "Password should be atleast 8 characters long !";
const REPEAT_PASSWORD_REQUIRED: &str = "Repeat Password should not be empty !";
const NAME_REQUIRED: &str = "Name is required !";

/// Message of the opt-in password equality rule
pub const PASSWORDS_MUST_MATCH: &str = "Passwords must match !";

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// An ordered set of per-field rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<(Field, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to `field`
    pub fn rule(mut self, field: Field, constraint: Constraint, message: &'static str) -> Self {
        let rule = Rule::new(constraint, message);
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some((_, rules)) => rules.push(rule),
            None => self.fields.push((field, vec![rule])),
        }
        self
    }

    /// Login form: email and password
    pub fn login() -> Self {
        Self::new()
            .rule(Field::Email, Constraint::Email, EMAIL_INVALID)
            .rule(Field::Email, Constraint::Required, EMAIL_REQUIRED)
            .rule(Field::Password, Constraint::Required, PASSWORD_REQUIRED)
            .rule(
                Field::Password,
                Constraint::MinLength(MIN_PASSWORD_LEN),
                PASSWORD_TOO_SHORT,
            )
    }

    /// Signup form. `repeat_password` is checked for presence and length
    /// only; chain [`Schema::require_match`] to compare it with `password`.
    pub fn signup() -> Self {
        Self::new()
            .rule(Field::Name, Constraint::Required, NAME_REQUIRED)
            .rule(Field::Email, Constraint::Email, EMAIL_INVALID)
            .rule(Field::Email, Constraint::Required, EMAIL_REQUIRED)
            .rule(Field::Password, Constraint::Required, PASSWORD_REQUIRED)
            .rule(
                Field::Password,
                Constraint::MinLength(MIN_PASSWORD_LEN),
                PASSWORD_TOO_SHORT,
            )
            .rule(
                Field::RepeatPassword,
                Constraint::Required,
                REPEAT_PASSWORD_REQUIRED,
            )
            .rule(
                Field::RepeatPassword,
                Constraint::MinLength(MIN_PASSWORD_LEN),
                PASSWORD_TOO_SHORT,
            )
    }

    /// Require `field` to equal `other`
    pub fn require_match(self, field: Field, other: Field) -> Self {
        self.rule(field, Constraint::Matches(other), PASSWORDS_MUST_MATCH)
    }

    /// Fields covered by this schema, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|(f, _)| *f)
    }

    /// Rules attached to `field`
    pub fn rules(&self, field: Field) -> &[Rule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Field-change validation: violations of the rules decidable from
    /// `value` alone. Cross-field rules are skipped.
    pub fn check(&self, field: Field, value: &str) -> Vec<Violation> {
        self.rules(field)
            .iter()
            .filter(|rule| rule.constraint.is_single_value() && !rule.constraint.holds(value))
            .map(|rule| violation(field, rule))
            .collect()
    }

    /// Submit-time validation over the full value set.
    ///
    /// A field the form does not carry validates as the empty string.
    pub fn validate<V: FormValues + ?Sized>(&self, values: &V) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, rules) in &self.fields {
            let value = values.value(*field).unwrap_or("");
            for rule in rules {
                let holds = match rule.constraint {
                    Constraint::Matches(other) => values.value(other).unwrap_or("") == value,
                    constraint => constraint.holds(value),
                };
                if !holds {
                    errors.add(violation(*field, rule));
                }
            }
        }

        errors.into_result()
    }
}

fn violation(field: Field, rule: &Rule) -> Violation {
    Violation {
        field,
        constraint: rule.constraint,
        message: rule.message.to_string(),
    }
}
