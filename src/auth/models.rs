//! Authentication form data models

use serde::{Deserialize, Serialize};

use super::validators::PasswordStrength;

/// Which flavor of the form is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "signin",
            AuthMode::SignUp => "signup",
        }
    }
}

/// Derived email state; Unknown while the field is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailValidity {
    Unknown,
    Valid,
    Invalid,
}

/// Submission lifecycle of the current attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Submission {
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl Submission {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Submission::InFlight)
    }
}

/// Editable fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    ConfirmPassword,
    FullName,
}

/// In-memory state of the authentication form.
///
/// Owned by the controller; the presentation layer only reads snapshots.
/// `confirm_password` and `full_name` are only meaningful in SignUp mode but
/// keep their values across a mode toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub email_validity: EmailValidity,
    pub password_strength: PasswordStrength,
    pub submission: Submission,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::SignIn,
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            full_name: String::new(),
            email_validity: EmailValidity::Unknown,
            password_strength: PasswordStrength::Empty,
            submission: Submission::Idle,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Authenticated identity returned by the provider.
///
/// Token refresh and session lifetime stay with the provider; the id token is
/// carried only so the shell can hand it to follow-up requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    #[serde(skip_serializing)]
    pub id_token: String,
}
