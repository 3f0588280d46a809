use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
}

/// Identity provider error codes the login form distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthErrorCode {
    UserNotFound,
    WrongPassword,
    InvalidEmail,
    UserDisabled,
    TooManyRequests,
    Other(String),
}

impl AuthErrorCode {
    /// Parses a provider code, with or without the `auth/` namespace.
    pub fn from_code(code: &str) -> Self {
        let bare = code.strip_prefix("auth/").unwrap_or(code);
        match bare {
            "user-not-found" => Self::UserNotFound,
            "wrong-password" => Self::WrongPassword,
            "invalid-email" => Self::InvalidEmail,
            "user-disabled" => Self::UserDisabled,
            "too-many-requests" => Self::TooManyRequests,
            _ => Self::Other(code.to_string()),
        }
    }

    /// Message shown under the login form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UserNotFound | Self::WrongPassword => "Invalid email or password.",
            Self::InvalidEmail => "Invalid email format.",
            Self::UserDisabled => "This account has been disabled.",
            Self::TooManyRequests => {
                "Too many unsuccessful login attempts. Please try again later."
            }
            Self::Other(_) => "An error occurred during login. Please try again.",
        }
    }
}

/// Failure reported by the identity provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Authentication failed ({code:?}): {message}")]
pub struct AuthError {
    pub code: AuthErrorCode,
    pub message: String,
}

impl AuthError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: AuthErrorCode::from_code(code),
            message: message.into(),
        }
    }
}
