use thiserror::Error;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Username and password are required.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Check credentials.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoginError {
    #[error("Username and password are required.")]
    MissingCredentials,
    #[error("Invalid credentials (HTTP {status})")]
    Rejected { status: u16 },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Malformed login response: {0}")]
    Decode(String),
    #[error("Could not store session: {0}")]
    Storage(String),
    #[error("Could not leave the login page: {0}")]
    Navigation(String),
}

impl LoginError {
    pub fn is_validation(&self) -> bool {
        matches!(self, LoginError::MissingCredentials)
    }

    /// Text shown in the `#error` element. Every failure past validation
    /// collapses to the same message.
    pub fn user_message(&self) -> &'static str {
        if self.is_validation() {
            MISSING_CREDENTIALS_MESSAGE
        } else {
            LOGIN_FAILED_MESSAGE
        }
    }
}

impl From<gloo_net::Error> for LoginError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => LoginError::Decode(e.to_string()),
            other => LoginError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for LoginError {
    fn from(err: serde_json::Error) -> Self {
        LoginError::Decode(err.to_string())
    }
}
