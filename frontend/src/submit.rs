use crate::api::{AuthClient, HttpAuthClient};
use crate::config::Config;
use crate::error::LoginError;
use crate::navigation::{BrowserRedirect, Redirect};
use crate::session::{persist, LocalSessionStore, SessionStore};
use common::{LoginRequest, Role};
use std::cell::RefCell;
use std::fmt;

/// Where a login attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// A username and password that both survived trimming.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn parse(username: &str, password: &str) -> Result<Self, LoginError> {
        let username = trim_input(username);
        let password = trim_input(password);
        if username.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn into_request(self, role: Role) -> LoginRequest {
        LoginRequest {
            username: self.username,
            password: self.password,
            role,
        }
    }
}

// Same set as JavaScript's `String.prototype.trim`, which includes the BOM.
fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What the form hands over when the user asks to sign in.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Phase and message shown by the form, plus the in-flight flag that keeps a
/// second submit from starting another request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginState {
    phase: LoginPhase,
    error: Option<&'static str>,
    in_flight: bool,
}

impl LoginState {
    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    fn begin(&mut self, attempt: &LoginAttempt) -> Option<Result<Credentials, LoginError>> {
        if self.in_flight {
            return None;
        }
        match Credentials::parse(&attempt.username, &attempt.password) {
            Ok(credentials) => {
                self.error = None;
                self.phase = LoginPhase::Submitting;
                self.in_flight = true;
                Some(Ok(credentials))
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Some(Err(e))
            }
        }
    }

    fn finish(&mut self, result: &Result<&'static str, LoginError>) {
        self.in_flight = false;
        match result {
            Ok(_) => self.phase = LoginPhase::Succeeded,
            Err(e) => {
                self.error = Some(e.user_message());
                self.phase = LoginPhase::Failed;
            }
        }
    }
}

pub struct LoginSubmitter<C, S, N> {
    login_url: String,
    client: C,
    store: S,
    redirect: N,
}

impl LoginSubmitter<HttpAuthClient, LocalSessionStore, BrowserRedirect> {
    pub fn browser(config: &Config) -> Self {
        Self::new(
            config.login_url.clone(),
            HttpAuthClient,
            LocalSessionStore,
            BrowserRedirect,
        )
    }
}

impl<C, S, N> LoginSubmitter<C, S, N>
where
    C: AuthClient,
    S: SessionStore,
    N: Redirect,
{
    pub fn new(login_url: impl Into<String>, client: C, store: S, redirect: N) -> Self {
        Self {
            login_url: login_url.into(),
            client,
            store,
            redirect,
        }
    }

    /// Sends one login request and, when the server accepts it, stores the
    /// session and leaves for the page of the selected role. Returns that page.
    pub async fn submit(&self, credentials: Credentials, role: Role) -> Result<&'static str, LoginError> {
        let username = credentials.username().to_string();
        log::info!("signing in {} as {}", username, role);

        match self.attempt(credentials, role).await {
            Ok(page) => {
                log::info!("{} signed in, redirecting to {}", username, page);
                Ok(page)
            }
            Err(e) => {
                log::warn!("login for {} failed: {}", username, e);
                Err(e)
            }
        }
    }

    /// Runs one form submission against `state`, calling `on_change` with a
    /// snapshot each time it moves. Returns `None` when a request is already
    /// in flight and the submission was ignored.
    pub async fn drive(
        &self,
        state: &RefCell<LoginState>,
        attempt: LoginAttempt,
        on_change: impl Fn(LoginState),
    ) -> Option<Result<&'static str, LoginError>> {
        let begun = state.borrow_mut().begin(&attempt);
        let credentials = match begun {
            None => {
                log::debug!("login already in flight, ignoring submit");
                return None;
            }
            Some(Err(e)) => {
                on_change(*state.borrow());
                return Some(Err(e));
            }
            Some(Ok(credentials)) => credentials,
        };
        on_change(*state.borrow());

        let result = self.submit(credentials, attempt.role).await;
        state.borrow_mut().finish(&result);
        on_change(*state.borrow());
        Some(result)
    }

    async fn attempt(&self, credentials: Credentials, role: Role) -> Result<&'static str, LoginError> {
        let payload = credentials.into_request(role);
        let session = self.client.login(&self.login_url, &payload).await?;

        persist(&self.store, &session)?;

        // The selected role decides the page, not the one echoed back.
        let page = role.page();
        self.redirect.redirect(page)?;
        Ok(page)
    }
}
