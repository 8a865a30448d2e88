use crate::error::LoginError;
use async_trait::async_trait;
use common::{ErrorDetail, LoginRequest, LoginResponse};
use gloo_net::http::Request;

/// Talks to the authentication endpoint.
#[async_trait(?Send)]
pub trait AuthClient {
    async fn login(&self, url: &str, payload: &LoginRequest) -> Result<LoginResponse, LoginError>;
}

/// `fetch`-backed client used in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpAuthClient;

#[async_trait(?Send)]
impl AuthClient for HttpAuthClient {
    async fn login(&self, url: &str, payload: &LoginRequest) -> Result<LoginResponse, LoginError> {
        let resp = Request::post(url)
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(payload)?)?
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        interpret_response(status, &body)
    }
}

/// Turns a raw status and body into a session, or the reason there is none.
pub fn interpret_response(status: u16, body: &str) -> Result<LoginResponse, LoginError> {
    if !(200..300).contains(&status) {
        if let Some(detail) = ErrorDetail::parse(body) {
            log::debug!("login rejected by server: {}", detail);
        }
        return Err(LoginError::Rejected { status });
    }

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        let resp = interpret_response(
            200,
            r#"{"access_token":"T","token_type":"bearer","role":"doctor"}"#,
        )
        .unwrap();
        assert_eq!(resp.access_token, "T");
        assert_eq!(resp.role, "doctor");
    }

    #[test]
    fn test_unauthorized_is_rejected() {
        let err = interpret_response(401, r#"{"detail":"Invalid password"}"#).unwrap_err();
        assert_eq!(err, LoginError::Rejected { status: 401 });
        assert_eq!(err.user_message(), "Login failed. Check credentials.");
    }

    #[test]
    fn test_role_mismatch_is_rejected() {
        let err = interpret_response(403, r#"{"detail":"Role mismatch"}"#).unwrap_err();
        assert_eq!(err, LoginError::Rejected { status: 403 });
    }

    #[test]
    fn test_server_error_without_json_is_rejected() {
        let err = interpret_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(err, LoginError::Rejected { status: 500 });
    }

    #[test]
    fn test_malformed_success_body() {
        let err = interpret_response(200, "not json").unwrap_err();
        assert!(matches!(err, LoginError::Decode(_)));
    }

    #[test]
    fn test_success_body_missing_token() {
        let err = interpret_response(200, r#"{"role":"doctor"}"#).unwrap_err();
        assert!(matches!(err, LoginError::Decode(_)));
    }
}
