// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================

use std::fmt;

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::config::BACKEND_URL;
use crate::models::{AdminSession, Ticket};

/// Failure of a backend call. `Http` keeps the optional human-readable
/// `message` field the backend puts in JSON error bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, message: Option<String> },
    Parse(String),
}

impl ApiError {
    /// Text to show the user: the server-provided message when the response
    /// carried one, otherwise the caller's fallback.
    pub fn display_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } if !message.is_empty() => message,
            _ => fallback,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "Network error: {detail}"),
            ApiError::Http {
                status,
                message: Some(message),
            } => write!(f, "HTTP {status}: {message}"),
            ApiError::Http {
                status,
                message: None,
            } => write!(f, "HTTP {status}"),
            ApiError::Parse(detail) => write!(f, "Parse error: {detail}"),
        }
    }
}

#[derive(Serialize)]
struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// API client - HTTP communication only, no business logic.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Fetch a single ticket with its embedded flight.
    pub async fn get_ticket_by_id(&self, id: &str) -> Result<Ticket, ApiError> {
        let url = format!("{}/api/tickets/{}", self.base_url, id);

        log::info!("🎫 Fetching ticket: {}", id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<Ticket>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Authenticate an administrator. The returned payload is opaque to the
    /// client and stored as-is.
    pub async fn login(&self, username: &str, password: &str) -> Result<AdminSession, ApiError> {
        let url = format!("{}/api/admin/login", self.base_url);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Logging in as: {}", username);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<AdminSession>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        ApiError::Http { status, message }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Http {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.display_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn missing_message_falls_back() {
        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.display_message("Login failed"), "Login failed");
    }

    #[test]
    fn empty_message_falls_back() {
        let err = ApiError::Http {
            status: 400,
            message: Some(String::new()),
        };
        assert_eq!(err.display_message("Login failed"), "Login failed");
    }

    #[test]
    fn network_error_uses_fallback() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(
            err.display_message("Failed to load booking details"),
            "Failed to load booking details"
        );
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = ApiError::Http {
            status: 404,
            message: Some("Ticket not found".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 404: Ticket not found");
    }
}
