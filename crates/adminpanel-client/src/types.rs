use adminpanel_types::Employee;
use serde::{Deserialize, Serialize};

/// Connection settings for [`AdminClient`](crate::AdminClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix, e.g. `https://admin.example.com`
    pub base_url: String,
    /// Per-request timeout. `None` keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:5000".to_string(), timeout_secs: None }
    }
}

/// Supplies the bearer token attached to each request.
///
/// The session store lives outside this crate; the client only reads from it.
pub trait TokenSource: Send + Sync {
    /// Current token, or `None` to send the request unauthenticated.
    fn bearer_token(&self) -> Option<String>;
}

/// A token fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// No token at all; requests go out without `Authorization`.
    pub const fn anonymous() -> Self {
        Self(None)
    }
}

impl TokenSource for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.as_deref().map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
    }
}

/// Reads the token from an environment variable on every request.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl TokenSource for EnvToken {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.var).ok().map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
    }
}

/// Body of the pending-employee listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeList {
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// Error body shapes servers use for rejections.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub(crate) fn parse(body: &[u8]) -> Option<String> {
        let parsed: Self = serde_json::from_slice(body).ok()?;
        parsed.message.or(parsed.error).filter(|m| !m.trim().is_empty())
    }
}
