//! Session resolution against the external authentication backend.
//!
//! ARCHITECTURE
//! ============
//! The portal never issues or validates tokens itself. Every session fact
//! comes from one backend call: present the access token, get the user back
//! or not. When the access token has expired and a refresh token is
//! available, the resolver exchanges it once and reports the new pair so
//! callers can sync cookies onto the outgoing response.
//!
//! TRADE-OFFS
//! ==========
//! The refresh retry is single-shot. A refresh token the backend rejects
//! means signed-out, not an error; only transport failures and unexpected
//! backend statuses surface as `SessionError`.

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("auth backend error: {0}")]
    Backend(String),
    #[error("auth backend request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the external authentication backend.
///
/// Holds the backend base URL, the public (anon) API key sent with every
/// request, and a shared HTTP client.
#[derive(Debug, Clone)]
pub struct AuthBackend {
    base_url: String,
    anon_key: String,
    http: reqwest::Client,
}

impl AuthBackend {
    #[must_use]
    pub fn new(base_url: String, anon_key: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_owned();
        Self { base_url, anon_key, http: reqwest::Client::new() }
    }

    /// Load from `AUTH_BACKEND_URL` and `AUTH_ANON_KEY`.
    /// Returns `None` if either is missing; startup treats that as fatal.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("AUTH_BACKEND_URL").ok()?;
        let anon_key = std::env::var("AUTH_ANON_KEY").ok()?;
        Some(Self::new(base_url, anon_key))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.base_url)
    }

    fn token_endpoint(&self, grant_type: &str) -> String {
        format!("{}/auth/v1/token?grant_type={grant_type}", self.base_url)
    }

    fn signup_endpoint(&self) -> String {
        format!("{}/auth/v1/signup", self.base_url)
    }

    fn logout_endpoint(&self) -> String {
        format!("{}/auth/v1/logout", self.base_url)
    }

    /// Build the redirect-out URL for the backend's OAuth authorize flow.
    /// The callback exchange is owned entirely by the backend; this server
    /// only ever sends the browser here.
    #[must_use]
    pub fn authorize_url(&self, provider: &str, redirect_to: &str) -> String {
        format!(
            "{}/auth/v1/authorize?provider={provider}&redirect_to={redirect_to}",
            self.base_url
        )
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Access/refresh token pair issued by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds, when the backend reports one.
    pub expires_in: Option<i64>,
}

/// Display fields for the signed-in user. Any field except `id` may be
/// absent; the backend owns the canonical record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// A resolved session: the token that proved it, the user it belongs to,
/// and the refreshed pair when the resolver had to exchange a refresh token.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user: UserProfile,
    /// `Some` when the access token was refreshed during resolution; the
    /// caller must sync these onto the response cookies.
    pub refreshed: Option<TokenPair>,
}

/// Successful credential grant: tokens plus the user they belong to.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub tokens: TokenPair,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct BackendUser {
    id: Uuid,
    email: Option<String>,
    #[serde(default)]
    user_metadata: ProfileMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct ProfileMetadata {
    first_name: Option<String>,
    last_name: Option<String>,
    avatar_url: Option<String>,
}

impl From<BackendUser> for UserProfile {
    fn from(user: BackendUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.user_metadata.first_name,
            last_name: user.user_metadata.last_name,
            avatar_url: user.user_metadata.avatar_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GrantResponse {
    access_token: String,
    refresh_token: String,
    expires_in: Option<i64>,
    user: BackendUser,
}

impl From<GrantResponse> for SignedIn {
    fn from(grant: GrantResponse) -> Self {
        Self {
            tokens: TokenPair {
                access_token: grant.access_token,
                refresh_token: grant.refresh_token,
                expires_in: grant.expires_in,
            },
            user: grant.user.into(),
        }
    }
}

/// Error payload shape used by the backend. Field names vary by endpoint,
/// so all known spellings are tried before falling back to the status code.
#[derive(Debug, Default, Deserialize)]
struct BackendErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    error: Option<String>,
}

fn backend_error_message(status: u16, body: &str) -> String {
    let parsed: BackendErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.error)
        .unwrap_or_else(|| format!("auth backend returned status {status}"))
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Resolve the current session from whatever tokens the request carried.
///
/// Tries the access token first; on a 401/403 falls back to a single
/// refresh-token exchange. Absent or rejected tokens yield `Ok(None)`.
///
/// # Errors
///
/// Returns an error only for transport failures or unexpected backend
/// statuses. Callers guarding routes should treat that as signed-out.
pub async fn resolve_session(
    auth: &AuthBackend,
    access_token: Option<&str>,
    refresh_token: Option<&str>,
) -> Result<Option<Session>, SessionError> {
    if let Some(token) = access_token {
        if let Some(user) = fetch_user(auth, token).await? {
            return Ok(Some(Session { access_token: token.to_owned(), user, refreshed: None }));
        }
    }

    let Some(refresh) = refresh_token else {
        return Ok(None);
    };

    match exchange_refresh_token(auth, refresh).await? {
        Some(signed) => Ok(Some(Session {
            access_token: signed.tokens.access_token.clone(),
            user: signed.user,
            refreshed: Some(signed.tokens),
        })),
        None => Ok(None),
    }
}

/// Look up the user behind an access token. `Ok(None)` means the backend
/// rejected the token (expired or revoked).
async fn fetch_user(auth: &AuthBackend, access_token: &str) -> Result<Option<UserProfile>, SessionError> {
    let resp = auth
        .http
        .get(auth.user_endpoint())
        .header("apikey", &auth.anon_key)
        .bearer_auth(access_token)
        .send()
        .await?;

    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Ok(None);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SessionError::Backend(backend_error_message(status.as_u16(), &body)));
    }

    let user: BackendUser = resp.json().await?;
    Ok(Some(user.into()))
}

/// Exchange a refresh token for a new token pair. `Ok(None)` means the
/// backend no longer accepts the refresh token.
async fn exchange_refresh_token(auth: &AuthBackend, refresh_token: &str) -> Result<Option<SignedIn>, SessionError> {
    let resp = auth
        .http
        .post(auth.token_endpoint("refresh_token"))
        .header("apikey", &auth.anon_key)
        .json(&serde_json::json!({ "refresh_token": refresh_token }))
        .send()
        .await?;

    let status = resp.status();
    if status.is_client_error() {
        return Ok(None);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SessionError::Backend(backend_error_message(status.as_u16(), &body)));
    }

    let grant: GrantResponse = resp.json().await?;
    Ok(Some(grant.into()))
}

/// Password grant. Credential rejections carry the backend's own message so
/// the UI can show it inline.
///
/// # Errors
///
/// `InvalidCredentials` for 4xx responses, `Backend`/`Http` otherwise.
pub async fn sign_in(auth: &AuthBackend, email: &str, password: &str) -> Result<SignedIn, SessionError> {
    let resp = auth
        .http
        .post(auth.token_endpoint("password"))
        .header("apikey", &auth.anon_key)
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await?;

    let status = resp.status();
    if status.is_client_error() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SessionError::InvalidCredentials(backend_error_message(status.as_u16(), &body)));
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SessionError::Backend(backend_error_message(status.as_u16(), &body)));
    }

    let grant: GrantResponse = resp.json().await?;
    Ok(grant.into())
}

/// Create an account. The backend issues a session immediately when email
/// confirmation is disabled, so this returns the same shape as `sign_in`.
///
/// # Errors
///
/// `InvalidCredentials` for 4xx responses (duplicate email, weak password),
/// `Backend`/`Http` otherwise.
pub async fn register(
    auth: &AuthBackend,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<SignedIn, SessionError> {
    let resp = auth
        .http
        .post(auth.signup_endpoint())
        .header("apikey", &auth.anon_key)
        .json(&serde_json::json!({
            "email": email,
            "password": password,
            "data": { "first_name": first_name, "last_name": last_name },
        }))
        .send()
        .await?;

    let status = resp.status();
    if status.is_client_error() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SessionError::InvalidCredentials(backend_error_message(status.as_u16(), &body)));
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SessionError::Backend(backend_error_message(status.as_u16(), &body)));
    }

    let grant: GrantResponse = resp.json().await?;
    Ok(grant.into())
}

/// Invalidate the session behind an access token. Best-effort: callers
/// clear cookies regardless of the outcome.
///
/// # Errors
///
/// Returns an error for transport failures or non-success statuses.
pub async fn sign_out(auth: &AuthBackend, access_token: &str) -> Result<(), SessionError> {
    let resp = auth
        .http
        .post(auth.logout_endpoint())
        .header("apikey", &auth.anon_key)
        .bearer_auth(access_token)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SessionError::Backend(backend_error_message(status.as_u16(), &body)));
    }
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
