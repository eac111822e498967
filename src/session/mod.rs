//! Login sessions.
//!
//! [`Claims`] are decoded from the JWT returned by the login endpoint.
//! [`TokenStore`] persists the raw token between runs; [`FileTokenStore`]
//! writes it to disk. [`Authenticator`] owns the session lifecycle and is
//! passed explicitly to whatever needs the current user.

mod claims;
mod store;

pub use claims::{Claims, Role};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};

use anyhow::Result;
use tracing::{info, warn};

use crate::error::SessionError;
use crate::services::ResultsApi;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
}

impl Session {
    pub fn from_token(token: String) -> Result<Self, SessionError> {
        let claims = Claims::decode(&token)?;
        Ok(Self { token, claims })
    }

    pub fn user_id(&self) -> &str {
        &self.claims.user_id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

pub const RESTORE_FAILED: &str = "Failed to restore authentication state";

/// Drives login, restore, and logout against a [`ResultsApi`] and a
/// [`TokenStore`].
pub struct Authenticator<A, S> {
    api: A,
    store: S,
    state: AuthState,
}

impl<A: ResultsApi, S: TokenStore> Authenticator<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            state: AuthState::default(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session.as_ref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Loads a previously saved token.
    ///
    /// A missing token leaves the state logged out. An expired token is
    /// reported as [`SessionError::Expired`]; any other unreadable or
    /// undecodable token sets [`RESTORE_FAILED`] as the state's error.
    pub async fn restore(&mut self) -> &AuthState {
        self.restore_at(chrono::Utc::now().timestamp()).await
    }

    /// [`restore`](Self::restore) with an explicit clock, in Unix seconds.
    pub async fn restore_at(&mut self, now_unix: i64) -> &AuthState {
        let restored = match self.store.load().await {
            Ok(Some(token)) => Session::from_token(token).and_then(|s| {
                if s.claims.is_expired(now_unix) {
                    Err(SessionError::Expired)
                } else {
                    Ok(Some(s))
                }
            }),
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        };

        self.state = match restored {
            Ok(session) => AuthState {
                session,
                error: None,
            },
            Err(SessionError::Expired) => {
                info!("Stored session has expired");
                AuthState {
                    session: None,
                    error: Some(SessionError::Expired.to_string()),
                }
            }
            Err(e) => {
                warn!(error = %e, "Could not restore session");
                AuthState {
                    session: None,
                    error: Some(RESTORE_FAILED.to_string()),
                }
            }
        };
        &self.state
    }

    /// Logs in and saves the token. On failure the state is logged out and
    /// carries the error message.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&Session> {
        match self.try_login(email, password).await {
            Ok(session) => {
                info!(user_id = %session.user_id(), role = %session.claims.role, "Logged in");
                self.state = AuthState {
                    session: Some(session),
                    error: None,
                };
                self.state
                    .session
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("session missing after login"))
            }
            Err(e) => {
                self.state = AuthState {
                    session: None,
                    error: Some(e.to_string()),
                };
                Err(e)
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<Session> {
        let token = self.api.login(email, password).await?;
        let session = Session::from_token(token)?;
        self.store.save(&session.token).await?;
        Ok(session)
    }

    pub async fn logout(&mut self) -> Result<()> {
        self.store.clear().await?;
        self.state = AuthState::default();
        info!("Logged out");
        Ok(())
    }
}
