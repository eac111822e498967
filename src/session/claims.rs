use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::SessionError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Student,
    Parent,
    Other(String),
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "student" => Role::Student,
            "parent" => Role::Parent,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(r: Role) -> Self {
        r.to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => f.write_str("student"),
            Role::Parent => f.write_str("parent"),
            Role::Other(s) => f.write_str(s),
        }
    }
}

/// The subset of the session JWT payload the client reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    pub role: Role,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub college_id: Option<String>,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(i64),
    Str(String),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Num(n) => n.to_string(),
            RawId::Str(s) => s,
        }
    }
}

fn id_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    RawId::deserialize(d).map(String::from)
}

fn opt_id_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawId>::deserialize(d)?.map(String::from))
}

impl Claims {
    /// Reads the payload segment of a JWT.
    ///
    /// The signature is not checked; the server verifies tokens on every
    /// request and the client never holds the signing key.
    pub fn decode(token: &str) -> Result<Self, SessionError> {
        let mut parts = token.trim().split('.');
        let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
            _ => return Err(SessionError::MalformedToken),
        };
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_unix)
    }
}
