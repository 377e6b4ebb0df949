use crate::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Body of `POST /users`.
///
/// Every field may be absent or `null`. `id` is accepted for shape
/// compatibility with [`User`] but never used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Decodes the first JSON value in `body`. Anything after it is ignored.
    ///
    /// The value is read as a plain JSON tree first, so a repeated key keeps
    /// its last occurrence instead of failing the typed decode.
    pub fn decode(body: &[u8]) -> Result<Self> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<serde_json::Value>()
            .next()
            .ok_or(DirectoryError::MalformedBody)?
            .map_err(|e| {
                tracing::debug!(error = %e, "request body is not json");
                DirectoryError::MalformedBody
            })?;

        serde_json::from_value::<Option<CreateUserRequest>>(first)
            .map(Option::unwrap_or_default)
            .map_err(|e| {
                tracing::debug!(error = %e, "request body has the wrong shape");
                DirectoryError::MalformedBody
            })
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}
