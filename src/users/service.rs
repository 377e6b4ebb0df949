use super::domain::{CreateUserRequest, User};
use super::repository::{NewUser, UserRepository};
use crate::config::ServerConfig;
use crate::di::{Container, Injectable};
use crate::error::{DirectoryError, Result};
use crate::pipe::Pipe;
use crate::pipe::builtins::{EmailFormatPipe, ParseUserIdPipe};
use std::sync::Arc;

/// Lookup and creation rules for directory users.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    parse_id: ParseUserIdPipe,
    email_format: EmailFormatPipe,
}

impl Injectable for UserService {
    fn inject(container: &Container) -> Result<Self> {
        let repository = container.resolve_trait::<dyn UserRepository>()?;
        let strict_email = container
            .resolve::<ServerConfig>()
            .map(|config| config.strict_email)
            .unwrap_or(false);
        Ok(Self::new(repository, strict_email))
    }
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, strict_email: bool) -> Self {
        Self {
            repository,
            parse_id: ParseUserIdPipe,
            email_format: EmailFormatPipe {
                strict: strict_email,
            },
        }
    }

    pub fn strict_email(&self) -> bool {
        self.email_format.strict
    }

    /// Looks up a user by the raw id taken from the request path.
    pub async fn get(&self, raw_id: &str) -> Result<User> {
        let id = self.parse_id.transform(raw_id.to_string()).await?;
        let user = self
            .repository
            .find_by_id(id)
            .await
            .ok_or(DirectoryError::NotFound)?;
        tracing::debug!(id, "user found");
        Ok(user)
    }

    /// Decodes a raw request body and creates the user it describes.
    pub async fn create_from_body(&self, body: &[u8]) -> Result<User> {
        let request = CreateUserRequest::decode(body)?;
        self.create(request).await
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<User> {
        if request.name().trim().is_empty() {
            return Err(DirectoryError::MissingName);
        }
        if request.email().trim().is_empty() {
            return Err(DirectoryError::MissingEmail);
        }
        let email = self.email_format.transform(request.email().to_string()).await?;

        let user = self
            .repository
            .insert_unique_email(NewUser {
                name: request.name().to_string(),
                email,
            })
            .await?;

        tracing::info!(id = user.id, "user created");
        Ok(user)
    }
}
