use crate::error::{DirectoryError, Result};
use crate::pipe::Pipe;
use crate::users::validate_email;
use async_trait::async_trait;

/// Parses a path segment into a positive user id.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseUserIdPipe;

#[async_trait]
impl Pipe for ParseUserIdPipe {
    type Input = String;
    type Output = i64;

    async fn transform(&self, input: String) -> Result<i64> {
        if input.is_empty() {
            return Err(DirectoryError::MissingId);
        }
        let id = input.parse::<i64>().map_err(|_| DirectoryError::InvalidId)?;
        if id <= 0 {
            return Err(DirectoryError::NonPositiveId);
        }
        Ok(id)
    }
}

/// Checks an email against `validate_email` when `strict` is set; otherwise passes it through.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailFormatPipe {
    pub strict: bool,
}

#[async_trait]
impl Pipe for EmailFormatPipe {
    type Input = String;
    type Output = String;

    async fn transform(&self, input: String) -> Result<String> {
        if self.strict && !validate_email(&input) {
            return Err(DirectoryError::InvalidEmail);
        }
        Ok(input)
    }
}
