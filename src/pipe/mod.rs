use crate::error::Result;
use async_trait::async_trait;

pub mod builtins;

/// A transformation and validation step applied to raw request input.
#[async_trait]
pub trait Pipe: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn transform(&self, input: Self::Input) -> Result<Self::Output>;
}
