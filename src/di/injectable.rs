use crate::di::Container;
use crate::error::Result;

/// Types that can build themselves from services already in the container.
///
/// # Example
/// ```
/// use user_directory::di::{Container, Injectable};
/// use user_directory::users::{InMemoryUserRepository, UserRepository, UserService};
/// use std::sync::Arc;
///
/// let mut container = Container::new();
/// container.register(InMemoryUserRepository::seeded());
/// container.register_trait::<dyn UserRepository, InMemoryUserRepository, _>(|r| r as Arc<dyn UserRepository>);
///
/// let service = UserService::inject(&container).unwrap();
/// assert!(!service.strict_email());
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
