//! The user directory: records, storage, rules and HTTP handlers.

pub mod controller;
mod domain;
mod repository;
mod service;
mod validation;

pub use controller::router;
pub use domain::{CreateUserRequest, User};
pub use repository::{InMemoryUserRepository, NewUser, UserRepository};
pub use service::UserService;
pub use validation::{format_user_display, validate_email};

use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::module::Module;
use std::sync::Arc;

/// Registers the store, its `dyn UserRepository` binding and [`UserService`].
///
/// A repository registered beforehand is kept, which lets tests start from
/// their own fixtures. Otherwise the seeded store is used.
pub struct UsersModule;

impl Module for UsersModule {
    fn register(container: &mut Container) -> Result<()> {
        if !container.contains::<InMemoryUserRepository>() {
            container.register(InMemoryUserRepository::seeded());
        }
        container.register_trait::<dyn UserRepository, InMemoryUserRepository, _>(|repo| {
            repo as Arc<dyn UserRepository>
        });

        let service = UserService::inject(container)?;
        container.register(service);
        Ok(())
    }
}
